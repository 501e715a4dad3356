//! Phantom-tagged tokens that keep look-alike opaque strings apart at compile time.
//!
//! An OAuth authorization code and an OpenID Connect ID token are both plain strings on the
//! wire, yet the authentication endpoint treats them differently. [`TaggedToken`] carries a
//! zero-sized marker so [`AuthCode`] and [`IdToken`] are distinct types that cannot be assigned,
//! compared, or passed in place of one another:
//!
//! ```compile_fail
//! use app_credentials::auth::{AuthCode, IdToken};
//!
//! let code = AuthCode::new("4/0Ad".to_owned());
//! let id_token: IdToken = code;
//! ```
//!
//! ```compile_fail
//! use app_credentials::auth::{AuthCode, IdToken};
//!
//! let same = AuthCode::new("abc".to_owned()) == IdToken::new("abc".to_owned());
//! ```
//!
//! ```compile_fail
//! use app_credentials::auth::{AuthCode, IdToken};
//!
//! fn exchange(_: IdToken) {}
//!
//! exchange(AuthCode::new("abc".to_owned()));
//! ```
//!
//! Tokens only expose their value through [`TaggedToken::expose`]; they cannot be written out as
//! plain strings by serializers:
//!
//! ```compile_fail
//! use app_credentials::auth::IdToken;
//!
//! let json = serde_json::to_string(&IdToken::new("eyJ".to_owned()));
//! ```

// std
use std::marker::PhantomData;
// self
use crate::_prelude::*;

mod sealed {
	pub trait Sealed {}

	impl Sealed for super::AuthCodeTag {}
	impl Sealed for super::IdTokenTag {}
}

/// Compile-time marker distinguishing one kind of tagged token from another.
///
/// The trait is sealed; the crate defines every tag it accepts.
pub trait TokenTag: sealed::Sealed + 'static {
	/// Human-readable token kind used by the redacting formatters.
	const NAME: &'static str;
}

/// Marker for OAuth 2.0 authorization codes.
#[derive(Debug)]
pub enum AuthCodeTag {}
impl TokenTag for AuthCodeTag {
	const NAME: &'static str = "AuthCode";
}

/// Marker for OpenID Connect ID tokens.
#[derive(Debug)]
pub enum IdTokenTag {}
impl TokenTag for IdTokenTag {
	const NAME: &'static str = "IdToken";
}

/// OAuth 2.0 authorization code returned by a consent screen.
pub type AuthCode = TaggedToken<AuthCodeTag>;
/// OpenID Connect ID token (a signed JWT).
pub type IdToken = TaggedToken<IdTokenTag>;

/// Opaque string tagged with a compile-time marker.
pub struct TaggedToken<Tag> {
	value: String,
	_tag: PhantomData<fn() -> Tag>,
}
impl<Tag> TaggedToken<Tag>
where
	Tag: TokenTag,
{
	/// Wraps an owned token string.
	pub fn new(value: String) -> Self {
		Self { value, _tag: PhantomData }
	}

	/// Returns the raw token. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.value
	}

	/// Consumes the wrapper and returns the raw token.
	pub fn into_inner(self) -> String {
		self.value
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.value.is_empty()
	}
}
impl<Tag> Clone for TaggedToken<Tag> {
	fn clone(&self) -> Self {
		Self { value: self.value.clone(), _tag: PhantomData }
	}
}
impl<Tag> PartialEq for TaggedToken<Tag> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}
impl<Tag> Eq for TaggedToken<Tag> {}
impl<Tag> Hash for TaggedToken<Tag> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}
impl<Tag> AsRef<str> for TaggedToken<Tag> {
	fn as_ref(&self) -> &str {
		&self.value
	}
}
impl<Tag> Debug for TaggedToken<Tag>
where
	Tag: TokenTag,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple(Tag::NAME).field(&"<redacted>").finish()
	}
}
impl<Tag> Display for TaggedToken<Tag>
where
	Tag: TokenTag,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}(<redacted>)", Tag::NAME)
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn same_tag_tokens_compare_by_value() {
		let a = AuthCode::new("abc".into());
		let b = a.clone();

		assert_eq!(a, b);
		assert_ne!(a, AuthCode::new("abd".into()));
		assert_eq!(b.into_inner(), "abc");
	}

	#[test]
	fn formatters_redact_and_name_the_tag() {
		let code = AuthCode::new("4/0Ad-secret".into());
		let id_token = IdToken::new("eyJhbGciOi".into());

		assert_eq!(format!("{code:?}"), "AuthCode(\"<redacted>\")");
		assert_eq!(format!("{id_token}"), "IdToken(<redacted>)");
		assert_eq!(id_token.expose(), "eyJhbGciOi");
	}

	#[test]
	fn tokens_are_zero_cost() {
		assert_eq!(std::mem::size_of::<AuthCode>(), std::mem::size_of::<String>());
		assert_eq!(std::mem::size_of::<IdToken>(), std::mem::size_of::<String>());
	}

	#[test]
	fn tokens_work_as_map_keys() {
		let map = HashMap::from([(IdToken::new("a".into()), 1_u8), (IdToken::new("b".into()), 2)]);

		assert_eq!(map.get(&IdToken::new("b".into())), Some(&2));
	}
}
