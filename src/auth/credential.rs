//! Provider-specific login credentials with deferred JSON rendering.
//!
//! A [`Credential`] pairs an [`AuthProvider`] with the owned inputs its payload needs. Inputs are
//! validated when the credential is built; the JSON payload is only rendered when
//! [`Credential::serialize`] is called, and rendering never mutates the credential.

// std
use std::borrow::Cow;
// self
use crate::{
	_prelude::*,
	auth::{AuthCodeTag, Document, IdTokenTag, Secret, TaggedToken, TokenTag},
	obs::{self, CredentialOutcome, CredentialSpan, CredentialStage},
	provider::AuthProvider,
};

/// Google login flows, told apart by the field carrying the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GoogleLogin {
	/// Server-side exchange of an OAuth 2.0 authorization code.
	AuthCode,
	/// Direct sign-in with an OpenID Connect ID token.
	IdToken,
}
impl GoogleLogin {
	/// Returns the payload field that carries the token for this flow.
	pub const fn field_name(self) -> &'static str {
		match self {
			GoogleLogin::AuthCode => "authCode",
			GoogleLogin::IdToken => "id_token",
		}
	}
}

/// Token tags accepted by [`Credential::google`].
pub trait GoogleFlow: TokenTag {
	/// Login flow selected by tokens carrying this tag.
	const LOGIN: GoogleLogin;
}
impl GoogleFlow for AuthCodeTag {
	const LOGIN: GoogleLogin = GoogleLogin::AuthCode;
}
impl GoogleFlow for IdTokenTag {
	const LOGIN: GoogleLogin = GoogleLogin::IdToken;
}

/// Opaque login credential for one identity provider.
///
/// Credentials are cheap to clone and safe to share across threads; clones of a function
/// credential share the same immutable document.
#[derive(Clone)]
pub struct Credential {
	provider: AuthProvider,
	payload: Payload,
}
impl Credential {
	/// Anonymous login; the payload is an empty object.
	pub fn anonymous() -> Self {
		Self::captured(AuthProvider::Anonymous, Payload::Anonymous)
	}

	/// Facebook login with an OAuth 2.0 access token.
	pub fn facebook(access_token: impl Into<String>) -> Result<Self> {
		let provider = AuthProvider::Facebook;

		Self::assemble(
			provider,
			required(provider, "access_token", access_token)
				.map(|token| Payload::Facebook { access_token: Secret::new(token) }),
		)
	}

	/// Sign in with Apple using the ID token returned by Apple.
	pub fn apple(id_token: impl Into<String>) -> Result<Self> {
		let provider = AuthProvider::Apple;

		Self::assemble(
			provider,
			required(provider, "id_token", id_token)
				.map(|token| Payload::Apple { id_token: Secret::new(token) }),
		)
	}

	/// Google login with either an [`AuthCode`](crate::auth::AuthCode) or an
	/// [`IdToken`](crate::auth::IdToken).
	///
	/// Both produce a [`AuthProvider::Google`] credential; the payload field reveals the flow.
	pub fn google<Tag>(token: TaggedToken<Tag>) -> Result<Self>
	where
		Tag: GoogleFlow,
	{
		let provider = AuthProvider::Google;
		let login = Tag::LOGIN;
		let payload = if token.is_empty() {
			Err(Error::InvalidCredentialInput { provider, field: login.field_name() })
		} else {
			Ok(Payload::Google { login, token: Secret::new(token.into_inner()) })
		};

		Self::assemble(provider, payload)
	}

	/// Login with a JWT issued by a custom authority.
	pub fn custom(token: impl Into<String>) -> Result<Self> {
		let provider = AuthProvider::Custom;

		Self::assemble(
			provider,
			required(provider, "token", token)
				.map(|token| Payload::Custom { token: Secret::new(token) }),
		)
	}

	/// Email/username and password login.
	pub fn username_password(
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<Self> {
		let provider = AuthProvider::UsernamePassword;
		let payload = required(provider, "username", username).and_then(|username| {
			let password = required(provider, "password", password)?;

			Ok(Payload::UsernamePassword { username, password: Secret::new(password) })
		});

		Self::assemble(provider, payload)
	}

	/// Login through a server-side authentication function receiving `document`.
	///
	/// The document is rendered when the credential is serialized, not before.
	pub fn function<D>(document: D) -> Self
	where
		D: 'static + Document,
	{
		Self::captured(AuthProvider::Function, Payload::FunctionDocument(Arc::new(document)))
	}

	/// Login through a server-side authentication function receiving a pre-serialized JSON
	/// payload.
	///
	/// The string is passed through verbatim; malformed JSON is only detected by the endpoint
	/// (or by [`serialize_as_value`](Self::serialize_as_value)).
	pub fn function_json(payload: impl Into<String>) -> Result<Self> {
		let provider = AuthProvider::Function;

		Self::assemble(
			provider,
			required(provider, "payload", payload).map(Payload::FunctionJson),
		)
	}

	/// Login with an API key created for a user.
	pub fn user_api_key(key: impl Into<String>) -> Result<Self> {
		let provider = AuthProvider::UserApiKey;

		Self::assemble(
			provider,
			required(provider, "key", key).map(|key| Payload::ApiKey { key: Secret::new(key) }),
		)
	}

	/// Login with an API key created for a server.
	pub fn server_api_key(key: impl Into<String>) -> Result<Self> {
		let provider = AuthProvider::ServerApiKey;

		Self::assemble(
			provider,
			required(provider, "key", key).map(|key| Payload::ApiKey { key: Secret::new(key) }),
		)
	}

	/// Provider this credential authenticates against.
	pub fn provider(&self) -> AuthProvider {
		self.provider
	}

	/// Canonical wire identifier of [`provider`](Self::provider).
	pub fn provider_as_string(&self) -> &'static str {
		self.provider.as_str()
	}

	/// Renders the login payload as a JSON string.
	///
	/// Rendering is pure: repeated calls return identical output. Only function credentials
	/// built from a [`Document`] can fail, when the document itself fails to render.
	pub fn serialize(&self) -> Result<String> {
		let _guard = CredentialSpan::new(self.provider, CredentialStage::Serialize).entered();

		obs::observe(self.provider, CredentialStage::Serialize, self.payload.to_json())
	}

	/// Renders the login payload as a structured JSON value, for callers embedding it into a
	/// larger request body.
	///
	/// Unlike [`serialize`](Self::serialize), pre-serialized function payloads are parsed here,
	/// so malformed JSON fails with [`Error::SerializationFailure`].
	pub fn serialize_as_value(&self) -> Result<serde_json::Value> {
		let _guard = CredentialSpan::new(self.provider, CredentialStage::Serialize).entered();

		obs::observe(self.provider, CredentialStage::Serialize, self.payload.to_value())
	}

	fn captured(provider: AuthProvider, payload: Payload) -> Self {
		let _guard = CredentialSpan::new(provider, CredentialStage::Build).entered();

		obs::record_credential_event(
			provider,
			CredentialStage::Build,
			CredentialOutcome::Success,
			None,
		);
		obs::record_credential_outcome(
			provider,
			CredentialStage::Build,
			CredentialOutcome::Success,
		);

		Self { provider, payload }
	}

	fn assemble(provider: AuthProvider, payload: Result<Payload>) -> Result<Self> {
		let _guard = CredentialSpan::new(provider, CredentialStage::Build).entered();

		let credential = payload.map(|payload| Self { provider, payload });

		obs::observe(provider, CredentialStage::Build, credential)
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("provider", &self.provider)
			.field("payload", &"<redacted>")
			.finish()
	}
}

#[derive(Clone)]
enum Payload {
	Anonymous,
	Facebook { access_token: Secret },
	Apple { id_token: Secret },
	Google { login: GoogleLogin, token: Secret },
	Custom { token: Secret },
	UsernamePassword { username: String, password: Secret },
	FunctionDocument(Arc<dyn Document>),
	FunctionJson(String),
	ApiKey { key: Secret },
}
impl Payload {
	fn render(&self) -> Result<Rendered<'_>> {
		let wire = match self {
			Payload::Anonymous => WirePayload::Empty {},
			Payload::Facebook { access_token } => WirePayload::AccessToken { access_token },
			Payload::Apple { id_token } => WirePayload::IdToken { id_token },
			Payload::Google { login: GoogleLogin::AuthCode, token } =>
				WirePayload::AuthCode { auth_code: token },
			Payload::Google { login: GoogleLogin::IdToken, token } =>
				WirePayload::IdToken { id_token: token },
			Payload::Custom { token } => WirePayload::Token { token },
			Payload::UsernamePassword { username, password } =>
				WirePayload::UsernamePassword { username, password },
			Payload::ApiKey { key } => WirePayload::Key { key },
			Payload::FunctionDocument(document) => {
				let json = document
					.to_canonical_json()
					.map_err(|source| Error::SerializationFailure { source })?;

				return Ok(Rendered::Json(Cow::Owned(json)));
			},
			Payload::FunctionJson(json) => return Ok(Rendered::Json(Cow::Borrowed(json.as_str()))),
		};

		Ok(Rendered::Wire(wire))
	}

	fn to_json(&self) -> Result<String> {
		match self.render()? {
			Rendered::Wire(wire) => Ok(serde_json::to_string(&wire)?),
			Rendered::Json(json) => Ok(json.into_owned()),
		}
	}

	fn to_value(&self) -> Result<serde_json::Value> {
		match self.render()? {
			Rendered::Wire(wire) => Ok(serde_json::to_value(&wire)?),
			Rendered::Json(json) => Ok(serde_json::from_str(&json)?),
		}
	}
}

enum Rendered<'a> {
	Wire(WirePayload<'a>),
	Json(Cow<'a, str>),
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePayload<'a> {
	Empty {},
	AccessToken {
		#[serde(rename = "accessToken")]
		access_token: &'a Secret,
	},
	AuthCode {
		#[serde(rename = "authCode")]
		auth_code: &'a Secret,
	},
	IdToken {
		id_token: &'a Secret,
	},
	Token {
		token: &'a Secret,
	},
	UsernamePassword {
		username: &'a str,
		password: &'a Secret,
	},
	Key {
		key: &'a Secret,
	},
}

fn required(
	provider: AuthProvider,
	field: &'static str,
	value: impl Into<String>,
) -> Result<String> {
	let value = value.into();

	if value.is_empty() {
		return Err(Error::InvalidCredentialInput { provider, field });
	}

	Ok(value)
}
