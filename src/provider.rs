//! Closed registry of identity providers and their canonical wire identifiers.
//!
//! [`AuthProvider`] enumerates every backend a credential can target. The `REGISTRY` table is
//! the single source of truth for wire-format provider names: [`identifier_of`] and
//! [`provider_of`] are both derived from it, so adding a provider means adding one variant and
//! one table row together.

// self
use crate::_prelude::*;

/// Identity providers accepted by the authentication endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AuthProvider {
	/// Anonymous login without any user input.
	Anonymous,
	/// Facebook OAuth 2.0 access token.
	Facebook,
	/// Google sign-in (authorization code or ID token).
	Google,
	/// Sign in with Apple ID token.
	Apple,
	/// Custom JWT issued by a third-party authority.
	Custom,
	/// Email/username and password.
	UsernamePassword,
	/// Payload evaluated by a server-side authentication function.
	Function,
	/// API key minted for a user.
	UserApiKey,
	/// API key minted for a server.
	///
	/// Identified as `server-api-key`, a crate-specific name; backends that accept both key
	/// kinds under `api-key` need the transport to map it.
	ServerApiKey,
}
impl AuthProvider {
	/// Every provider, in declaration order.
	pub const ALL: [AuthProvider; 9] = [
		AuthProvider::Anonymous,
		AuthProvider::Facebook,
		AuthProvider::Google,
		AuthProvider::Apple,
		AuthProvider::Custom,
		AuthProvider::UsernamePassword,
		AuthProvider::Function,
		AuthProvider::UserApiKey,
		AuthProvider::ServerApiKey,
	];

	/// Returns the canonical wire identifier for the provider.
	pub const fn as_str(self) -> &'static str {
		REGISTRY[self as usize].1
	}
}
impl Display for AuthProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for AuthProvider {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		provider_of(s)
	}
}
impl TryFrom<String> for AuthProvider {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		provider_of(&value)
	}
}
impl From<AuthProvider> for &'static str {
	fn from(value: AuthProvider) -> Self {
		value.as_str()
	}
}

// Indexed by discriminant; rows follow declaration order.
const REGISTRY: [(AuthProvider, &str); 9] = [
	(AuthProvider::Anonymous, "anon-user"),
	(AuthProvider::Facebook, "oauth2-facebook"),
	(AuthProvider::Google, "oauth2-google"),
	(AuthProvider::Apple, "oauth2-apple"),
	(AuthProvider::Custom, "custom-token"),
	(AuthProvider::UsernamePassword, "local-userpass"),
	(AuthProvider::Function, "custom-function"),
	(AuthProvider::UserApiKey, "api-key"),
	(AuthProvider::ServerApiKey, "server-api-key"),
];

/// Returns the canonical wire identifier for `provider`.
pub const fn identifier_of(provider: AuthProvider) -> &'static str {
	provider.as_str()
}

/// Resolves a wire identifier back into its [`AuthProvider`].
pub fn provider_of(identifier: &str) -> Result<AuthProvider> {
	REGISTRY
		.iter()
		.find_map(|(provider, id)| (*id == identifier).then_some(*provider))
		.ok_or_else(|| Error::UnknownProvider { identifier: identifier.to_owned() })
}
