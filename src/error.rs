//! Credential-level error types shared by constructors, the provider registry, and serialization.

// self
use crate::{_prelude::*, provider::AuthProvider};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error raised by external collaborators (document encoders, JSON parsers).
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical credential error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A constructor received an empty or structurally invalid input.
	#[error("Credential input `{field}` for the {provider} provider cannot be empty.")]
	InvalidCredentialInput {
		/// Provider the credential was being built for.
		provider: AuthProvider,
		/// Name of the rejected input.
		field: &'static str,
	},
	/// An identifier does not belong to the provider registry.
	#[error("Unknown authentication provider identifier `{identifier}`.")]
	UnknownProvider {
		/// The identifier that failed to resolve.
		identifier: String,
	},
	/// The payload could not be rendered into JSON.
	#[error("Credential payload could not be serialized.")]
	SerializationFailure {
		/// Failure reported by the document collaborator or JSON parser.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a collaborator's rendering failure inside [`Error::SerializationFailure`].
	pub fn serialization(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::SerializationFailure { source: Box::new(src) }
	}

	/// Returns `true` if the error was raised by a constructor's input validation.
	pub fn is_invalid_input(&self) -> bool {
		matches!(self, Self::InvalidCredentialInput { .. })
	}
}
impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Self {
		Self::serialization(e)
	}
}
