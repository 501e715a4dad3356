//! Optional observability helpers for credential construction and serialization.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `app_credentials.credential` with the
//!   `provider` and `stage` fields, plus one event per outcome.
//! - Enable `metrics` to increment the `app_credentials_credential_total` counter for every
//!   success/failure, labeled by `provider` + `stage` + `outcome`.
//!
//! Secret material never reaches either sink; only provider identifiers and labels are recorded.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, provider::AuthProvider};

/// Credential lifecycle stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialStage {
	/// Constructor validating inputs and capturing the payload.
	Build,
	/// Rendering the captured payload into JSON.
	Serialize,
}
impl CredentialStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CredentialStage::Build => "build",
			CredentialStage::Serialize => "serialize",
		}
	}
}
impl Display for CredentialStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialOutcome {
	/// The stage completed.
	Success,
	/// The stage returned an error to the caller.
	Failure,
}
impl CredentialOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CredentialOutcome::Success => "success",
			CredentialOutcome::Failure => "failure",
		}
	}
}
impl Display for CredentialOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the result of a stage on every enabled sink and hands it back unchanged.
pub(crate) fn observe<T>(
	provider: AuthProvider,
	stage: CredentialStage,
	result: Result<T>,
) -> Result<T> {
	let outcome = match &result {
		Ok(_) => CredentialOutcome::Success,
		Err(_) => CredentialOutcome::Failure,
	};

	record_credential_event(provider, stage, outcome, result.as_ref().err());
	record_credential_outcome(provider, stage, outcome);

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_are_stable() {
		assert_eq!(CredentialStage::Build.to_string(), "build");
		assert_eq!(CredentialStage::Serialize.as_str(), "serialize");
		assert_eq!(CredentialOutcome::Success.as_str(), "success");
		assert_eq!(CredentialOutcome::Failure.to_string(), "failure");
	}

	#[test]
	fn observe_passes_results_through() {
		let ok = observe(AuthProvider::Anonymous, CredentialStage::Build, Ok(7_u8))
			.expect("Successful results should pass through untouched.");

		assert_eq!(ok, 7);

		let err = observe::<()>(
			AuthProvider::Custom,
			CredentialStage::Build,
			Err(Error::InvalidCredentialInput { provider: AuthProvider::Custom, field: "token" }),
		)
		.expect_err("Failures should pass through untouched.");

		assert!(err.is_invalid_input());
	}
}
