// self
use crate::{
	_prelude::*,
	obs::{CredentialOutcome, CredentialStage},
	provider::AuthProvider,
};

/// A span builder wrapped around credential stages.
#[derive(Clone, Debug)]
pub struct CredentialSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CredentialSpan {
	/// Creates a new span tagged with the provider + stage.
	pub fn new(provider: AuthProvider, stage: CredentialStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"app_credentials.credential",
				provider = provider.as_str(),
				stage = stage.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (provider, stage);

			Self {}
		}
	}

	/// Enters the span for the remainder of the current scope.
	pub fn entered(self) -> CredentialSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CredentialSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CredentialSpanGuard {}
		}
	}
}

/// RAII guard returned by [`CredentialSpan::entered`].
pub struct CredentialSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CredentialSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CredentialSpanGuard(..)")
	}
}

/// Emits one structured event describing a stage outcome (when enabled).
pub fn record_credential_event(
	provider: AuthProvider,
	stage: CredentialStage,
	outcome: CredentialOutcome,
	error: Option<&Error>,
) {
	#[cfg(feature = "tracing")]
	{
		match error {
			Some(error) => tracing::warn!(
				provider = provider.as_str(),
				stage = stage.as_str(),
				outcome = outcome.as_str(),
				%error,
				"credential stage failed"
			),
			None => tracing::debug!(
				provider = provider.as_str(),
				stage = stage.as_str(),
				outcome = outcome.as_str(),
				"credential stage completed"
			),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, stage, outcome, error);
	}
}
