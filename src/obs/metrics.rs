// self
use crate::{
	obs::{CredentialOutcome, CredentialStage},
	provider::AuthProvider,
};

/// Records a credential outcome via the global metrics recorder (when enabled).
pub fn record_credential_outcome(
	provider: AuthProvider,
	stage: CredentialStage,
	outcome: CredentialOutcome,
) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"app_credentials_credential_total",
			"provider" => provider.as_str(),
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, stage, outcome);
	}
}
