//! Typed, provider-aware login credentials that render into canonical JSON payloads on demand.
//!
//! ```
//! use app_credentials::{
//! 	auth::{AuthCode, Credential},
//! 	provider::AuthProvider,
//! };
//!
//! let credential = Credential::google(AuthCode::new("4/0Ad-code".to_owned()))?;
//!
//! assert_eq!(credential.provider(), AuthProvider::Google);
//! assert_eq!(credential.provider_as_string(), "oauth2-google");
//! assert_eq!(credential.serialize()?, r#"{"authCode":"4/0Ad-code"}"#);
//! # Ok::<(), app_credentials::error::Error>(())
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		hash::{Hash, Hasher},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use {color_eyre as _, metrics_util as _, tracing_subscriber as _};
