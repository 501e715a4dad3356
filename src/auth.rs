//! Login credentials, the tagged tokens they accept, and the document boundary used by
//! function payloads.

pub mod credential;
pub mod document;
pub mod secret;
pub mod token;

pub use credential::*;
pub use document::*;
pub use secret::*;
pub use token::*;
