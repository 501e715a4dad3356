//! Boundary to external document libraries used by function credentials.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, error::BoxError};

/// Key-ordered document that can render itself as canonical JSON.
///
/// Function credentials hold a document and only ask it to render when the credential is
/// serialized. Implement this for the document type of an external encoding library (BSON,
/// CBOR, ...) to pass its values through unchanged.
pub trait Document: Debug + Send + Sync {
	/// Renders the document into its canonical JSON string.
	fn to_canonical_json(&self) -> Result<String, BoxError>;
}
impl Document for Map<String, Value> {
	fn to_canonical_json(&self) -> Result<String, BoxError> {
		Ok(serde_json::to_string(self)?)
	}
}
impl<T> Document for Arc<T>
where
	T: ?Sized + Document,
{
	fn to_canonical_json(&self) -> Result<String, BoxError> {
		(**self).to_canonical_json()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn json_maps_render_in_key_order() {
		let Value::Object(map) = json!({ "zeta": [1, 2], "alpha": { "b": true, "a": null } })
		else {
			panic!("Fixture should be a JSON object.");
		};
		let rendered = map.to_canonical_json().expect("JSON maps should always render.");

		assert_eq!(rendered, r#"{"alpha":{"a":null,"b":true},"zeta":[1,2]}"#);
	}

	#[test]
	fn shared_documents_render_like_the_original() {
		let mut map = Map::new();

		map.insert("name".into(), Value::from("mongo"));

		let shared = Arc::new(map.clone());

		assert_eq!(
			shared.to_canonical_json().expect("Shared map should render."),
			map.to_canonical_json().expect("Map should render.")
		);
	}
}
