// std
use std::thread;
// crates.io
use color_eyre::Result;
use serde_json::{Map, Value, json};
// self
use app_credentials::{
	auth::{AuthCode, Credential, IdToken},
	error::Error,
	provider::{self, AuthProvider},
};

// Mirrors what a transport layer embeds into its login request.
fn login_body(credential: &Credential) -> Result<Value> {
	Ok(json!({
		"provider": credential.provider_as_string(),
		"options": credential.serialize_as_value()?,
	}))
}

fn function_document() -> Map<String, Value> {
	let mut document = Map::new();

	document.insert("name".into(), Value::from("pilot"));
	document.insert("realmCustomAuthFuncUserId".into(), Value::from("fn-42"));

	document
}

#[test]
fn transport_can_resolve_the_provider_it_was_given() -> Result<()> {
	let credentials = [
		Credential::anonymous(),
		Credential::username_password("ann@example.com", "correct horse")?,
		Credential::google(IdToken::new("eyJ.id.token".into()))?,
		Credential::function(function_document()),
		Credential::server_api_key("srv-key")?,
	];

	for credential in &credentials {
		let body = login_body(credential)?;
		let identifier = body["provider"].as_str().expect("Provider identifier should be a string.");

		assert_eq!(provider::provider_of(identifier)?, credential.provider());
		assert!(body["options"].is_object());
	}

	Ok(())
}

#[test]
fn login_bodies_carry_provider_specific_options() -> Result<()> {
	let body = login_body(&Credential::google(AuthCode::new("4/0Ad".into()))?)?;

	assert_eq!(body, json!({ "provider": "oauth2-google", "options": { "authCode": "4/0Ad" } }));

	let body = login_body(&Credential::function(function_document()))?;

	assert_eq!(
		body,
		json!({
			"provider": "custom-function",
			"options": { "name": "pilot", "realmCustomAuthFuncUserId": "fn-42" }
		})
	);

	let body = login_body(&Credential::anonymous())?;

	assert_eq!(body, json!({ "provider": "anon-user", "options": {} }));

	Ok(())
}

#[test]
fn stored_credentials_keep_their_payload() -> Result<()> {
	let mut pending: Vec<Option<Credential>> = vec![None; 2];

	pending[0] = Some(Credential::user_api_key("usr-key")?);
	pending[1] = Some(Credential::facebook("EAAB")?);

	let rendered = pending
		.into_iter()
		.flatten()
		.map(|credential| credential.serialize())
		.collect::<Result<Vec<_>, Error>>()?;

	assert_eq!(rendered, [r#"{"key":"usr-key"}"#, r#"{"accessToken":"EAAB"}"#]);

	Ok(())
}

#[test]
fn shared_credentials_serialize_identically_across_threads() -> Result<()> {
	let credential = Credential::function(function_document());
	let expected = credential.serialize()?;
	let outputs = thread::scope(|scope| {
		let handles = (0..4)
			.map(|i| {
				let owned = credential.clone();
				let shared = &credential;

				scope.spawn(move || if i % 2 == 0 { owned.serialize() } else { shared.serialize() })
			})
			.collect::<Vec<_>>();

		handles
			.into_iter()
			.map(|handle| handle.join().expect("Serialization thread should not panic."))
			.collect::<Result<Vec<_>, Error>>()
	})?;

	assert!(outputs.iter().all(|output| *output == expected));

	Ok(())
}

#[test]
fn invalid_inputs_report_the_provider_and_field() {
	let err = Credential::username_password("ann@example.com", "")
		.expect_err("An empty password must be rejected.");

	assert_eq!(
		err.to_string(),
		"Credential input `password` for the local-userpass provider cannot be empty."
	);
	assert!(matches!(
		err,
		Error::InvalidCredentialInput { provider: AuthProvider::UsernamePassword, field: "password" }
	));
}
