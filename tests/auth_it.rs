// crates.io
use httpmock::prelude::*;
// self
use openstack_catalog::{
	auth::Authenticator,
	config::Credentials,
	error::AuthError,
	http::RegistryHttpClient,
	url::Url,
};

const TOKEN_PATH: &str = "/identity/v3/auth/tokens";

fn credentials(server: &MockServer) -> Credentials {
	Credentials {
		url: Url::parse(&server.base_url())
			.expect("Mock control-plane URL should parse."),
		user: "admin".into(),
		pass: "hunter2".into(),
		org: None,
		runner: "quay.io/openstack/heat-runner:latest".into(),
		danger_accept_invalid_certs: false,
	}
}

#[tokio::test]
async fn unscoped_token_reads_subject_header() {
	let server = MockServer::start_async().await;
	let credentials = credentials(&server);
	let http = RegistryHttpClient::from_credentials(&credentials)
		.expect("HTTP client should build from plain credentials.");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH).body_includes(r#""name":"admin""#);
			then.status(201)
				.header("X-Subject-Token", "tok-unscoped")
				.header("content-type", "application/json")
				.body("{}");
		})
		.await;
	let token = Authenticator::new(&credentials, &http)
		.unscoped_token()
		.await
		.expect("Unscoped token request should succeed.");

	assert_eq!(token.subject(), Some("tok-unscoped"));
	assert_eq!(token.project_id, None);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn scoped_token_resolves_project_id() {
	let server = MockServer::start_async().await;
	let credentials = credentials(&server);
	let http = RegistryHttpClient::from_credentials(&credentials)
		.expect("HTTP client should build from plain credentials.");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH).body_includes(r#""scope""#);
			then.status(201)
				.header("X-Subject-Token", "tok-scoped")
				.header("content-type", "application/json")
				.body(r#"{"token":{"project":{"id":"proj-123","name":"dev"}}}"#);
		})
		.await;
	let token = Authenticator::new(&credentials, &http)
		.scoped_token("dev")
		.await
		.expect("Scoped token request should succeed.");

	assert_eq!(token.subject(), Some("tok-scoped"));
	assert_eq!(token.project_id.as_deref(), Some("proj-123"));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn missing_subject_header_fails() {
	let server = MockServer::start_async().await;
	let credentials = credentials(&server);
	let http = RegistryHttpClient::from_credentials(&credentials)
		.expect("HTTP client should build from plain credentials.");

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(201).header("content-type", "application/json").body("{}");
		})
		.await;

	let err = Authenticator::new(&credentials, &http)
		.unscoped_token()
		.await
		.expect_err("A response without X-Subject-Token should fail.");

	assert!(matches!(err, AuthError::MissingSubjectToken));
}

#[tokio::test]
async fn rejected_token_request_reports_status() {
	let server = MockServer::start_async().await;
	let credentials = credentials(&server);
	let http = RegistryHttpClient::from_credentials(&credentials)
		.expect("HTTP client should build from plain credentials.");

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(401);
		})
		.await;

	let err = Authenticator::new(&credentials, &http)
		.scoped_token("dev")
		.await
		.expect_err("A 401 from the token endpoint should fail.");

	assert!(matches!(err, AuthError::Status { status: 401 }));
}

#[tokio::test]
async fn malformed_scoped_body_fails_to_parse() {
	let server = MockServer::start_async().await;
	let credentials = credentials(&server);
	let http = RegistryHttpClient::from_credentials(&credentials)
		.expect("HTTP client should build from plain credentials.");

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(201)
				.header("X-Subject-Token", "tok-scoped")
				.header("content-type", "application/json")
				.body("not json");
		})
		.await;

	let err = Authenticator::new(&credentials, &http)
		.scoped_token("dev")
		.await
		.expect_err("A malformed scoped body should fail.");

	assert!(matches!(err, AuthError::BodyParse { .. }));
}
