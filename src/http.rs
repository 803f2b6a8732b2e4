//! HTTP transport shared by the authenticator and the object lister.
//!
//! The wrapper keeps the control-plane request policy in one place: JSON content, the
//! `X-Auth-Token` header when a token is present, and 200/201 as the only success statuses.
//! Transport and status failures are surfaced as [`AuthError`]/[`RegistryError`] so each call
//! site decides whether they are fatal or merely degrade the pass.

// crates.io
use reqwest::{Client as ReqwestClient, header::HeaderMap};
// self
use crate::{
	_prelude::*,
	config::Credentials,
	error::{AuthError, RegistryError},
};

/// Header carrying the issued token on identity responses.
pub const X_SUBJECT_TOKEN: &str = "X-Subject-Token";
/// Header carrying the bearer token on resource requests.
pub const X_AUTH_TOKEN: &str = "X-Auth-Token";

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct RegistryHttpClient(pub ReqwestClient);
impl RegistryHttpClient {
	/// Builds a client honoring the credentials' TLS policy.
	pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(credentials.danger_accept_invalid_certs)
			.build()
			.map_err(Error::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// POSTs a JSON body, returning response headers and raw body on 200/201.
	pub(crate) async fn post_json<B>(
		&self,
		url: &str,
		body: &B,
	) -> Result<(HeaderMap, Vec<u8>), AuthError>
	where
		B: Serialize,
	{
		let response = self.0.post(url).json(body).send().await.map_err(AuthError::network)?;
		let status = response.status().as_u16();

		if !matches!(status, 200 | 201) {
			return Err(AuthError::Status { status });
		}

		let headers = response.headers().to_owned();
		let body = response.bytes().await.map_err(AuthError::network)?.to_vec();

		Ok((headers, body))
	}

	/// GETs a listing endpoint, attaching the token header when one is present.
	pub(crate) async fn get(
		&self,
		url: &str,
		token: Option<&str>,
	) -> Result<Vec<u8>, RegistryError> {
		let mut request = self.0.get(url);

		if let Some(token) = token {
			request = request.header(X_AUTH_TOKEN, token);
		}

		let response = request.send().await.map_err(RegistryError::network)?;
		let status = response.status().as_u16();

		if !matches!(status, 200 | 201) {
			return Err(RegistryError::Status { status });
		}

		Ok(response.bytes().await.map_err(RegistryError::network)?.to_vec())
	}
}

/// Base URL rendered without a trailing slash, ready for path concatenation.
pub(crate) fn base_str(url: &Url) -> &str {
	url.as_str().trim_end_matches('/')
}

/// Joins the control-plane base URL with a fixed endpoint path.
pub(crate) fn endpoint_url(base: &Url, path: &str) -> String {
	format!("{}{path}", base_str(base))
}
