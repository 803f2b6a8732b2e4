//! Identity-service authentication producing unscoped and scoped tokens.
//!
//! Both requests are password grants against `POST <base>/identity/v3/auth/tokens`; a scoped
//! request additionally carries a project scope block and resolves the project identifier out of
//! the response body. The token itself always arrives in the `X-Subject-Token` response header,
//! never the body.

// crates.io
use reqwest::header::HeaderMap;
// self
use crate::{
	_prelude::*,
	config::Credentials,
	error::AuthError,
	http::{RegistryHttpClient, X_SUBJECT_TOKEN, base_str},
};

/// Bearer token issued by the identity service for a single discovery pass.
///
/// Never persisted and never reused across passes. An empty token is the degraded stand-in used
/// when scoped authentication fails; listings made with it legitimately come back empty or
/// rejected.
#[derive(Clone, Debug, Default)]
pub struct Token {
	/// Opaque subject token forwarded as `X-Auth-Token`.
	pub subject: String,
	/// Project identifier resolved by a scoped request.
	pub project_id: Option<String>,
}
impl Token {
	/// Empty token used when scoped authentication failed and discovery degrades.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Subject string to forward on listing requests, `None` when the token is empty.
	pub fn subject(&self) -> Option<&str> {
		(!self.subject.is_empty()).then_some(self.subject.as_str())
	}
}

/// Issues password-grant token requests against the identity service.
#[derive(Clone, Debug)]
pub struct Authenticator<'a> {
	credentials: &'a Credentials,
	http: &'a RegistryHttpClient,
}
impl<'a> Authenticator<'a> {
	/// Creates an authenticator borrowing the adapter's credentials and transport.
	pub fn new(credentials: &'a Credentials, http: &'a RegistryHttpClient) -> Self {
		Self { credentials, http }
	}

	/// Requests a token with no project scope, used only to discover accessible projects.
	pub async fn unscoped_token(&self) -> Result<Token, AuthError> {
		let body = AuthRequest::unscoped(&self.credentials.user, &self.credentials.pass);
		let (headers, _) = self.http.post_json(&self.token_url(), &body).await?;

		Ok(Token { subject: subject_token(&headers)?, project_id: None })
	}

	/// Requests a token scoped to `project`, resolving the project's identifier from the body.
	pub async fn scoped_token(&self, project: &str) -> Result<Token, AuthError> {
		let body = AuthRequest::scoped(&self.credentials.user, &self.credentials.pass, project);
		let (headers, body) = self.http.post_json(&self.token_url(), &body).await?;
		let subject = subject_token(&headers)?;
		let mut deserializer = serde_json::Deserializer::from_slice(&body);
		let parsed: TokenResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| AuthError::BodyParse { source })?;

		Ok(Token { subject, project_id: parsed.token.project.map(|project| project.id) })
	}

	fn token_url(&self) -> String {
		format!("{}/identity/v3/auth/tokens", base_str(&self.credentials.url))
	}
}

fn subject_token(headers: &HeaderMap) -> Result<String, AuthError> {
	headers
		.get(X_SUBJECT_TOKEN)
		.and_then(|value| value.to_str().ok())
		.map(str::to_owned)
		.ok_or(AuthError::MissingSubjectToken)
}

#[derive(Debug, Serialize)]
struct AuthRequest<'r> {
	auth: Auth<'r>,
}
impl<'r> AuthRequest<'r> {
	fn unscoped(user: &'r str, pass: &'r str) -> Self {
		Self { auth: Auth { identity: Identity::password(user, pass), scope: None } }
	}

	fn scoped(user: &'r str, pass: &'r str, project: &'r str) -> Self {
		Self {
			auth: Auth {
				identity: Identity::password(user, pass),
				scope: Some(Scope {
					project: ScopedProject { name: project, domain: Domain::default() },
				}),
			},
		}
	}
}

#[derive(Debug, Serialize)]
struct Auth<'r> {
	identity: Identity<'r>,
	#[serde(skip_serializing_if = "Option::is_none")]
	scope: Option<Scope<'r>>,
}

#[derive(Debug, Serialize)]
struct Identity<'r> {
	methods: [&'static str; 1],
	password: Password<'r>,
}
impl<'r> Identity<'r> {
	fn password(user: &'r str, pass: &'r str) -> Self {
		Self {
			methods: ["password"],
			password: Password {
				user: User { name: user, domain: Domain::default(), password: pass },
			},
		}
	}
}

#[derive(Debug, Serialize)]
struct Password<'r> {
	user: User<'r>,
}

#[derive(Debug, Serialize)]
struct User<'r> {
	name: &'r str,
	domain: Domain,
	password: &'r str,
}

#[derive(Debug, Serialize)]
struct Domain {
	id: &'static str,
}
impl Default for Domain {
	fn default() -> Self {
		Self { id: "default" }
	}
}

#[derive(Debug, Serialize)]
struct Scope<'r> {
	project: ScopedProject<'r>,
}

#[derive(Debug, Serialize)]
struct ScopedProject<'r> {
	name: &'r str,
	domain: Domain,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
	#[serde(default)]
	token: TokenBody,
}

#[derive(Debug, Default, Deserialize)]
struct TokenBody {
	#[serde(default)]
	project: Option<ProjectRef>,
}

#[derive(Debug, Deserialize)]
struct ProjectRef {
	id: String,
}
