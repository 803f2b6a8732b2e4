//! Error taxonomy shared across the discovery pipeline.
//!
//! The split mirrors the two request surfaces plus identifier parsing: [`AuthError`] for the
//! identity token endpoint, [`RegistryError`] for resource listings, and [`IdentifierError`] for
//! malformed offer identifiers. Which class is fatal depends on the stage, not the class; see the
//! catalog module for the degrade-not-fail policy.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Identity-service token request failed.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Resource listing request failed.
	#[error(transparent)]
	Registry(#[from] RegistryError),
	/// Offer identifier could not be parsed.
	#[error(transparent)]
	Identifier(#[from] IdentifierError),

	/// HTTP client could not be constructed from the credentials.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a transport's builder failure inside [`Error::HttpClientBuild`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Failures raised while requesting tokens from the identity service.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Transport-level failure reaching the token endpoint.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Token endpoint answered outside the 200/201 success range.
	#[error("Token endpoint returned HTTP {status}.")]
	Status {
		/// HTTP status code of the rejected response.
		status: u16,
	},
	/// Token endpoint response omitted the `X-Subject-Token` header.
	#[error("Token endpoint response is missing the X-Subject-Token header.")]
	MissingSubjectToken,
	/// Scoped token response body could not be parsed.
	#[error("Scoped token response returned malformed JSON.")]
	BodyParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl AuthError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Failures raised while listing resources from a control-plane endpoint.
#[derive(Debug, ThisError)]
pub enum RegistryError {
	/// Transport-level failure reaching the listing endpoint.
	#[error("Network error occurred while calling a listing endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Listing endpoint answered outside the 200/201 success range.
	#[error("Listing endpoint returned HTTP {status}.")]
	Status {
		/// HTTP status code of the rejected response.
		status: u16,
	},
	/// Listing response body did not match the expected envelope.
	#[error("Listing endpoint returned a malformed envelope.")]
	EnvelopeParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl RegistryError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Failures raised while parsing offer identifiers.
#[derive(Debug, ThisError)]
pub enum IdentifierError {
	/// Identifier does not match the `openstack-<service>-<project>-project-apb` form.
	#[error("Offer identifier `{id}` does not match the openstack-<service>-<project>-project-apb form.")]
	Malformed {
		/// Offending identifier string.
		id: String,
	},
	/// Identifier names a service kind this catalog does not know.
	#[error("Offer identifier `{id}` names unknown service kind `{service}`.")]
	UnknownService {
		/// Offending identifier string.
		id: String,
		/// Service-kind label that failed to resolve.
		service: String,
	},
}
