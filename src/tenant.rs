//! Project enumeration for the discovery pass.

// self
use crate::{
	_prelude::*,
	auth::Authenticator,
	config::Credentials,
	http::RegistryHttpClient,
	lister::ObjectLister,
	resource::ResourceKind,
};

/// Produces the set of projects the configured credentials may act within.
#[derive(Clone, Debug)]
pub struct TenantEnumerator<'a> {
	credentials: &'a Credentials,
	http: &'a RegistryHttpClient,
}
impl<'a> TenantEnumerator<'a> {
	/// Creates an enumerator borrowing the adapter's credentials and transport.
	pub fn new(credentials: &'a Credentials, http: &'a RegistryHttpClient) -> Self {
		Self { credentials, http }
	}

	/// Returns the configured fixed project, or discovers the accessible projects.
	///
	/// A fixed project short-circuits without any network call. Unlike per-kind listing,
	/// failures here propagate: without projects no offers can be produced, so this path is
	/// allowed to fail the whole discovery pass.
	pub async fn enumerate(&self) -> Result<Vec<String>> {
		if let Some(org) = self.credentials.fixed_org() {
			return Ok(vec![org.to_owned()]);
		}

		let token = Authenticator::new(self.credentials, self.http).unscoped_token().await?;
		let projects = ObjectLister::new(self.credentials, self.http)
			.list(&token, ResourceKind::Project, None)
			.await?;

		Ok(projects)
	}
}
