//! Host-framework facade over the discovery pipeline.

// self
use crate::{
	_prelude::*,
	catalog::{CatalogBuilder, OfferDescriptor, ParameterTable},
	config::Credentials,
	http::RegistryHttpClient,
};

/// Contract the hosting broker framework expects from a registry adapter.
///
/// Three operations: report a display name, enumerate provisionable offer identifiers, and fetch
/// full descriptors for an identifier list. The enumeration and fetch operations never fail; a
/// broken registry manifests as an empty catalog, not a crash.
pub trait RegistryAdapter
where
	Self: Send + Sync,
{
	/// Display name of the registry.
	fn name(&self) -> String;

	/// Enumerates every provisionable offer identifier.
	fn offer_ids(&self) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + '_>>;

	/// Fetches full offer descriptors for the given identifiers, omitting any that fail.
	fn fetch_descriptors(
		&self,
		ids: Vec<String>,
	) -> Pin<Box<dyn Future<Output = Vec<OfferDescriptor>> + Send + '_>>;
}

/// Registry adapter backed by one OpenStack control plane.
///
/// Owns the read-only [`Credentials`] for its lifetime. Discovery passes share nothing mutable,
/// so distinct adapters (for distinct control planes) may run concurrently.
#[derive(Clone, Debug)]
pub struct OpenstackAdapter {
	credentials: Credentials,
	http: RegistryHttpClient,
	table: ParameterTable,
}
impl OpenstackAdapter {
	/// Builds an adapter, constructing the HTTP transport from the credentials' TLS policy.
	pub fn new(credentials: Credentials) -> Result<Self> {
		let http = RegistryHttpClient::from_credentials(&credentials)?;

		Ok(Self { credentials, http, table: ParameterTable::default() })
	}

	/// Builds an adapter around an existing transport.
	pub fn with_http_client(credentials: Credentials, http: RegistryHttpClient) -> Self {
		Self { credentials, http, table: ParameterTable::default() }
	}

	/// Replaces the built-in parameter table with an operator-supplied one.
	pub fn with_parameter_table(mut self, table: ParameterTable) -> Self {
		self.table = table;

		self
	}

	/// Display name derived from the configured endpoint.
	pub fn display_name(&self) -> String {
		self.credentials.registry_name()
	}

	/// Enumerates offer identifiers in their wire encoding.
	pub async fn enumerate_offer_ids(&self) -> Vec<String> {
		self.builder().offer_ids().await.iter().map(ToString::to_string).collect()
	}

	/// Builds descriptors for the given identifiers, omitting any that fail.
	pub async fn build_descriptors(&self, ids: &[String]) -> Vec<OfferDescriptor> {
		self.builder().build_descriptors(ids).await
	}

	fn builder(&self) -> CatalogBuilder<'_> {
		CatalogBuilder::new(&self.credentials, &self.http, &self.table)
	}
}
impl RegistryAdapter for OpenstackAdapter {
	fn name(&self) -> String {
		self.display_name()
	}

	fn offer_ids(&self) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + '_>> {
		Box::pin(self.enumerate_offer_ids())
	}

	fn fetch_descriptors(
		&self,
		ids: Vec<String>,
	) -> Pin<Box<dyn Future<Output = Vec<OfferDescriptor>> + Send + '_>> {
		Box::pin(async move { self.build_descriptors(&ids).await })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::{build_test_adapter, test_credentials};

	#[test]
	fn name_reports_the_endpoint_host() {
		let adapter = build_test_adapter("https://cloud.example.com:5000");

		assert_eq!(RegistryAdapter::name(&adapter), "cloud.example.com:5000");
	}

	#[test]
	fn name_falls_back_to_the_path_for_hostless_endpoints() {
		let mut credentials = test_credentials("https://cloud.example.com");

		credentials.url = Url::parse("unix:/var/run/openstack.sock")
			.expect("Host-less URL should parse.");

		let adapter =
			OpenstackAdapter::new(credentials).expect("Adapter should build for host-less URLs.");

		assert_eq!(adapter.display_name(), "/var/run/openstack.sock");
	}
}
