//! Single-request object listing with per-kind envelope handling.

// self
use crate::{
	_prelude::*,
	auth::Token,
	config::Credentials,
	error::RegistryError,
	http::{RegistryHttpClient, endpoint_url},
	obs,
	resource::{NamedObject, ResourceKind},
};

/// Issues one listing request per call and normalizes the heterogeneous response envelopes.
#[derive(Clone, Debug)]
pub struct ObjectLister<'a> {
	credentials: &'a Credentials,
	http: &'a RegistryHttpClient,
}
impl<'a> ObjectLister<'a> {
	/// Creates a lister borrowing the adapter's credentials and transport.
	pub fn new(credentials: &'a Credentials, http: &'a RegistryHttpClient) -> Self {
		Self { credentials, http }
	}

	/// Lists `kind`, returning the discovered object names in response order.
	///
	/// Networks are additionally filtered to `project_filter` ownership when provided; every
	/// other kind is scoped implicitly by the token. Callers treat failures here as an empty
	/// result for this kind, never as a failure of the whole pass.
	pub async fn list(
		&self,
		token: &Token,
		kind: ResourceKind,
		project_filter: Option<&str>,
	) -> Result<Vec<String>, RegistryError> {
		let url = listing_url(&self.credentials.url, kind);
		let body = self.http.get(&url, token.subject()).await?;
		let objects = kind.decode(&body)?;

		if objects.is_empty() {
			obs::warn_empty_listing(kind);
		}

		Ok(filter_names(kind, objects, project_filter))
	}
}

/// Projects decoded objects down to names, applying the network-only ownership filter.
fn filter_names(
	kind: ResourceKind,
	objects: Vec<NamedObject>,
	project_filter: Option<&str>,
) -> Vec<String> {
	objects
		.into_iter()
		.filter(|object| match (kind, project_filter) {
			(ResourceKind::Network, Some(project)) =>
				object.project_id.as_deref() == Some(project),
			_ => true,
		})
		.map(|object| object.name)
		.collect()
}

/// Builds the listing URL for a kind, expanding port-qualified paths.
///
/// The networking service listens on its own port and does not terminate TLS in the target
/// deployments, so its requests go out over plain HTTP against that port.
fn listing_url(base: &Url, kind: ResourceKind) -> String {
	let path = kind.path();
	let Some(rest) = path.strip_prefix(':') else {
		return endpoint_url(base, path);
	};
	let (port, path) = match rest.split_once('/') {
		Some((port, tail)) => (port, format!("/{tail}")),
		None => (rest, String::new()),
	};
	let mut url = base.clone();
	let _ = url.set_scheme("http");

	if let Ok(port) = port.parse() {
		let _ = url.set_port(Some(port));
	}

	url.set_path(&path);

	url.to_string()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn network(name: &str, project: &str) -> NamedObject {
		NamedObject { name: name.into(), project_id: Some(project.into()) }
	}

	#[test]
	fn network_filter_keeps_owned_objects_in_order() {
		let objects =
			vec![network("net-a", "a"), network("net-b", "b"), network("net-a2", "a")];
		let names = filter_names(ResourceKind::Network, objects, Some("a"));

		assert_eq!(names, vec!["net-a".to_owned(), "net-a2".to_owned()]);
	}

	#[test]
	fn network_filter_passes_through_without_project() {
		let objects = vec![network("net-a", "a"), network("net-b", "b")];
		let names = filter_names(ResourceKind::Network, objects, None);

		assert_eq!(names, vec!["net-a".to_owned(), "net-b".to_owned()]);
	}

	#[test]
	fn non_network_kinds_ignore_the_filter() {
		let objects = vec![NamedObject { name: "m1.small".into(), project_id: None }];
		let names = filter_names(ResourceKind::Flavor, objects, Some("a"));

		assert_eq!(names, vec!["m1.small".to_owned()]);
	}

	#[test]
	fn listing_url_expands_port_qualified_paths() {
		let base = Url::parse("https://cloud.example.com").expect("Base URL should parse.");

		assert_eq!(
			listing_url(&base, ResourceKind::Network),
			"http://cloud.example.com:9696/v2.0/networks",
		);
		assert_eq!(
			listing_url(&base, ResourceKind::Flavor),
			"https://cloud.example.com/compute/v2/flavors",
		);
	}
}
