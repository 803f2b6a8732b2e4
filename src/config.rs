//! Registry credentials owned by the adapter for its lifetime.

// self
use crate::_prelude::*;

/// Immutable configuration describing one OpenStack control plane.
///
/// Hydrated by the host framework's configuration loader; the discovery pipeline only ever reads
/// it. One [`Credentials`] value corresponds to one registry entry, and concurrent discovery
/// passes for different values are independent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Base URL of the control plane.
	pub url: Url,
	/// Identity user name.
	pub user: String,
	/// Identity password.
	pub pass: String,
	/// Fixed project to act within; set, it bypasses project discovery entirely.
	#[serde(default)]
	pub org: Option<String>,
	/// Runner image reference stamped onto every offer descriptor.
	pub runner: String,
	/// Accept invalid TLS certificates when talking to the control plane.
	///
	/// The deployments this adapter targets commonly run self-signed endpoints, but the bypass
	/// stays opt-in.
	#[serde(default)]
	pub danger_accept_invalid_certs: bool,
}
impl Credentials {
	/// Fixed project configured for this registry, treating an empty string as unset.
	pub fn fixed_org(&self) -> Option<&str> {
		self.org.as_deref().filter(|org| !org.is_empty())
	}

	/// Display name for the registry, the endpoint host (with port) or the path for host-less
	/// URLs.
	pub fn registry_name(&self) -> String {
		match self.url.host_str() {
			Some(host) => match self.url.port() {
				Some(port) => format!("{host}:{port}"),
				None => host.to_owned(),
			},
			None => self.url.path().to_owned(),
		}
	}
}
