//! Resource kinds, their fixed endpoints, and per-kind envelope decoding.
//!
//! Every control-plane listing collapses to a flat list of [`NamedObject`]s, but the envelopes
//! differ per kind: most services wrap a flat array under a plural key, while the keypair service
//! wraps each element once more in a single-key object. The decode dispatch below owns those
//! shapes so the lister never needs to.

// self
use crate::{_prelude::*, error::RegistryError};

/// One category of listable infrastructure object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	/// Compute flavors.
	Flavor,
	/// Bootable images.
	Image,
	/// SSH keypairs.
	Keypair,
	/// Tenant networks served by the networking service.
	Network,
	/// Security groups.
	SecurityGroup,
	/// Identity projects, the tenant boundary itself.
	Project,
}
impl ResourceKind {
	/// Endpoint path appended to the control-plane base URL.
	///
	/// A leading `:` denotes a port-qualified path on the same host; the networking service
	/// listens on its own port.
	pub const fn path(self) -> &'static str {
		match self {
			Self::Flavor => "/compute/v2/flavors",
			Self::Image => "/compute/v2/images",
			Self::Keypair => "/compute/v2/os-keypairs",
			Self::Network => ":9696/v2.0/networks",
			Self::SecurityGroup => "/compute/v2/os-security-groups",
			Self::Project => "/identity/v3/auth/projects",
		}
	}

	/// Plural key the control plane wraps listings in.
	pub const fn envelope_key(self) -> &'static str {
		match self {
			Self::Flavor => "flavors",
			Self::Image => "images",
			Self::Keypair => "keypairs",
			Self::Network => "networks",
			Self::SecurityGroup => "security_groups",
			Self::Project => "projects",
		}
	}

	/// Human-readable label used for parameter titles.
	pub const fn label(self) -> &'static str {
		match self {
			Self::Flavor => "Flavor",
			Self::Image => "Image",
			Self::Keypair => "Key",
			Self::Network => "Network",
			Self::SecurityGroup => "Security Group",
			Self::Project => "Project",
		}
	}

	/// Machine name used for parameter descriptors, the lowercased label with underscores.
	pub fn parameter_name(self) -> String {
		self.label().to_lowercase().replace(' ', "_")
	}

	/// Decodes a listing response body into named objects.
	///
	/// A missing or empty plural key decodes to an empty list; only a body that fails to parse as
	/// the expected envelope is an error.
	pub fn decode(self, body: &[u8]) -> Result<Vec<NamedObject>, RegistryError> {
		match self {
			Self::Keypair => Ok(decode_envelope::<KeypairWrapper>(self, body)?
				.into_iter()
				.map(|wrapper| wrapper.keypair)
				.collect()),
			_ => decode_envelope::<NamedObject>(self, body),
		}
	}
}
impl Display for ResourceKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.envelope_key())
	}
}

/// Normalized shape every discovered resource collapses to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedObject {
	/// Resource display name.
	#[serde(default)]
	pub name: String,
	/// Owning project; only the networking service populates this in the target environment.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KeypairWrapper {
	keypair: NamedObject,
}

fn decode_envelope<T>(kind: ResourceKind, body: &[u8]) -> Result<Vec<T>, RegistryError>
where
	T: serde::de::DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);
	let mut envelope: BTreeMap<String, serde_json::Value> =
		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| RegistryError::EnvelopeParse { source })?;
	let Some(entries) = envelope.remove(kind.envelope_key()) else {
		return Ok(Vec::new());
	};

	serde_path_to_error::deserialize(entries)
		.map_err(|source| RegistryError::EnvelopeParse { source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn flat_envelope_decodes_names_in_order() {
		let body = br#"{"flavors":[{"name":"m1.small"},{"name":"m1.large"}]}"#;
		let objects =
			ResourceKind::Flavor.decode(body).expect("Flavor envelope should decode.");

		assert_eq!(
			objects,
			vec![
				NamedObject { name: "m1.small".into(), project_id: None },
				NamedObject { name: "m1.large".into(), project_id: None },
			],
		);
	}

	#[test]
	fn keypair_envelope_unwraps_inner_objects() {
		let body = br#"{"keypairs":[{"keypair":{"name":"k1"}}]}"#;
		let objects =
			ResourceKind::Keypair.decode(body).expect("Keypair envelope should decode.");

		assert_eq!(objects, vec![NamedObject { name: "k1".into(), project_id: None }]);
	}

	#[test]
	fn network_envelope_keeps_owner_project() {
		let body = br#"{"networks":[{"name":"net-a","project_id":"a"}]}"#;
		let objects =
			ResourceKind::Network.decode(body).expect("Network envelope should decode.");

		assert_eq!(objects[0].project_id.as_deref(), Some("a"));
	}

	#[test]
	fn missing_plural_key_decodes_to_empty() {
		let objects = ResourceKind::Image
			.decode(br#"{"unrelated":[]}"#)
			.expect("Missing plural key should decode to an empty list.");

		assert!(objects.is_empty());
	}

	#[test]
	fn nameless_objects_default_to_empty_names() {
		let objects = ResourceKind::Flavor
			.decode(br#"{"flavors":[{"id":"42"}]}"#)
			.expect("Nameless objects should still decode.");

		assert_eq!(objects, vec![NamedObject::default()]);
	}

	#[test]
	fn malformed_body_is_an_envelope_error() {
		let err = ResourceKind::Flavor
			.decode(b"not json")
			.expect_err("Malformed body should fail to decode.");

		assert!(matches!(err, RegistryError::EnvelopeParse { .. }));
	}
}
