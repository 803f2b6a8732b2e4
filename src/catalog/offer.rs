//! Offer identifiers and the descriptor types handed to the host framework.

// self
use crate::{_prelude::*, catalog::tables::ServiceKind, error::IdentifierError};

const OFFER_PREFIX: &str = "openstack-";
const OFFER_SUFFIX: &str = "-project-apb";

/// Identifier encoding one (service kind, project) offer.
///
/// Wire format: `openstack-<service>-<project>-project-apb`. Parsing anchors on the fixed prefix,
/// the fixed suffix, and the hyphen-free service label, so project names containing `-` round-trip
/// without ambiguity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OfferId {
	/// Service kind the offer provisions.
	pub service: ServiceKind,
	/// Project the offer is scoped to.
	pub project: String,
}
impl OfferId {
	/// Creates an identifier for one (service kind, project) pair.
	pub fn new(service: ServiceKind, project: impl Into<String>) -> Self {
		Self { service, project: project.into() }
	}

	/// Fully qualified offer name, the identifier with underscores normalized to hyphens.
	pub fn fq_name(&self) -> String {
		self.to_string().replace('_', "-")
	}
}
impl Display for OfferId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{OFFER_PREFIX}{}-{}{OFFER_SUFFIX}", self.service, self.project)
	}
}
impl FromStr for OfferId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let malformed = || IdentifierError::Malformed { id: s.to_owned() };
		let inner = s
			.strip_prefix(OFFER_PREFIX)
			.and_then(|rest| rest.strip_suffix(OFFER_SUFFIX))
			.ok_or_else(malformed)?;
		let (label, project) = inner.split_once('-').ok_or_else(malformed)?;

		if project.is_empty() {
			return Err(malformed());
		}

		let service = ServiceKind::from_label(label).ok_or_else(|| {
			IdentifierError::UnknownService { id: s.to_owned(), service: label.to_owned() }
		})?;

		Ok(Self { service, project: project.to_owned() })
	}
}

/// One parameter row in a provisioning plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
	/// Machine name of the parameter.
	pub name: String,
	/// Title shown by the catalog UI.
	pub title: String,
	/// Value type, `enum` for discovered choices and `string` for fixed fields.
	#[serde(rename = "type")]
	pub value_type: String,
	/// Whether operators may change the value after provisioning.
	pub updatable: bool,
	/// Whether the parameter must be supplied.
	pub required: bool,
	/// Discovered choices for enum parameters; empty when discovery degraded.
	#[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<String>,
	/// Preselected value, the first discovered choice when any exist.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	/// Display hint; `password` masks the input.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub display_type: String,
	/// Grouping hint for the catalog UI.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub display_group: String,
}

/// Single provisioning plan carried by every offer descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionPlan {
	/// Plan name, always `default`.
	pub name: String,
	/// Human-readable description.
	pub description: String,
	/// Ordered parameter schema: one enum parameter per resource kind followed by the fixed
	/// authentication parameters.
	pub parameters: Vec<ParameterDescriptor>,
}

/// A fully assembled provisioning offer; ownership transfers to the host framework on return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDescriptor {
	/// Fully qualified offer name.
	pub fq_name: String,
	/// Offer version.
	pub version: String,
	/// Bundle runtime version understood by the runner.
	pub runtime: u32,
	/// Runner image executing the provision.
	pub image: String,
	/// Human-readable description.
	pub description: String,
	/// Display name surfaced by the catalog UI.
	pub display_name: String,
	/// Provider attribution surfaced by the catalog UI.
	pub provider_display_name: String,
	/// Whether provisioned instances may be bound to.
	pub bindable: bool,
	/// Asynchronous provisioning policy advertised to the host.
	#[serde(rename = "async")]
	pub async_policy: String,
	/// Provisioning plans; exactly one `default` plan.
	pub plans: Vec<ProvisionPlan>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn offer_id_round_trips() {
		let id = OfferId::new(ServiceKind::Vm, "dev");

		assert_eq!(id.to_string(), "openstack-vm-dev-project-apb");

		let parsed: OfferId = "openstack-vm-dev-project-apb"
			.parse()
			.expect("Well-formed identifier should parse.");

		assert_eq!(parsed, id);
	}

	#[test]
	fn offer_id_round_trips_hyphenated_projects() {
		let id = OfferId::new(ServiceKind::Vm, "beta-prod-eu");
		let parsed: OfferId =
			id.to_string().parse().expect("Hyphenated project should round-trip.");

		assert_eq!(parsed.project, "beta-prod-eu");
		assert_eq!(parsed, id);
	}

	#[test]
	fn offer_id_rejects_missing_framing() {
		for id in ["bogus", "openstack-vm-dev", "vm-dev-project-apb", "openstack--project-apb"] {
			assert!(matches!(
				id.parse::<OfferId>(),
				Err(IdentifierError::Malformed { .. }),
			));
		}
	}

	#[test]
	fn offer_id_rejects_unknown_service() {
		let err = "openstack-baremetal-dev-project-apb"
			.parse::<OfferId>()
			.expect_err("Unknown service kind should fail.");

		assert!(matches!(err, IdentifierError::UnknownService { service, .. } if service == "baremetal"));
	}

	#[test]
	fn fq_name_normalizes_underscores() {
		let id = OfferId::new(ServiceKind::Vm, "team_a");

		assert_eq!(id.fq_name(), "openstack-vm-team-a-project-apb");
	}
}
