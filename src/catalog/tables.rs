//! Immutable service and parameter tables driving descriptor assembly.

// self
use crate::{_prelude::*, resource::ResourceKind};

/// Provisionable service kinds this catalog understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
	/// Virtual machine provisioned through a Heat template.
	Vm,
}
impl ServiceKind {
	/// Every service kind the catalog offers, in enumeration order.
	pub const ALL: &'static [Self] = &[Self::Vm];

	/// Returns the stable label used inside offer identifiers.
	///
	/// Labels never contain `-`; offer-identifier parsing relies on that.
	pub const fn as_str(self) -> &'static str {
		match self {
			ServiceKind::Vm => "vm",
		}
	}

	/// Resolves a label back to a service kind.
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"vm" => Some(Self::Vm),
			_ => None,
		}
	}
}
impl Display for ServiceKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One row of the parameter table: the resource kind feeding a parameter and its required flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRow {
	/// Resource kind whose discovered names become the enumeration choices.
	pub kind: ResourceKind,
	/// Required flag as transported by operator configuration.
	pub required: String,
}
impl ParameterRow {
	fn new(kind: ResourceKind, required: &str) -> Self {
		Self { kind, required: required.to_owned() }
	}

	/// Lenient boolean parse of the required flag; anything unparseable means optional.
	pub fn is_required(&self) -> bool {
		self.required.parse().unwrap_or(false)
	}
}

/// Immutable mapping from service kinds to their ordered parameter rows.
///
/// Constructed once at startup and passed by reference into the catalog builder. Deserializable
/// so operator configuration can override the built-in table without touching code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterTable(BTreeMap<ServiceKind, Vec<ParameterRow>>);
impl ParameterTable {
	/// Rows configured for `service`, empty when the service carries no parameters.
	pub fn rows(&self, service: ServiceKind) -> &[ParameterRow] {
		self.0.get(&service).map(Vec::as_slice).unwrap_or_default()
	}
}
impl Default for ParameterTable {
	fn default() -> Self {
		Self(BTreeMap::from([(
			ServiceKind::Vm,
			vec![
				ParameterRow::new(ResourceKind::Flavor, "true"),
				ParameterRow::new(ResourceKind::Keypair, "false"),
				ParameterRow::new(ResourceKind::Image, "true"),
				ParameterRow::new(ResourceKind::Network, "true"),
				ParameterRow::new(ResourceKind::SecurityGroup, "false"),
			],
		)]))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_table_orders_vm_parameters() {
		let table = ParameterTable::default();
		let kinds: Vec<_> = table.rows(ServiceKind::Vm).iter().map(|row| row.kind).collect();

		assert_eq!(
			kinds,
			vec![
				ResourceKind::Flavor,
				ResourceKind::Keypair,
				ResourceKind::Image,
				ResourceKind::Network,
				ResourceKind::SecurityGroup,
			],
		);
	}

	#[test]
	fn required_flags_parse_leniently() {
		assert!(ParameterRow::new(ResourceKind::Flavor, "true").is_required());
		assert!(!ParameterRow::new(ResourceKind::Keypair, "false").is_required());
		assert!(!ParameterRow::new(ResourceKind::Network, "not-a-bool").is_required());
		assert!(!ParameterRow::new(ResourceKind::Network, "").is_required());
	}

	#[test]
	fn table_round_trips_through_serde() {
		let table = ParameterTable::default();
		let json = serde_json::to_string(&table).expect("Parameter table should serialize.");
		let parsed: ParameterTable =
			serde_json::from_str(&json).expect("Parameter table should deserialize.");

		assert_eq!(parsed, table);
	}
}
