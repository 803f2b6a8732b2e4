//! Optional observability helpers for the discovery pipeline.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `openstack_catalog.discovery` with the
//!   `stage` (pipeline stage) and `site` (call site) fields, plus warning events for every
//!   degraded path.
//! - Enable `metrics` to increment the `openstack_catalog_discovery_total` counter for every
//!   attempt/success/degraded/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Discovery stages observed by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscoveryStage {
	/// Offer-identifier enumeration across projects.
	OfferIds,
	/// Descriptor assembly for one offer identifier.
	Descriptor,
}
impl DiscoveryStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DiscoveryStage::OfferIds => "offer_ids",
			DiscoveryStage::Descriptor => "descriptor",
		}
	}
}
impl Display for DiscoveryStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscoveryOutcome {
	/// Entry to a pipeline stage.
	Attempt,
	/// Completion with every upstream call succeeding.
	Success,
	/// Completion with at least one upstream call degraded to an empty result.
	Degraded,
	/// Failure propagated back to the caller.
	Failure,
}
impl DiscoveryOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DiscoveryOutcome::Attempt => "attempt",
			DiscoveryOutcome::Success => "success",
			DiscoveryOutcome::Degraded => "degraded",
			DiscoveryOutcome::Failure => "failure",
		}
	}
}
impl Display for DiscoveryOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
