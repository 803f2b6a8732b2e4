// self
use crate::obs::{DiscoveryOutcome, DiscoveryStage};

/// Records a discovery outcome via the global metrics recorder (when enabled).
pub fn record_discovery_outcome(stage: DiscoveryStage, outcome: DiscoveryOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"openstack_catalog_discovery_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}
