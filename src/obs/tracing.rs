// self
use crate::{
	_prelude::*,
	error::{AuthError, RegistryError},
	obs::DiscoveryStage,
	resource::ResourceKind,
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedDiscovery<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedDiscovery<F> = F;

/// A span builder used by discovery stages.
#[derive(Clone, Debug)]
pub struct DiscoverySpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl DiscoverySpan {
	/// Creates a new span tagged with the provided stage + call site.
	pub fn new(stage: DiscoveryStage, site: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("openstack_catalog.discovery", stage = stage.as_str(), site);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, site);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedDiscovery<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Warns that project enumeration failed and the catalog degrades to zero offers.
pub fn warn_enumeration_failed(err: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(error = %err, "Project enumeration failed; returning an empty catalog.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}

/// Warns that a scoped token request failed and descriptor building proceeds without a token.
pub fn warn_scoped_auth_failed(project: &str, err: &AuthError) {
	#[cfg(feature = "tracing")]
	tracing::warn!(project, error = %err, "Could not get a scoped token; proceeding unauthenticated.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (project, err);
	}
}

/// Warns that one resource-kind listing failed and contributes an empty enumeration.
pub fn warn_listing_failed(kind: ResourceKind, err: &RegistryError) {
	#[cfg(feature = "tracing")]
	tracing::warn!(kind = %kind, error = %err, "Could not retrieve listing; contributing empty choices.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, err);
	}
}

/// Warns that a listing decoded successfully but contained no objects.
pub fn warn_empty_listing(kind: ResourceKind) {
	#[cfg(feature = "tracing")]
	tracing::warn!(kind = %kind, "Did not find any objects when decoding the listing response.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = kind;
	}
}

/// Warns that one offer identifier failed descriptor building and is omitted from the batch.
pub fn warn_descriptor_failed(id: &str, err: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(id, error = %err, "Failed to build descriptor; omitting the offer.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (id, err);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn discovery_span_noop_without_tracing() {
		let span = DiscoverySpan::new(DiscoveryStage::OfferIds, "test");
		let _ = span.clone();
	}
}
