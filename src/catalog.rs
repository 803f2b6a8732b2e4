//! Offer assembly: the cross product of service kinds and projects, and descriptor building.
//!
//! The builder is deliberately forgiving. Project enumeration failure empties the catalog instead
//! of erroring so the host keeps serving; scoped-auth and per-kind listing failures degrade one
//! parameter's choices instead of aborting the offer. Only a malformed offer identifier is a true
//! error, and batch building skips those while keeping the rest.

/// Offer identifiers and descriptor types.
pub mod offer;
/// Immutable service and parameter tables.
pub mod tables;

pub use offer::*;
pub use tables::*;

// self
use crate::{
	_prelude::*,
	auth::{Authenticator, Token},
	config::Credentials,
	http::{RegistryHttpClient, base_str},
	lister::ObjectLister,
	obs::{self, DiscoveryOutcome, DiscoverySpan, DiscoveryStage},
	tenant::TenantEnumerator,
};

/// Composes authentication and per-project listing into offer descriptors.
///
/// Stateless aside from the borrowed read-only configuration; every call builds its own token and
/// object lists from scratch, so a builder may be constructed per discovery pass.
#[derive(Clone, Debug)]
pub struct CatalogBuilder<'a> {
	credentials: &'a Credentials,
	http: &'a RegistryHttpClient,
	table: &'a ParameterTable,
}
impl<'a> CatalogBuilder<'a> {
	/// Creates a builder borrowing the adapter's credentials, transport, and parameter table.
	pub fn new(
		credentials: &'a Credentials,
		http: &'a RegistryHttpClient,
		table: &'a ParameterTable,
	) -> Self {
		Self { credentials, http, table }
	}

	/// Enumerates one offer identifier per (service kind, project) pair.
	///
	/// Never fails: project enumeration failure is logged and yields an empty list so the host
	/// framework continues with zero offers rather than crashing.
	pub async fn offer_ids(&self) -> Vec<OfferId> {
		const STAGE: DiscoveryStage = DiscoveryStage::OfferIds;

		let span = DiscoverySpan::new(STAGE, "offer_ids");

		obs::record_discovery_outcome(STAGE, DiscoveryOutcome::Attempt);

		let projects = span
			.instrument(async move {
				match TenantEnumerator::new(self.credentials, self.http).enumerate().await {
					Ok(projects) => Some(projects),
					Err(e) => {
						obs::warn_enumeration_failed(&e);

						None
					},
				}
			})
			.await;

		match projects {
			Some(projects) => {
				obs::record_discovery_outcome(STAGE, DiscoveryOutcome::Success);

				let mut ids = Vec::with_capacity(projects.len() * ServiceKind::ALL.len());

				for project in projects {
					for service in ServiceKind::ALL {
						ids.push(OfferId::new(*service, project.clone()));
					}
				}

				ids
			},
			None => {
				obs::record_discovery_outcome(STAGE, DiscoveryOutcome::Failure);

				Vec::new()
			},
		}
	}

	/// Builds the descriptor for one offer identifier.
	///
	/// Scoped-auth and per-kind listing failures degrade to empty parameter enumerations; the
	/// descriptor is returned regardless, its fixed authentication parameters populated from the
	/// credentials. Only a malformed identifier is an error.
	pub async fn build_descriptor(&self, id: &str) -> Result<OfferDescriptor> {
		const STAGE: DiscoveryStage = DiscoveryStage::Descriptor;

		let span = DiscoverySpan::new(STAGE, "build_descriptor");

		obs::record_discovery_outcome(STAGE, DiscoveryOutcome::Attempt);

		let offer = match id.parse::<OfferId>() {
			Ok(offer) => offer,
			Err(e) => {
				obs::record_discovery_outcome(STAGE, DiscoveryOutcome::Failure);

				return Err(e.into());
			},
		};
		let (descriptor, degraded) = span.instrument(self.assemble(&offer)).await;

		obs::record_discovery_outcome(
			STAGE,
			if degraded { DiscoveryOutcome::Degraded } else { DiscoveryOutcome::Success },
		);

		Ok(descriptor)
	}

	/// Builds descriptors for a batch of identifiers.
	///
	/// A per-identifier failure is logged and that identifier is omitted from the result; the
	/// overall call never fails.
	pub async fn build_descriptors(&self, ids: &[String]) -> Vec<OfferDescriptor> {
		let mut descriptors = Vec::with_capacity(ids.len());

		for id in ids {
			match self.build_descriptor(id).await {
				Ok(descriptor) => descriptors.push(descriptor),
				Err(e) => obs::warn_descriptor_failed(id, &e),
			}
		}

		descriptors
	}

	async fn assemble(&self, offer: &OfferId) -> (OfferDescriptor, bool) {
		let mut degraded = false;
		let token = match Authenticator::new(self.credentials, self.http)
			.scoped_token(&offer.project)
			.await
		{
			Ok(token) => token,
			Err(e) => {
				obs::warn_scoped_auth_failed(&offer.project, &e);

				degraded = true;

				Token::empty()
			},
		};
		let lister = ObjectLister::new(self.credentials, self.http);
		let rows = self.table.rows(offer.service);
		let mut parameters = Vec::with_capacity(rows.len() + AUTH_PARAMETER_COUNT);

		for row in rows {
			let choices =
				match lister.list(&token, row.kind, token.project_id.as_deref()).await {
					Ok(choices) => choices,
					Err(e) => {
						obs::warn_listing_failed(row.kind, &e);

						degraded = true;

						Vec::new()
					},
				};

			parameters.push(ParameterDescriptor {
				name: row.kind.parameter_name(),
				title: row.kind.label().to_owned(),
				value_type: "enum".into(),
				updatable: false,
				required: row.is_required(),
				default: choices.first().cloned(),
				choices,
				display_type: String::new(),
				display_group: String::new(),
			});
		}

		parameters.extend(self.auth_parameters(offer));

		let description = format!(
			"Provisions an Openstack {} instance in the {} Project using a Heat Template",
			offer.service, offer.project,
		);
		let display_name =
			format!("Openstack {} in {} project (APB)", offer.service, offer.project);
		let descriptor = OfferDescriptor {
			fq_name: offer.fq_name(),
			version: "1.0".into(),
			runtime: 2,
			image: self.credentials.runner.clone(),
			description: description.clone(),
			display_name,
			provider_display_name: "OpenStack".into(),
			bindable: false,
			async_policy: "optional".into(),
			plans: vec![ProvisionPlan {
				name: "default".into(),
				description,
				parameters,
			}],
		};

		(descriptor, degraded)
	}

	fn auth_parameters(&self, offer: &OfferId) -> Vec<ParameterDescriptor> {
		let rows: [(&str, &str, String, &str); AUTH_PARAMETER_COUNT] = [
			("url", "URL", format!("{}/identity", base_str(&self.credentials.url)), ""),
			("user", "User", self.credentials.user.clone(), ""),
			("pass", "Password", self.credentials.pass.clone(), "password"),
			("project", "Project", offer.project.clone(), ""),
			("service", "Service", offer.service.to_string(), ""),
		];

		rows.into_iter()
			.map(|(name, title, default, display_type)| ParameterDescriptor {
				name: name.into(),
				title: title.into(),
				value_type: "string".into(),
				updatable: false,
				required: true,
				choices: Vec::new(),
				default: Some(default),
				display_type: display_type.into(),
				display_group: "Openstack Authentication".into(),
			})
			.collect()
	}
}

const AUTH_PARAMETER_COUNT: usize = 5;
