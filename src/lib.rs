//! Resource-discovery core for an OpenStack service-broker registry adapter—authenticate against
//! the identity service, enumerate projects, discover per-project infrastructure objects, and
//! assemble parameterized catalog offers for the hosting broker framework.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod adapter;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod lister;
pub mod obs;
pub mod resource;
pub mod tenant;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{adapter::OpenstackAdapter, config::Credentials};

	/// Builds credentials pointed at a mock control plane.
	pub fn test_credentials(base: &str) -> Credentials {
		Credentials {
			url: Url::parse(base).expect("Failed to parse mock control-plane URL."),
			user: "admin".into(),
			pass: "hunter2".into(),
			org: None,
			runner: "quay.io/openstack/heat-runner:latest".into(),
			danger_accept_invalid_certs: false,
		}
	}

	/// Constructs an [`OpenstackAdapter`] against a mock control plane.
	pub fn build_test_adapter(base: &str) -> OpenstackAdapter {
		OpenstackAdapter::new(test_credentials(base))
			.expect("Failed to build registry adapter for tests.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
