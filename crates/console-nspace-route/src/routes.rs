// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The namespace edit/create and index routes.
//!
//! Users can see namespaces without operator write access, but the
//! management pages are only reachable with it, including by typing the URL
//! directly.

use std::sync::Arc;

use console_nspace_core::{CompositeModel, RouteOutcome, ServiceResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::NspaceActions;
use crate::binding::{bind, RouteController};
use crate::collaborators::{NspaceRepository, PermissionGate};
use crate::compose::{FetchStrategy, ModelComposer, RouteParents};
use crate::transition::Transition;

/// Declares a query parameter a route reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
	/// Name the route sees.
	pub key: &'static str,
	/// Name used in the URL.
	pub alias: &'static str,
	/// Update the current history entry instead of pushing a new one.
	pub replace: bool,
}

const INDEX_QUERY_PARAMS: &[QueryParam] = &[QueryParam {
	key: "s",
	alias: "filter",
	replace: true,
}];

/// Dynamic segments of the edit route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditParams {
	/// Absent on the create route.
	pub name: Option<String>,
}

impl EditParams {
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
		}
	}
}

/// Query values of the index route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexQuery {
	#[serde(default, rename = "filter", skip_serializing_if = "Option::is_none")]
	pub s: Option<String>,
}

/// Single-namespace route, serving both `create` and `edit`.
#[derive(Clone)]
pub struct EditRoute {
	composer: ModelComposer,
	actions: NspaceActions,
}

impl EditRoute {
	pub fn new(
		gate: Arc<dyn PermissionGate>,
		repository: Arc<dyn NspaceRepository>,
		actions: NspaceActions,
	) -> Self {
		Self {
			composer: ModelComposer::new(gate, repository),
			actions,
		}
	}

	pub fn is_create(&self, transition: &Transition) -> bool {
		transition.is_create()
	}

	/// Resolves the model for entering this route.
	///
	/// On the edit route a missing `name` is looked up as the empty name and
	/// whatever the repository answers is returned.
	pub async fn model(
		&self,
		params: &EditParams,
		transition: &Transition,
		parents: &RouteParents,
	) -> ServiceResult<RouteOutcome> {
		let strategy = if self.is_create(transition) {
			FetchStrategy::CreateDefault
		} else {
			FetchStrategy::BySlug(params.name.clone().unwrap_or_default())
		};
		debug!(target_name = %transition.target_name, "resolving namespace model");
		self.composer.compose(parents, strategy).await
	}

	pub fn setup_controller<C: RouteController + ?Sized>(
		&self,
		controller: &mut C,
		model: CompositeModel,
	) {
		bind(controller, model);
	}

	pub fn actions(&self) -> &NspaceActions {
		&self.actions
	}
}

/// Namespace list route.
#[derive(Clone)]
pub struct IndexRoute {
	composer: ModelComposer,
	actions: NspaceActions,
}

impl IndexRoute {
	pub fn new(
		gate: Arc<dyn PermissionGate>,
		repository: Arc<dyn NspaceRepository>,
		actions: NspaceActions,
	) -> Self {
		Self {
			composer: ModelComposer::new(gate, repository),
			actions,
		}
	}

	pub fn query_params(&self) -> &'static [QueryParam] {
		INDEX_QUERY_PARAMS
	}

	/// Resolves the model for entering this route.
	pub async fn model(
		&self,
		query: &IndexQuery,
		parents: &RouteParents,
	) -> ServiceResult<RouteOutcome> {
		let strategy = FetchStrategy::All {
			filter: query.s.clone(),
		};
		self.composer.compose(parents, strategy).await
	}

	pub fn setup_controller<C: RouteController + ?Sized>(
		&self,
		controller: &mut C,
		model: CompositeModel,
	) {
		bind(controller, model);
	}

	pub fn actions(&self) -> &NspaceActions {
		&self.actions
	}
}
