// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The shared authorize-then-load composition.
//!
//! Authorization is always awaited to completion before the repository is
//! touched, so an actor without access never triggers a namespace fetch.
//! Collaborator errors are returned as-is; denial is a value
//! ([`RouteOutcome::Denied`]), not an error.

use std::sync::Arc;

use console_nspace_core::{
	is_authorized, AuthorizationFailure, CompositeModel, Datacenter, ModelResource,
	NspaceDefaults, NspaceSelector, Result, RouteOutcome, ServiceResult,
};
use tracing::{debug, info, instrument};

use crate::collaborators::{NspaceRepository, PermissionGate};

/// Identifiers read from the ancestor datacenter and namespace routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParents {
	pub dc: Datacenter,
	pub nspace: NspaceSelector,
}

impl RouteParents {
	pub fn new(dc: Datacenter, nspace: NspaceSelector) -> Self {
		Self { dc, nspace }
	}

	/// Builds parents from the datacenter name and the raw, sigil-prefixed
	/// namespace segment.
	pub fn from_route(dc: &str, nspace_segment: &str) -> Result<Self> {
		Ok(Self {
			dc: Datacenter::new(dc)?,
			nspace: NspaceSelector::from_route_segment(nspace_segment)?,
		})
	}
}

/// How the resource half of the model is obtained once access is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStrategy {
	/// Construct a blank namespace locally.
	CreateDefault,
	/// Fetch one existing namespace by name.
	BySlug(String),
	/// Fetch every namespace, carrying the list filter through untouched.
	All { filter: Option<String> },
}

impl FetchStrategy {
	fn name(&self) -> &'static str {
		match self {
			FetchStrategy::CreateDefault => "create",
			FetchStrategy::BySlug(_) => "by_slug",
			FetchStrategy::All { .. } => "all",
		}
	}
}

/// Composes route models from injected collaborators.
#[derive(Clone)]
pub struct ModelComposer {
	gate: Arc<dyn PermissionGate>,
	repository: Arc<dyn NspaceRepository>,
}

impl ModelComposer {
	pub fn new(gate: Arc<dyn PermissionGate>, repository: Arc<dyn NspaceRepository>) -> Self {
		Self { gate, repository }
	}

	/// Authorizes the actor for `parents` and, if allowed, loads the resource
	/// per `strategy`.
	#[instrument(
		skip(self, parents, strategy),
		fields(dc = %parents.dc, nspace = %parents.nspace, strategy = strategy.name())
	)]
	pub async fn compose(
		&self,
		parents: &RouteParents,
		strategy: FetchStrategy,
	) -> ServiceResult<RouteOutcome> {
		let permissions = self.gate.authorize(&parents.dc, &parents.nspace).await?;

		if !is_authorized(&permissions) {
			info!("namespace access denied");
			return Ok(RouteOutcome::Denied(AuthorizationFailure::unauthorized()));
		}

		let (create, resource, filter) = match strategy {
			FetchStrategy::CreateDefault => {
				let item = self.repository.create(NspaceDefaults::empty_acls());
				(Some(true), ModelResource::Item(item), None)
			}
			FetchStrategy::BySlug(name) => {
				let item = self.repository.find_by_slug(&parents.dc, &name).await?;
				(Some(false), ModelResource::Item(item), None)
			}
			FetchStrategy::All { filter } => {
				let items = self.repository.find_all(&parents.dc).await?;
				debug!(count = items.len(), "loaded namespaces");
				(None, ModelResource::Items(items), filter)
			}
		};

		Ok(RouteOutcome::Authorized(CompositeModel {
			permissions,
			is_loading: false,
			dc: parents.dc.clone(),
			create,
			resource,
			filter,
		}))
	}
}
