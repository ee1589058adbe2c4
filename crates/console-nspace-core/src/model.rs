// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route models handed to the presentation layer.
//!
//! A namespace route resolves to a [`RouteOutcome`]: either an
//! [`Authorized`](RouteOutcome::Authorized) [`CompositeModel`] or a
//! [`Denied`](RouteOutcome::Denied) [`AuthorizationFailure`]. A composite
//! model only exists after the access decision allowed the navigation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grant::GrantSet;
use crate::nspace::Nspace;
use crate::selector::Datacenter;

/// Detail text of the synthesized authorization failure.
pub const UNAUTHORIZED_DETAIL: &str = "Unauthorized";

/// Status code of the synthesized authorization failure.
pub const UNAUTHORIZED_STATUS: &str = "401";

/// The resource half of a composite model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelResource {
	/// A single namespace (edit and create routes).
	Item(Nspace),
	/// Every namespace (index route).
	Items(Vec<Nspace>),
}

/// Permissions and resource data merged for one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeModel {
	pub permissions: GrantSet,
	pub is_loading: bool,
	pub dc: Datacenter,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub create: Option<bool>,
	#[serde(flatten)]
	pub resource: ModelResource,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filter: Option<String>,
}

impl CompositeModel {
	pub fn item(&self) -> Option<&Nspace> {
		match &self.resource {
			ModelResource::Item(item) => Some(item),
			ModelResource::Items(_) => None,
		}
	}

	pub fn items(&self) -> Option<&[Nspace]> {
		match &self.resource {
			ModelResource::Item(_) => None,
			ModelResource::Items(items) => Some(items),
		}
	}
}

/// One record of an authorization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
	pub detail: String,
	pub status: String,
}

/// The deny outcome of a namespace route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("namespace access denied ({} error record(s))", .errors.len())]
pub struct AuthorizationFailure {
	pub errors: Vec<ErrorDetail>,
}

impl AuthorizationFailure {
	/// The single `Unauthorized` / `401` record failure.
	pub fn unauthorized() -> Self {
		Self {
			errors: vec![ErrorDetail {
				detail: UNAUTHORIZED_DETAIL.to_string(),
				status: UNAUTHORIZED_STATUS.to_string(),
			}],
		}
	}
}

/// Result of resolving a namespace route model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
	Authorized(CompositeModel),
	Denied(AuthorizationFailure),
}

impl RouteOutcome {
	pub fn is_authorized(&self) -> bool {
		matches!(self, RouteOutcome::Authorized(_))
	}

	pub fn model(&self) -> Option<&CompositeModel> {
		match self {
			RouteOutcome::Authorized(model) => Some(model),
			RouteOutcome::Denied(_) => None,
		}
	}

	/// Converts into a `Result`, with the failure as the error value.
	pub fn into_result(self) -> std::result::Result<CompositeModel, AuthorizationFailure> {
		match self {
			RouteOutcome::Authorized(model) => Ok(model),
			RouteOutcome::Denied(failure) => Err(failure),
		}
	}
}
