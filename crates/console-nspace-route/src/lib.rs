// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route models for the namespace management pages.
//!
//! Every namespace route follows the same flow:
//!
//! ```text
//! RouteParents ─→ PermissionGate::authorize ─→ is_authorized
//!                                                 │
//!                 ┌───────────────────────────────┴──────────────┐
//!                 ▼ allowed                                      ▼ denied
//!       FetchStrategy (create / by slug / all)        AuthorizationFailure
//!                 │                                              │
//!                 ▼                                              ▼
//!      RouteOutcome::Authorized(CompositeModel)     RouteOutcome::Denied
//!                 │
//!                 ▼
//!        RouteController::set_properties
//! ```
//!
//! Collaborators are injected: a [`PermissionGate`], a [`NspaceRepository`]
//! and, for the form actions, a [`NspaceWriter`].

mod actions;
mod binding;
mod collaborators;
mod compose;
mod routes;
mod transition;

#[cfg(test)]
mod testing;

pub use actions::{ActionKind, ActionOutcome, Feedback, FeedbackKind, NspaceActions, Redirect};
pub use binding::{bind, ModelController, RouteController};
pub use collaborators::{NspaceRepository, NspaceWriter, PermissionGate};
pub use compose::{FetchStrategy, ModelComposer, RouteParents};
pub use routes::{EditParams, EditRoute, IndexQuery, IndexRoute, QueryParam};
pub use transition::Transition;

pub use console_nspace_core::{
	AuthorizationFailure, CompositeModel, ModelResource, RouteOutcome, ServiceError, ServiceResult,
};
