// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for namespace-scoped access in the console.
//!
//! This crate provides:
//! - [`Grant`] / [`GrantSet`]: permission records returned by the ACL authorize call
//! - [`is_authorized`]: the operator/write access decision
//! - [`Datacenter`] / [`NspaceSelector`]: validated route identifiers
//! - [`Nspace`]: the namespace resource and its default sub-structures
//! - [`CompositeModel`] / [`RouteOutcome`]: what a route hands to its controller
//! - [`gateway`]: display helpers for gateway service kinds

pub mod error;
pub mod gateway;
pub mod grant;
pub mod model;
pub mod nspace;
pub mod selector;

pub use error::{NspaceError, Result, ServiceError, ServiceResult};
pub use gateway::GatewayKind;
pub use grant::{is_authorized, Grant, GrantSet, ACCESS_WRITE, RESOURCE_OPERATOR};
pub use model::{AuthorizationFailure, CompositeModel, ErrorDetail, ModelResource, RouteOutcome};
pub use nspace::{AclLink, Nspace, NspaceAcls, NspaceDefaults};
pub use selector::{Datacenter, NspaceSelector, DEFAULT_SIGIL};
