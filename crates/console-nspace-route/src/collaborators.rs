// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Services the namespace routes depend on.

use async_trait::async_trait;
use console_nspace_core::{Datacenter, GrantSet, Nspace, NspaceDefaults, NspaceSelector, ServiceResult};

/// Resolves the grants the current actor holds in a namespace.
#[async_trait]
pub trait PermissionGate: Send + Sync {
	/// Fetches the grant set for `nspace` in `dc`.
	///
	/// Errors are returned to the route caller untouched.
	async fn authorize(&self, dc: &Datacenter, nspace: &NspaceSelector) -> ServiceResult<GrantSet>;
}

/// Read access to namespaces.
#[async_trait]
pub trait NspaceRepository: Send + Sync {
	/// Fetches one namespace by name.
	async fn find_by_slug(&self, dc: &Datacenter, name: &str) -> ServiceResult<Nspace>;

	/// Fetches every namespace visible in `dc`.
	async fn find_all(&self, dc: &Datacenter) -> ServiceResult<Vec<Nspace>>;

	/// Builds a new, unsaved namespace. Never touches the network.
	fn create(&self, defaults: NspaceDefaults) -> Nspace {
		Nspace::blank(defaults)
	}
}

/// Write access to namespaces, used by the form actions.
#[async_trait]
pub trait NspaceWriter: Send + Sync {
	/// Stores `item`, creating it when `create` is set and updating it otherwise.
	async fn persist(&self, dc: &Datacenter, item: &Nspace, create: bool) -> ServiceResult<Nspace>;

	/// Deletes `item`.
	async fn remove(&self, dc: &Datacenter, item: &Nspace) -> ServiceResult<()>;
}
