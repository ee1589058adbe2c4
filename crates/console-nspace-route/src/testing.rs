// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Recording collaborators for route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use console_nspace_core::{
	Datacenter, Grant, GrantSet, Nspace, NspaceDefaults, NspaceSelector, ServiceError, ServiceResult,
};

use crate::collaborators::{NspaceRepository, NspaceWriter, PermissionGate};
use crate::compose::RouteParents;

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Default, Clone)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
	pub fn push(&self, entry: impl Into<String>) {
		self.0.lock().unwrap().push(entry.into());
	}

	pub fn entries(&self) -> Vec<String> {
		self.0.lock().unwrap().clone()
	}

	pub fn count(&self, prefix: &str) -> usize {
		self.entries().iter().filter(|e| e.starts_with(prefix)).count()
	}
}

pub fn allowed() -> GrantSet {
	GrantSet::new(vec![
		Grant::new("operator", "read", true),
		Grant::new("operator", "write", true),
	])
}

pub fn denied() -> GrantSet {
	GrantSet::new(vec![Grant::new("operator", "write", false)])
}

pub fn parents() -> RouteParents {
	RouteParents::from_route("dc1", "~eng").unwrap()
}

pub fn nspace(name: &str) -> Nspace {
	Nspace {
		name: name.to_string(),
		create_index: 10,
		modify_index: 10,
		..Default::default()
	}
}

pub struct FakeGate {
	result: ServiceResult<GrantSet>,
	log: CallLog,
}

impl FakeGate {
	pub fn new(result: ServiceResult<GrantSet>, log: CallLog) -> Self {
		Self { result, log }
	}
}

#[async_trait]
impl PermissionGate for FakeGate {
	async fn authorize(&self, dc: &Datacenter, nspace: &NspaceSelector) -> ServiceResult<GrantSet> {
		self.log.push(format!("authorize:start:{dc}:{nspace}"));
		tokio::task::yield_now().await;
		self.log.push("authorize:resolved");
		self.result.clone()
	}
}

pub struct FakeRepository {
	item: ServiceResult<Nspace>,
	items: ServiceResult<Vec<Nspace>>,
	log: CallLog,
}

impl FakeRepository {
	pub fn new(log: CallLog) -> Self {
		Self {
			item: Ok(nspace("eng")),
			items: Ok(vec![nspace("default"), nspace("eng")]),
			log,
		}
	}

	pub fn with_item(mut self, item: ServiceResult<Nspace>) -> Self {
		self.item = item;
		self
	}

	pub fn with_items(mut self, items: ServiceResult<Vec<Nspace>>) -> Self {
		self.items = items;
		self
	}
}

#[async_trait]
impl NspaceRepository for FakeRepository {
	async fn find_by_slug(&self, _dc: &Datacenter, name: &str) -> ServiceResult<Nspace> {
		self.log.push(format!("find_by_slug:{name}"));
		self.item.clone()
	}

	async fn find_all(&self, _dc: &Datacenter) -> ServiceResult<Vec<Nspace>> {
		self.log.push("find_all");
		self.items.clone()
	}

	fn create(&self, defaults: NspaceDefaults) -> Nspace {
		self.log.push("create");
		Nspace::blank(defaults)
	}
}

pub struct FakeWriter {
	fail_with: Option<ServiceError>,
	log: CallLog,
}

impl FakeWriter {
	pub fn new(log: CallLog) -> Self {
		Self {
			fail_with: None,
			log,
		}
	}

	pub fn failing(error: ServiceError, log: CallLog) -> Self {
		Self {
			fail_with: Some(error),
			log,
		}
	}
}

#[async_trait]
impl NspaceWriter for FakeWriter {
	async fn persist(&self, _dc: &Datacenter, item: &Nspace, create: bool) -> ServiceResult<Nspace> {
		self.log.push(format!("persist:{}:{create}", item.name));
		match &self.fail_with {
			Some(e) => Err(e.clone()),
			None => Ok(Nspace {
				create_index: item.create_index.max(1),
				..item.clone()
			}),
		}
	}

	async fn remove(&self, _dc: &Datacenter, item: &Nspace) -> ServiceResult<()> {
		self.log.push(format!("remove:{}", item.name));
		match &self.fail_with {
			Some(e) => Err(e.clone()),
			None => Ok(()),
		}
	}
}
