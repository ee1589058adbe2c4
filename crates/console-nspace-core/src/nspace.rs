// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The namespace resource as the Consul HTTP API shapes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A policy or role attached to a namespace by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclLink {
	#[serde(rename = "ID", default)]
	pub id: String,
	#[serde(rename = "Name", default)]
	pub name: String,
}

/// ACL defaults applied to tokens in a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NspaceAcls {
	#[serde(default)]
	pub policy_defaults: Vec<AclLink>,
	#[serde(default)]
	pub role_defaults: Vec<AclLink>,
}

/// A namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Nspace {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(rename = "ACLs", default)]
	pub acls: NspaceAcls,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub meta: BTreeMap<String, String>,
	#[serde(default)]
	pub create_index: u64,
	#[serde(default)]
	pub modify_index: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deleted_at: Option<String>,
}

impl Nspace {
	/// Builds an unsaved namespace from the given defaults.
	pub fn blank(defaults: NspaceDefaults) -> Self {
		Self {
			acls: defaults.acls,
			..Default::default()
		}
	}

	/// Returns true once the namespace has been stored.
	pub fn is_persisted(&self) -> bool {
		self.create_index > 0
	}

	/// Returns true if the namespace is marked for deletion.
	pub fn is_deleting(&self) -> bool {
		self.deleted_at.is_some()
	}
}

/// Sub-structures a newly constructed namespace starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NspaceDefaults {
	#[serde(rename = "ACLs")]
	pub acls: NspaceAcls,
}

impl NspaceDefaults {
	/// Empty policy and role defaults.
	pub fn empty_acls() -> Self {
		Self {
			acls: NspaceAcls {
				policy_defaults: Vec::new(),
				role_defaults: Vec::new(),
			},
		}
	}
}
