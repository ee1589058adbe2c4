// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Permission grants and the namespace access decision.
//!
//! A [`GrantSet`] is whatever the ACL authorize endpoint returned for the
//! current token in one datacenter/namespace. The console never builds or
//! edits grants itself; it only asks one question of them via
//! [`is_authorized`].
//!
//! # Decision
//!
//! Access to the namespace management routes requires an exact
//! `operator` / `write` / `allow = true` grant. There is no merging or
//! priority between grants: one exact match allows, anything else denies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Resource tag for operator-level capabilities.
pub const RESOURCE_OPERATOR: &str = "operator";

/// Access tag for write capabilities.
pub const ACCESS_WRITE: &str = "write";

/// A single permission record.
///
/// Fields are optional so that partial records from the service decode
/// cleanly. A field that is missing or of the wrong type decodes as `None`,
/// and such a record never satisfies a check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Grant {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub resource: Option<String>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub access: Option<String>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub allow: Option<bool>,
}

/// Decodes a field, yielding `None` instead of an error when the value has
/// the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;
	Ok(T::deserialize(value).ok())
}

impl Grant {
	/// Creates a fully populated grant.
	pub fn new(resource: impl Into<String>, access: impl Into<String>, allow: bool) -> Self {
		Self {
			resource: Some(resource.into()),
			access: Some(access.into()),
			allow: Some(allow),
		}
	}

	/// Returns true if this grant allows `access` on `resource`.
	pub fn allows(&self, resource: &str, access: &str) -> bool {
		self.resource.as_deref() == Some(resource)
			&& self.access.as_deref() == Some(access)
			&& self.allow == Some(true)
	}
}

/// The grants held by the current actor for one namespace.
///
/// Decoding is tolerant: a `null` list is empty and entries that are not
/// grant records (`null`, strings, numbers) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GrantSet(Vec<Grant>);

impl<'de> Deserialize<'de> for GrantSet {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
		Ok(entries
			.into_iter()
			.filter_map(|entry| Grant::deserialize(entry).ok())
			.collect())
	}
}

impl GrantSet {
	pub fn new(grants: Vec<Grant>) -> Self {
		Self(grants)
	}

	pub fn empty() -> Self {
		Self(Vec::new())
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Grant> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if any grant allows `access` on `resource`.
	pub fn allows(&self, resource: &str, access: &str) -> bool {
		self.0.iter().any(|g| g.allows(resource, access))
	}

	pub fn into_inner(self) -> Vec<Grant> {
		self.0
	}
}

impl From<Vec<Grant>> for GrantSet {
	fn from(grants: Vec<Grant>) -> Self {
		Self(grants)
	}
}

impl FromIterator<Grant> for GrantSet {
	fn from_iter<I: IntoIterator<Item = Grant>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a GrantSet {
	type Item = &'a Grant;
	type IntoIter = std::slice::Iter<'a, Grant>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Decides whether the actor may manage namespaces.
///
/// True if and only if the set contains a grant with resource `operator`,
/// access `write` and `allow = true`.
#[instrument(level = "debug", skip(grants), fields(grants = grants.len()))]
pub fn is_authorized(grants: &GrantSet) -> bool {
	let allowed = grants.allows(RESOURCE_OPERATOR, ACCESS_WRITE);
	tracing::debug!(allowed, "namespace access decision");
	allowed
}
