// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Validated identifiers taken from parent route state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NspaceError, Result};

/// Sigil the console prefixes namespace route segments with.
pub const DEFAULT_SIGIL: char = '~';

/// A non-empty datacenter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datacenter(String);

impl Datacenter {
	pub fn new(name: impl Into<String>) -> Result<Self> {
		let name = name.into();
		if name.is_empty() {
			return Err(NspaceError::EmptyDatacenter);
		}
		Ok(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Datacenter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A namespace identifier with its route sigil removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NspaceSelector(String);

impl NspaceSelector {
	/// Builds a selector from a raw route segment such as `~eng`.
	///
	/// Exactly one leading character is dropped, whatever it is.
	pub fn from_route_segment(raw: &str) -> Result<Self> {
		let mut chars = raw.chars();
		if chars.next().is_none() {
			return Err(NspaceError::InvalidSelector(raw.to_string()));
		}
		let id = chars.as_str();
		if id.is_empty() {
			return Err(NspaceError::InvalidSelector(raw.to_string()));
		}
		Ok(Self(id.to_string()))
	}

	/// Builds a selector from an already-stripped namespace name.
	pub fn from_name(name: impl Into<String>) -> Result<Self> {
		let name = name.into();
		if name.is_empty() {
			return Err(NspaceError::InvalidSelector(name));
		}
		Ok(Self(name))
	}

	/// Rebuilds the route segment for this namespace.
	pub fn to_route_segment(&self, sigil: char) -> String {
		format!("{sigil}{}", self.0)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NspaceSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
