// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Literal terminal segment of the namespace creation route.
const CREATE_SEGMENT: &str = "create";

/// The navigation in progress, as far as a route model cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
	/// Dotted name of the route being entered, e.g. `dc.nspaces.edit`.
	pub target_name: String,
}

impl Transition {
	pub fn to(target_name: impl Into<String>) -> Self {
		Self {
			target_name: target_name.into(),
		}
	}

	/// Last `.`-separated segment of the target route name.
	pub fn terminal_segment(&self) -> &str {
		self.target_name.rsplit('.').next().unwrap_or("")
	}

	/// True when entering the creation route.
	pub fn is_create(&self) -> bool {
		self.terminal_segment() == CREATE_SEGMENT
	}
}
