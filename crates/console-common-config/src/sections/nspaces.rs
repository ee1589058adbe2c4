// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Namespace feature section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NspacesConfigLayer {
	pub enabled: Option<bool>,
	pub sigil: Option<char>,
}

impl NspacesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.sigil.is_some() {
			self.sigil = other.sigil;
		}
	}

	pub fn finalize(self) -> NspacesConfig {
		NspacesConfig {
			enabled: self.enabled.unwrap_or(true),
			sigil: self.sigil.unwrap_or('~'),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NspacesConfig {
	/// Whether the namespace pages are available at all.
	pub enabled: bool,
	/// Prefix marking a route segment as a namespace selector.
	pub sigil: char,
}

impl Default for NspacesConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			sigil: '~',
		}
	}
}
