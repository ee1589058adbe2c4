// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::sections::{ConsulConfigLayer, LoggingConfigLayer, NspacesConfigLayer};

/// One partially specified configuration, as produced by a single source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsoleConfigLayer {
	#[serde(default)]
	pub consul: Option<ConsulConfigLayer>,
	#[serde(default)]
	pub nspaces: Option<NspacesConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ConsoleConfigLayer {
	/// Overlays `other` on top of `self`; set fields in `other` win.
	pub fn merge(&mut self, other: Self) {
		if let Some(other_consul) = other.consul {
			self.consul
				.get_or_insert_with(Default::default)
				.merge(other_consul);
		}
		if let Some(other_nspaces) = other.nspaces {
			self.nspaces
				.get_or_insert_with(Default::default)
				.merge(other_nspaces);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_keeps_sections_missing_from_overlay() {
		let mut base = ConsoleConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("warn".to_string()),
				json: None,
			}),
			..Default::default()
		};
		base.merge(ConsoleConfigLayer {
			nspaces: Some(NspacesConfigLayer {
				enabled: Some(false),
				sigil: None,
			}),
			..Default::default()
		});

		assert_eq!(
			base.logging.as_ref().and_then(|l| l.level.as_deref()),
			Some("warn")
		);
		assert_eq!(base.nspaces.as_ref().and_then(|n| n.enabled), Some(false));
		assert!(base.consul.is_none());
	}

	#[test]
	fn parses_partial_toml() {
		let layer: ConsoleConfigLayer = toml::from_str("[nspaces]\nenabled = false\n").unwrap();
		assert_eq!(layer.nspaces.and_then(|n| n.enabled), Some(false));
		assert!(layer.consul.is_none());
	}
}
