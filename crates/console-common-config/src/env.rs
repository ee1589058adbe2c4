// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key/value environment lookup.

use std::collections::BTreeMap;

/// Read access to environment values.
pub trait EnvLookup: Send + Sync {
	/// Returns the value for `key`, or `None` if unset.
	fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
	fn var(&self, key: &str) -> Option<String> {
		std::env::var(key).ok()
	}
}

/// Fixed set of values, for tests and embedded defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv(BTreeMap<String, String>);

impl MapEnv {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self(
			pairs
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}
}

impl EnvLookup for MapEnv {
	fn var(&self, key: &str) -> Option<String> {
		self.0.get(key).cloned()
	}
}

/// Returns the value for `key`, or `default` when it is unset.
///
/// A key set to the empty string is returned as-is.
pub fn env_or(lookup: &dyn EnvLookup, key: &str, default: &str) -> String {
	lookup.var(key).unwrap_or_else(|| default.to_string())
}
