// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consul agent connection section.

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8500";
const DEFAULT_DATACENTER: &str = "dc1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// ACL token sent as `X-Consul-Token`. Never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsulToken(String);

impl ConsulToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for ConsulToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[REDACTED]")
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsulConfigLayer {
	pub address: Option<String>,
	pub datacenter: Option<String>,
	pub token: Option<ConsulToken>,
	pub timeout_secs: Option<u64>,
}

impl ConsulConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.address.is_some() {
			self.address = other.address;
		}
		if other.datacenter.is_some() {
			self.datacenter = other.datacenter;
		}
		if other.token.is_some() {
			self.token = other.token;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> ConsulConfig {
		ConsulConfig {
			address: self
				.address
				.map(|a| a.trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
			datacenter: self
				.datacenter
				.unwrap_or_else(|| DEFAULT_DATACENTER.to_string()),
			token: self.token,
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsulConfig {
	/// Base URL of the Consul HTTP API, without trailing slash.
	pub address: String,
	pub datacenter: String,
	pub token: Option<ConsulToken>,
	pub timeout_secs: u64,
}

impl Default for ConsulConfig {
	fn default() -> Self {
		ConsulConfigLayer::default().finalize()
	}
}
