// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::env::{EnvLookup, ProcessEnv};
use crate::error::ConfigError;
use crate::layer::ConsoleConfigLayer;
use crate::sections::{ConsulConfigLayer, ConsulToken, LoggingConfigLayer, NspacesConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ConsoleConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConsoleConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ConsoleConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/console/console.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ConsoleConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConsoleConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ConsoleConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: CONSOLE_<SECTION>_<FIELD>. Empty values count as unset.
pub struct EnvSource {
	lookup: Box<dyn EnvLookup>,
}

impl EnvSource {
	pub fn new(lookup: impl EnvLookup + 'static) -> Self {
		Self {
			lookup: Box::new(lookup),
		}
	}

	pub fn process() -> Self {
		Self::new(ProcessEnv)
	}

	fn var(&self, name: &str) -> Option<String> {
		self.lookup.var(name).filter(|s| !s.is_empty())
	}

	fn bool(&self, name: &str) -> Option<bool> {
		self.var(name)
			.map(|v| v.eq_ignore_ascii_case("true") || v == "1")
	}

	fn u64(&self, name: &str) -> Result<Option<u64>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid u64 value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn char(&self, name: &str) -> Result<Option<char>, ConfigError> {
		match self.var(name) {
			Some(v) => {
				let mut chars = v.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => Ok(Some(c)),
					_ => Err(ConfigError::InvalidValue {
						key: name.to_string(),
						message: format!("expected a single character, got '{v}'"),
					}),
				}
			}
			None => Ok(None),
		}
	}

	fn load_consul(&self) -> Result<ConsulConfigLayer, ConfigError> {
		Ok(ConsulConfigLayer {
			address: self.var("CONSOLE_CONSUL_ADDRESS"),
			datacenter: self.var("CONSOLE_CONSUL_DATACENTER"),
			token: self.var("CONSOLE_CONSUL_TOKEN").map(ConsulToken::new),
			timeout_secs: self.u64("CONSOLE_CONSUL_TIMEOUT_SECS")?,
		})
	}

	fn load_nspaces(&self) -> Result<NspacesConfigLayer, ConfigError> {
		Ok(NspacesConfigLayer {
			enabled: self.bool("CONSOLE_NSPACES_ENABLED"),
			sigil: self.char("CONSOLE_NSPACES_SIGIL")?,
		})
	}

	fn load_logging(&self) -> LoggingConfigLayer {
		LoggingConfigLayer {
			level: self.var("CONSOLE_LOG_LEVEL"),
			json: self.bool("CONSOLE_LOG_JSON"),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConsoleConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ConsoleConfigLayer {
			consul: Some(self.load_consul()?),
			nspaces: Some(self.load_nspaces()?),
			logging: Some(self.load_logging()),
		})
	}
}
