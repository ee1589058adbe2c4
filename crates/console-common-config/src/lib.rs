// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for the console.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - [`EnvLookup`]: key/value environment access with a map-backed variant for tests
//! - Consistent environment variable naming (`CONSOLE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use console_common_config::load_config;
//!
//! let config = load_config()?;
//! println!("Consul at {}", config.consul.address);
//! ```

pub mod env;
pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use env::{env_or, EnvLookup, MapEnv, ProcessEnv};
pub use error::ConfigError;
pub use layer::ConsoleConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// Fully resolved console configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleConfig {
	pub consul: ConsulConfig,
	pub nspaces: NspacesConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`CONSOLE_*`)
/// 2. Config file (`/etc/console/console.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ConsoleConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource::process()),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<ConsoleConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::process()),
	];
	load_from_sources(sources)
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ConsoleConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ConsoleConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ConsoleConfigLayer) -> Result<ConsoleConfig, ConfigError> {
	let consul = layer.consul.unwrap_or_default().finalize();
	let nspaces = layer.nspaces.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&consul)?;

	info!(
		address = %consul.address,
		datacenter = %consul.datacenter,
		token_configured = consul.token.is_some(),
		nspaces_enabled = nspaces.enabled,
		"Console configuration loaded"
	);

	Ok(ConsoleConfig {
		consul,
		nspaces,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(consul: &ConsulConfig) -> Result<(), ConfigError> {
	if !(consul.address.starts_with("http://") || consul.address.starts_with("https://")) {
		return Err(ConfigError::Validation(format!(
			"consul address '{}' must start with http:// or https://",
			consul.address
		)));
	}
	if consul.datacenter.is_empty() {
		return Err(ConfigError::Validation(
			"consul datacenter must not be empty".to_string(),
		));
	}
	Ok(())
}
