// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `console`: namespace routes driven from the command line.

mod args;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console_common_config::{load_config, load_config_with_file, ConsoleConfig};
use console_consul_client::ConsulClient;
use console_nspace_route::RouteParents;
use tracing::debug;

use crate::args::{Args, Command};
use crate::commands::Console;

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();
	match run(args).await {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
	let config = match &args.config {
		Some(path) => load_config_with_file(path),
		None => load_config(),
	}
	.context("failed to load configuration")?;
	logging::init(&config.logging, args.json_logs)?;

	if !config.nspaces.enabled {
		anyhow::bail!("namespaces are disabled for this console");
	}

	let parents = route_parents(&args, &config)?;
	debug!(dc = %parents.dc, nspace = %parents.nspace, "resolved route parents");

	let client = ConsulClient::from_config(&config.consul)?;
	let console = Console::new(client);
	match args.command {
		Command::Nspace(command) => console.run(command, &parents).await,
	}
}

/// Parent route identifiers, defaulting to the configured datacenter and the
/// `default` namespace.
fn route_parents(args: &Args, config: &ConsoleConfig) -> anyhow::Result<RouteParents> {
	let dc = args
		.dc
		.clone()
		.unwrap_or_else(|| config.consul.datacenter.clone());
	let segment = args
		.nspace
		.clone()
		.unwrap_or_else(|| format!("{}default", config.nspaces.sigil));
	Ok(RouteParents::from_route(&dc, &segment)?)
}
