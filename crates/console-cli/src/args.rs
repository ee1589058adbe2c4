// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "console", version, about = "Consul namespace console")]
pub struct Args {
	/// Config file (defaults to /etc/console/console.toml)
	#[arg(long, env = "CONSOLE_CONFIG")]
	pub config: Option<PathBuf>,

	/// Datacenter (overrides consul.datacenter)
	#[arg(long)]
	pub dc: Option<String>,

	/// Namespace route segment, sigil included, e.g. ~default
	#[arg(long)]
	pub nspace: Option<String>,

	/// Emit logs as JSON
	#[arg(long)]
	pub json_logs: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Namespace management
	#[command(subcommand)]
	Nspace(NspaceCommand),
}

#[derive(Debug, Subcommand)]
pub enum NspaceCommand {
	/// List namespaces
	List {
		/// Filter passed through to the list view
		#[arg(long)]
		filter: Option<String>,
	},
	/// Show one namespace
	Show { name: String },
	/// Create a namespace, or print a blank one when no name is given
	New {
		name: Option<String>,
		#[arg(long, default_value = "")]
		description: String,
	},
	/// Delete a namespace
	Delete { name: String },
}
