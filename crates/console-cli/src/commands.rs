// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::process::ExitCode;
use std::sync::Arc;

use console_consul_client::ConsulClient;
use console_nspace_core::{AuthorizationFailure, RouteOutcome};
use console_nspace_route::{
	ActionOutcome, EditParams, EditRoute, IndexQuery, IndexRoute, NspaceActions, RouteParents,
	Transition,
};
use tracing::{info, warn};

use crate::args::NspaceCommand;

const CREATE_ROUTE: &str = "dc.nspaces.create";
const EDIT_ROUTE: &str = "dc.nspaces.edit";

/// Exit status when the actor lacks namespace access.
const EXIT_DENIED: u8 = 2;

pub struct Console {
	edit: EditRoute,
	index: IndexRoute,
}

impl Console {
	pub fn new(client: ConsulClient) -> Self {
		let client = Arc::new(client);
		let actions = NspaceActions::new(client.clone());
		Self {
			edit: EditRoute::new(client.clone(), client.clone(), actions.clone()),
			index: IndexRoute::new(client.clone(), client, actions),
		}
	}

	pub async fn run(&self, command: NspaceCommand, parents: &RouteParents) -> anyhow::Result<ExitCode> {
		match command {
			NspaceCommand::List { filter } => {
				let query = IndexQuery { s: filter };
				let outcome = self.index.model(&query, parents).await?;
				emit_model(outcome)
			}
			NspaceCommand::Show { name } => {
				let outcome = self
					.edit
					.model(&EditParams::named(name), &Transition::to(EDIT_ROUTE), parents)
					.await?;
				emit_model(outcome)
			}
			NspaceCommand::New { name, description } => {
				let outcome = self
					.edit
					.model(&EditParams::default(), &Transition::to(CREATE_ROUTE), parents)
					.await?;
				let model = match outcome.into_result() {
					Ok(model) => model,
					Err(failure) => return deny(&failure),
				};
				let Some(name) = name else {
					return emit_model(RouteOutcome::Authorized(model));
				};
				let mut item = model.item().cloned().unwrap_or_default();
				item.name = name;
				item.description = description;
				info!(nspace = %item.name, "creating namespace");
				let outcome = self.edit.actions().save(&model.dc, &item, true).await;
				emit_action(&outcome)
			}
			NspaceCommand::Delete { name } => {
				let outcome = self
					.edit
					.model(&EditParams::named(name), &Transition::to(EDIT_ROUTE), parents)
					.await?;
				let model = match outcome.into_result() {
					Ok(model) => model,
					Err(failure) => return deny(&failure),
				};
				let Some(item) = model.item() else {
					anyhow::bail!("edit route returned no namespace item");
				};
				let outcome = self.edit.actions().delete(&model.dc, item).await;
				emit_action(&outcome)
			}
		}
	}
}

fn emit_model(outcome: RouteOutcome) -> anyhow::Result<ExitCode> {
	match outcome.into_result() {
		Ok(model) => {
			println!("{}", serde_json::to_string_pretty(&model)?);
			Ok(ExitCode::SUCCESS)
		}
		Err(failure) => deny(&failure),
	}
}

fn deny(failure: &AuthorizationFailure) -> anyhow::Result<ExitCode> {
	warn!("{failure}");
	eprintln!("{}", serde_json::to_string_pretty(failure)?);
	Ok(ExitCode::from(EXIT_DENIED))
}

fn emit_action(outcome: &ActionOutcome) -> anyhow::Result<ExitCode> {
	println!("{}", serde_json::to_string_pretty(outcome)?);
	if outcome.is_success() {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}
