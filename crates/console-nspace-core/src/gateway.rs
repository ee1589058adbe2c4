// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display helpers for gateway service kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The gateway kinds a service can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GatewayKind {
	MeshGateway,
	TerminatingGateway,
	IngressGateway,
}

impl GatewayKind {
	pub fn all() -> &'static [GatewayKind] {
		&[
			GatewayKind::MeshGateway,
			GatewayKind::TerminatingGateway,
			GatewayKind::IngressGateway,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			GatewayKind::MeshGateway => "mesh-gateway",
			GatewayKind::TerminatingGateway => "terminating-gateway",
			GatewayKind::IngressGateway => "ingress-gateway",
		}
	}

	/// Short capitalized label, e.g. `Mesh`.
	pub fn label(&self) -> &'static str {
		match self {
			GatewayKind::MeshGateway => "Mesh",
			GatewayKind::TerminatingGateway => "Terminating",
			GatewayKind::IngressGateway => "Ingress",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			GatewayKind::MeshGateway => {
				"Mesh gateways enable routing of Connect traffic between different Consul datacenters."
			}
			GatewayKind::TerminatingGateway => {
				"Terminating gateways enable connections from services in the Consul service mesh to services outside the mesh."
			}
			GatewayKind::IngressGateway => {
				"Ingress gateways enable ingress traffic from services outside the Consul service mesh to services inside the Consul service mesh."
			}
		}
	}

	/// Labels of the two other gateway kinds, in display order.
	pub fn others(&self) -> [&'static str; 2] {
		match self {
			GatewayKind::MeshGateway => ["Terminating", "Ingress"],
			GatewayKind::TerminatingGateway => ["Mesh", "Ingress"],
			GatewayKind::IngressGateway => ["Terminating", "Mesh"],
		}
	}
}

impl fmt::Display for GatewayKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GatewayKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"mesh-gateway" => Ok(GatewayKind::MeshGateway),
			"terminating-gateway" => Ok(GatewayKind::TerminatingGateway),
			"ingress-gateway" => Ok(GatewayKind::IngressGateway),
			other => Err(format!("unknown gateway kind: {other}")),
		}
	}
}

/// Description for a service kind string; empty for non-gateway kinds.
pub fn description(kind: &str) -> &'static str {
	kind.parse::<GatewayKind>()
		.map(|k| k.description())
		.unwrap_or("")
}

/// Other gateway labels for a service kind string; empty for non-gateway kinds.
pub fn other_gateways(kind: &str) -> Vec<&'static str> {
	kind.parse::<GatewayKind>()
		.map(|k| k.others().to_vec())
		.unwrap_or_default()
}
