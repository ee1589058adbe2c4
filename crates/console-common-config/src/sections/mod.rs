// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod consul;
mod logging;
mod nspaces;

pub use consul::{ConsulConfig, ConsulConfigLayer, ConsulToken};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use nspaces::{NspacesConfig, NspacesConfigLayer};
