// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use console_nspace_core::ServiceError;
use thiserror::Error;

/// Errors raised while constructing a [`ConsulClient`](crate::ConsulClient).
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("invalid consul address {address:?}: {message}")]
	InvalidAddress { address: String, message: String },

	#[error("failed to build HTTP client: {0}")]
	Build(#[from] reqwest::Error),
}

/// Maps a failed request onto the collaborator error taxonomy.
pub(crate) fn transport(e: reqwest::Error) -> ServiceError {
	if e.is_decode() {
		ServiceError::Decode(e.to_string())
	} else {
		ServiceError::Transport(e.to_string())
	}
}
