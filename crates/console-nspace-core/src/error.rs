// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for namespace access.

use thiserror::Error;

/// Errors raised while building route identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NspaceError {
	/// Datacenter name was empty
	#[error("datacenter name must not be empty")]
	EmptyDatacenter,

	/// Namespace route segment had nothing after its sigil
	#[error("invalid namespace selector: {0:?}")]
	InvalidSelector(String),
}

/// Result type for identifier validation.
pub type Result<T> = std::result::Result<T, NspaceError>;

/// Errors produced by the permission service and namespace repository.
///
/// Route composition never creates or maps these; whatever a collaborator
/// returns reaches the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
	/// Request could not be delivered
	#[error("transport error: {0}")]
	Transport(String),

	/// Namespace does not exist
	#[error("namespace not found: {0}")]
	NotFound(String),

	/// Service answered with a non-success status
	#[error("service returned {status}: {message}")]
	Status { status: u16, message: String },

	/// Response body could not be decoded
	#[error("decode error: {0}")]
	Decode(String),
}

/// Result type for collaborator calls.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
