// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consul HTTP API client for the console namespace routes.
//!
//! [`ConsulClient`] implements the route collaborators against a Consul agent:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | authorize | `POST /v1/internal/acl/authorize?dc=&ns=` |
//! | find_all | `GET /v1/namespaces?dc=` |
//! | find_by_slug | `GET /v1/namespace/:name?dc=` |
//! | persist (create) | `PUT /v1/namespace?dc=` |
//! | persist (update) | `PUT /v1/namespace/:name?dc=` |
//! | remove | `DELETE /v1/namespace/:name?dc=` |
//!
//! # Example
//!
//! ```ignore
//! let client = ConsulClient::builder()
//!     .address("http://127.0.0.1:8500")
//!     .token("…")
//!     .build()?;
//! let grants = client.authorize(&dc, &nspace).await?;
//! ```

mod client;
mod error;

pub use client::{user_agent, ConsulClient, ConsulClientBuilder, TOKEN_HEADER};
pub use error::ClientError;
