// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consul agent client.

use std::time::Duration;

use async_trait::async_trait;
use console_common_config::{ConsulConfig, ConsulToken};
use console_nspace_core::{
	Datacenter, GrantSet, Nspace, NspaceSelector, ServiceError, ServiceResult, ACCESS_WRITE,
	RESOURCE_OPERATOR,
};
use console_nspace_route::{NspaceRepository, NspaceWriter, PermissionGate};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{transport, ClientError};

/// Header carrying the ACL token.
pub const TOKEN_HEADER: &str = "X-Consul-Token";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the console User-Agent string.
///
/// Format: `console/{version}`
pub fn user_agent() -> String {
	format!("console/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AuthorizeCheck<'a> {
	resource: &'a str,
	access: &'a str,
}

/// Builder for [`ConsulClient`].
#[derive(Debug, Default)]
pub struct ConsulClientBuilder {
	address: Option<String>,
	token: Option<ConsulToken>,
	timeout: Option<Duration>,
}

impl ConsulClientBuilder {
	pub fn address(mut self, address: impl Into<String>) -> Self {
		self.address = Some(address.into());
		self
	}

	pub fn token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(ConsulToken::new(token));
		self
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn build(self) -> Result<ConsulClient, ClientError> {
		let address = self
			.address
			.unwrap_or_else(|| ConsulConfig::default().address);
		let base = Url::parse(&address).map_err(|e| ClientError::InvalidAddress {
			address: address.clone(),
			message: e.to_string(),
		})?;
		if base.cannot_be_a_base() {
			return Err(ClientError::InvalidAddress {
				address,
				message: "not a base URL".to_string(),
			});
		}

		let http = Client::builder()
			.user_agent(user_agent())
			.timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
			.build()?;

		Ok(ConsulClient {
			http,
			base,
			token: self.token,
		})
	}
}

/// Talks to the Consul HTTP API on behalf of the namespace routes.
#[derive(Clone)]
pub struct ConsulClient {
	http: Client,
	base: Url,
	token: Option<ConsulToken>,
}

impl ConsulClient {
	pub fn builder() -> ConsulClientBuilder {
		ConsulClientBuilder::default()
	}

	pub fn from_config(config: &ConsulConfig) -> Result<Self, ClientError> {
		let mut builder = Self::builder()
			.address(config.address.clone())
			.timeout(Duration::from_secs(config.timeout_secs));
		if let Some(token) = &config.token {
			builder = builder.token(token.expose());
		}
		builder.build()
	}

	fn endpoint(&self, segments: &[&str], dc: &Datacenter) -> ServiceResult<Url> {
		let mut url = self.base.clone();
		url.path_segments_mut()
			.map_err(|_| ServiceError::Transport(format!("{} cannot be a base URL", self.base)))?
			.pop_if_empty()
			.extend(segments);
		url.query_pairs_mut().append_pair("dc", dc.as_str());
		Ok(url)
	}

	fn request(&self, method: Method, url: Url) -> RequestBuilder {
		let request = self.http.request(method, url);
		match &self.token {
			Some(token) => request.header(TOKEN_HEADER, token.expose()),
			None => request,
		}
	}

	/// Sends `request`, mapping non-success statuses. A 404 becomes
	/// `NotFound(name)` when a name is given.
	async fn execute(&self, request: RequestBuilder, name: Option<&str>) -> ServiceResult<Response> {
		let response = request.send().await.map_err(transport)?;
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}
		if let (StatusCode::NOT_FOUND, Some(name)) = (status, name) {
			return Err(ServiceError::NotFound(name.to_string()));
		}
		let message = response.text().await.unwrap_or_default();
		Err(ServiceError::Status {
			status: status.as_u16(),
			message: message.trim().to_string(),
		})
	}

	async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
		let body = response.bytes().await.map_err(transport)?;
		serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
	}
}

#[async_trait]
impl PermissionGate for ConsulClient {
	#[instrument(skip(self, dc, nspace), fields(dc = %dc, nspace = %nspace))]
	async fn authorize(&self, dc: &Datacenter, nspace: &NspaceSelector) -> ServiceResult<GrantSet> {
		let mut url = self.endpoint(&["v1", "internal", "acl", "authorize"], dc)?;
		url.query_pairs_mut().append_pair("ns", nspace.as_str());
		let checks = [AuthorizeCheck {
			resource: RESOURCE_OPERATOR,
			access: ACCESS_WRITE,
		}];

		let response = self
			.execute(self.request(Method::POST, url).json(&checks), None)
			.await?;
		let grants: GrantSet = Self::decode(response).await?;
		debug!(grants = grants.len(), "authorize resolved");
		Ok(grants)
	}
}

#[async_trait]
impl NspaceRepository for ConsulClient {
	#[instrument(skip(self, dc), fields(dc = %dc))]
	async fn find_by_slug(&self, dc: &Datacenter, name: &str) -> ServiceResult<Nspace> {
		let url = self.endpoint(&["v1", "namespace", name], dc)?;
		let response = self
			.execute(self.request(Method::GET, url), Some(name))
			.await?;
		let item: Option<Nspace> = Self::decode(response).await?;
		item.ok_or_else(|| ServiceError::NotFound(name.to_string()))
	}

	#[instrument(skip(self, dc), fields(dc = %dc))]
	async fn find_all(&self, dc: &Datacenter) -> ServiceResult<Vec<Nspace>> {
		let url = self.endpoint(&["v1", "namespaces"], dc)?;
		let response = self.execute(self.request(Method::GET, url), None).await?;
		let items: Option<Vec<Nspace>> = Self::decode(response).await?;
		let items = items.unwrap_or_default();
		debug!(count = items.len(), "namespaces listed");
		Ok(items)
	}
}

#[async_trait]
impl NspaceWriter for ConsulClient {
	#[instrument(skip(self, dc, item), fields(dc = %dc, nspace = %item.name))]
	async fn persist(&self, dc: &Datacenter, item: &Nspace, create: bool) -> ServiceResult<Nspace> {
		let url = if create {
			self.endpoint(&["v1", "namespace"], dc)?
		} else {
			self.endpoint(&["v1", "namespace", item.name.as_str()], dc)?
		};
		let name = (!create).then_some(item.name.as_str());
		let response = self
			.execute(self.request(Method::PUT, url).json(item), name)
			.await?;
		Self::decode(response).await
	}

	#[instrument(skip(self, dc, item), fields(dc = %dc, nspace = %item.name))]
	async fn remove(&self, dc: &Datacenter, item: &Nspace) -> ServiceResult<()> {
		let url = self.endpoint(&["v1", "namespace", item.name.as_str()], dc)?;
		self.execute(self.request(Method::DELETE, url), Some(item.name.as_str()))
			.await?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	use console_nspace_core::{
		is_authorized, AuthorizationFailure, Grant, NspaceDefaults, RouteOutcome,
	};
	use console_nspace_route::{FetchStrategy, ModelComposer, RouteParents};
	use serde_json::json;
	use wiremock::matchers::{body_json, header, method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn dc1() -> Datacenter {
		Datacenter::new("dc1").unwrap()
	}

	fn client(server: &MockServer) -> ConsulClient {
		ConsulClient::builder()
			.address(server.uri())
			.token("test-token")
			.build()
			.unwrap()
	}

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("console/"));
		assert_eq!(ua.split('/').count(), 2);
	}

	#[test]
	fn rejects_invalid_address() {
		let result = ConsulClient::builder().address("not a url").build();
		assert!(matches!(result, Err(ClientError::InvalidAddress { .. })));
	}

	#[test]
	fn from_config_uses_defaults() {
		assert!(ConsulClient::from_config(&ConsulConfig::default()).is_ok());
	}

	#[tokio::test]
	async fn authorize_posts_operator_write_check() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/v1/internal/acl/authorize"))
			.and(query_param("dc", "dc1"))
			.and(query_param("ns", "eng"))
			.and(header(TOKEN_HEADER, "test-token"))
			.and(body_json(json!([{"Resource": "operator", "Access": "write"}])))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([
				{"Resource": "operator", "Access": "write", "Allow": true}
			])))
			.expect(1)
			.mount(&server)
			.await;

		let nspace = NspaceSelector::from_route_segment("~eng").unwrap();
		let grants = client(&server).authorize(&dc1(), &nspace).await.unwrap();

		assert_eq!(grants, GrantSet::new(vec![Grant::new("operator", "write", true)]));
	}

	#[tokio::test]
	async fn authorize_surfaces_server_errors() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/v1/internal/acl/authorize"))
			.respond_with(ResponseTemplate::new(500).set_body_string("rpc error\n"))
			.mount(&server)
			.await;

		let nspace = NspaceSelector::from_name("eng").unwrap();
		let result = client(&server).authorize(&dc1(), &nspace).await;

		assert_eq!(
			result,
			Err(ServiceError::Status {
				status: 500,
				message: "rpc error".to_string()
			})
		);
	}

	#[tokio::test]
	async fn authorize_rejects_malformed_body() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
			.mount(&server)
			.await;

		let nspace = NspaceSelector::from_name("eng").unwrap();
		let result = client(&server).authorize(&dc1(), &nspace).await;

		assert!(matches!(result, Err(ServiceError::Decode(_))));
	}

	#[tokio::test]
	async fn null_authorize_body_denies_without_fetch() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/v1/internal/acl/authorize"))
			.respond_with(ResponseTemplate::new(200).set_body_string("null"))
			.expect(1)
			.mount(&server)
			.await;
		Mock::given(method("GET"))
			.and(path("/v1/namespaces"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
			.expect(0)
			.mount(&server)
			.await;

		let client = Arc::new(client(&server));
		let composer = ModelComposer::new(client.clone(), client);
		let parents = RouteParents::from_route("dc1", "~eng").unwrap();

		let outcome = composer
			.compose(&parents, FetchStrategy::All { filter: None })
			.await
			.unwrap();

		assert_eq!(outcome, RouteOutcome::Denied(AuthorizationFailure::unauthorized()));
	}

	#[tokio::test]
	async fn malformed_grant_records_do_not_fail_authorize() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/v1/internal/acl/authorize"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([
				null,
				{"Resource": "key", "Access": "read", "Allow": "yes"},
				{"Resource": "operator", "Access": "write", "Allow": true}
			])))
			.mount(&server)
			.await;

		let nspace = NspaceSelector::from_name("eng").unwrap();
		let grants = client(&server).authorize(&dc1(), &nspace).await.unwrap();

		assert_eq!(grants.len(), 2);
		assert!(is_authorized(&grants));
	}

	#[tokio::test]
	async fn find_all_lists_namespaces() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/v1/namespaces"))
			.and(query_param("dc", "dc1"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([
				{"Name": "default", "Description": "Builtin Default Namespace", "CreateIndex": 4, "ModifyIndex": 4},
				{"Name": "eng", "ACLs": {"PolicyDefaults": [], "RoleDefaults": []}, "CreateIndex": 9, "ModifyIndex": 9}
			])))
			.expect(1)
			.mount(&server)
			.await;

		let items = client(&server).find_all(&dc1()).await.unwrap();

		assert_eq!(items.len(), 2);
		assert_eq!(items[1].name, "eng");
	}

	#[tokio::test]
	async fn find_by_slug_fetches_one() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/v1/namespace/eng"))
			.and(query_param("dc", "dc1"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_json(json!({"Name": "eng", "Description": "Engineering", "CreateIndex": 9})),
			)
			.expect(1)
			.mount(&server)
			.await;

		let item = client(&server).find_by_slug(&dc1(), "eng").await.unwrap();

		assert_eq!(item.description, "Engineering");
	}

	#[tokio::test]
	async fn find_by_slug_maps_missing_namespace() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/v1/namespace/ghost"))
			.respond_with(ResponseTemplate::new(404))
			.mount(&server)
			.await;
		Mock::given(method("GET"))
			.and(path("/v1/namespace/null"))
			.respond_with(ResponseTemplate::new(200).set_body_string("null"))
			.mount(&server)
			.await;

		let client = client(&server);
		assert_eq!(
			client.find_by_slug(&dc1(), "ghost").await,
			Err(ServiceError::NotFound("ghost".to_string()))
		);
		assert_eq!(
			client.find_by_slug(&dc1(), "null").await,
			Err(ServiceError::NotFound("null".to_string()))
		);
	}

	#[tokio::test]
	async fn persist_creates_and_updates() {
		let server = MockServer::start().await;
		Mock::given(method("PUT"))
			.and(path("/v1/namespace"))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(json!({"Name": "new", "CreateIndex": 20})),
			)
			.expect(1)
			.mount(&server)
			.await;
		Mock::given(method("PUT"))
			.and(path("/v1/namespace/eng"))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(json!({"Name": "eng", "ModifyIndex": 21})),
			)
			.expect(1)
			.mount(&server)
			.await;

		let client = client(&server);
		let mut item = Nspace::blank(NspaceDefaults::empty_acls());
		item.name = "new".to_string();
		let created = client.persist(&dc1(), &item, true).await.unwrap();
		assert!(created.is_persisted());

		item.name = "eng".to_string();
		let updated = client.persist(&dc1(), &item, false).await.unwrap();
		assert_eq!(updated.modify_index, 21);
	}

	#[tokio::test]
	async fn remove_deletes_by_name() {
		let server = MockServer::start().await;
		Mock::given(method("DELETE"))
			.and(path("/v1/namespace/eng"))
			.and(query_param("dc", "dc1"))
			.respond_with(ResponseTemplate::new(200).set_body_string("true"))
			.expect(1)
			.mount(&server)
			.await;

		let item = Nspace {
			name: "eng".to_string(),
			..Default::default()
		};
		client(&server).remove(&dc1(), &item).await.unwrap();
	}

	#[tokio::test]
	async fn connection_failure_is_transport_error() {
		let client = ConsulClient::builder()
			.address("http://127.0.0.1:9")
			.timeout(Duration::from_secs(2))
			.build()
			.unwrap();

		let result = client.find_all(&dc1()).await;

		assert!(matches!(result, Err(ServiceError::Transport(_))));
	}
}
