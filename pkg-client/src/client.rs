// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! PKG API Client
//!
//! Async client for the Personal Knowledge Graph API. Every operation
//! issues exactly one HTTP request; there are no retries and no
//! cancellation, and validation runs locally before anything is sent.

use pkg_core::{Fact, Owner, PopulationQuery, PreferenceSubmission, Statement, ValidationError};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Default base URL of a locally running PKG API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// PKG client errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The API answered with a non-success status. The message is the
    /// server-provided one, surfaced verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for PKG client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Success payload common to the population endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Success payload of a SPARQL exploration query.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResponse {
    pub message: String,
    #[serde(default)]
    pub result: String,
}

/// PKG client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the PKG API server.
    pub base_url: String,
    /// Request timeout (default: 30 seconds).
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the Personal Knowledge Graph API.
///
/// # Example
///
/// ```no_run
/// use pkg_client::{ClientConfig, PkgClient};
/// use pkg_core::{Owner, Statement, TripleElement};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let owner = Owner::new("http://example.org/alice", "alice");
///     let client = PkgClient::new(ClientConfig::default(), owner);
///
///     let statement = Statement {
///         owner_uri: client.owner().uri.clone(),
///         owner_username: client.owner().username.clone(),
///         description: "I dislike all movies with Tom Cruise.".to_string(),
///         subject: TripleElement::reference("http://example.org/alice"),
///         predicate: TripleElement::reference("dislike"),
///         object: TripleElement::reference("http://example.org/Tom_Cruise"),
///         preference: Some(-1.0),
///         statement_id: None,
///     };
///     let response = client.add_statement(&statement).await?;
///     println!("{}", response.message);
///     Ok(())
/// }
/// ```
pub struct PkgClient {
    config: ClientConfig,
    http_client: HttpClient,
    owner: Owner,
}

impl PkgClient {
    /// Create a new client acting on behalf of the given owner.
    pub fn new(config: ClientConfig, owner: Owner) -> Self {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
            owner,
        }
    }

    /// The owner this client submits on behalf of.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Issue a request and decode the success payload.
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        debug!(method = %method, path, "issuing PKG API request");
        let mut request = self.http_client.request(method, self.endpoint(path));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let response = Self::check_status(response, path).await?;
        Ok(response.json().await?)
    }

    /// Convert a non-success response into [`ClientError::Api`], carrying
    /// the server's `message` when it sent one.
    async fn check_status(response: reqwest::Response, path: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!(status = status.as_u16(), path, "PKG API request failed");
        let message = response
            .json::<MessageResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("The PKG API returned status {}", status.as_u16()));
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Add a fact to the owner's graph.
    pub async fn add_fact(&self, fact: &Fact) -> Result<MessageResponse> {
        fact.validate()?;
        self.request(
            reqwest::Method::POST,
            "/facts",
            Some(serde_json::to_value(fact)?),
        )
        .await
    }

    /// Retract a fact from the owner's graph.
    pub async fn delete_fact(&self, fact: &Fact) -> Result<MessageResponse> {
        fact.validate()?;
        self.request(
            reqwest::Method::DELETE,
            "/facts",
            Some(serde_json::to_value(fact)?),
        )
        .await
    }

    /// Add an annotated statement.
    pub async fn add_statement(&self, statement: &Statement) -> Result<MessageResponse> {
        statement.validate()?;
        self.request(
            reqwest::Method::POST,
            "/statements",
            Some(serde_json::to_value(statement)?),
        )
        .await
    }

    /// Delete an annotated statement.
    pub async fn delete_statement(&self, statement: &Statement) -> Result<MessageResponse> {
        statement.validate()?;
        self.request(
            reqwest::Method::DELETE,
            "/statements",
            Some(serde_json::to_value(statement)?),
        )
        .await
    }

    /// Add a standalone preference.
    pub async fn add_preference(
        &self,
        submission: &PreferenceSubmission,
    ) -> Result<MessageResponse> {
        submission.validate()?;
        self.request(
            reqwest::Method::POST,
            "/preference",
            Some(serde_json::to_value(submission)?),
        )
        .await
    }

    /// Add a fact or preference through the textual population query.
    pub async fn population_add(&self, query: &PopulationQuery) -> Result<MessageResponse> {
        self.population(reqwest::Method::POST, query).await
    }

    /// Delete a fact through the textual population query.
    pub async fn population_delete(&self, query: &PopulationQuery) -> Result<MessageResponse> {
        self.population(reqwest::Method::DELETE, query).await
    }

    async fn population(
        &self,
        method: reqwest::Method,
        query: &PopulationQuery,
    ) -> Result<MessageResponse> {
        self.request(
            method,
            "/population",
            Some(json!({
                "owner_username": self.owner.username,
                "owner_uri": self.owner.uri,
                "query": query.to_string(),
            })),
        )
        .await
    }

    /// Fetch the rendered graph visualization as image bytes.
    pub async fn explore_graph(&self) -> Result<Vec<u8>> {
        let path = "/explore";
        debug!(path, "issuing PKG API request");
        let response = self
            .http_client
            .get(self.endpoint(path))
            .query(&[
                ("owner_username", self.owner.username.as_str()),
                ("owner_uri", self.owner.uri.as_str()),
            ])
            .send()
            .await?;
        let response = Self::check_status(response, path).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Run a SPARQL query against the owner's graph.
    pub async fn sparql_query(&self, sparql_query: &str) -> Result<SparqlResponse> {
        self.request(
            reqwest::Method::POST,
            "/explore",
            Some(json!({
                "sparql_query": sparql_query,
                "owner_username": self.owner.username,
                "owner_uri": self.owner.uri,
            })),
        )
        .await
    }
}
