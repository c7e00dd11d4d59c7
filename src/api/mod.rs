//! GitHub API client
//!
//! An [`Endpoint`] is a typed description of one API call: path, method,
//! query parameters, and the decoded response shape. [`GitHubApi::request`]
//! performs the call through the transport collaborator and decodes the
//! body, so callers only ever see typed records or a structured error.

pub mod error;
pub mod http;

pub use error::{ApiError, ApiResult, TransportError};
pub use http::{ReqwestTransport, Transport};

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::Config;
use crate::decode::Decodable;
use crate::types::{Repository, SearchResult};

/// HTTP methods the client supports. The API surface is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET
    Get,
}

/// Ordered query-parameter mapping
///
/// Values are optional; a key paired with `None` is dropped from the
/// outgoing request. Keys are expected to be unique per endpoint.
#[derive(Debug, Clone, Default)]
pub struct Parameters(Vec<(&'static str, Option<String>)>);

impl Parameters {
    /// Resolved key/value pairs for the wire; absent values are omitted
    pub fn into_query(self) -> Vec<(String, String)> {
        self.0
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_owned(), value)))
            .collect()
    }
}

impl<const N: usize> From<[(&'static str, Option<String>); N]> for Parameters {
    fn from(entries: [(&'static str, Option<String>); N]) -> Self {
        Self(entries.into())
    }
}

/// Typed description of one API call
pub trait Endpoint {
    /// The decoded response shape
    type Response: Decodable;

    /// Path relative to the API base URL
    fn path(&self) -> &str;

    /// HTTP method for the call
    fn method(&self) -> Method;

    /// Query parameters for the call
    fn parameters(&self) -> Parameters;
}

/// Client for the GitHub REST API
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct GitHubApi {
    transport: Arc<dyn Transport>,
}

impl GitHubApi {
    /// Create a client backed by the production HTTP transport
    pub fn new(config: &Config) -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new(config)),
        }
    }

    /// Create a client over an arbitrary transport
    ///
    /// Used by tests to substitute canned responses for the network.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Perform `endpoint`'s request and decode the response
    ///
    /// Transport failures, non-object bodies, and decode failures each map
    /// to their own [`ApiError`] variant; see the module docs for the
    /// taxonomy.
    #[instrument(skip(self, endpoint), fields(path = %endpoint.path()))]
    pub async fn request<E: Endpoint>(&self, endpoint: &E) -> ApiResult<E::Response> {
        match endpoint.method() {
            Method::Get => {
                let query = endpoint.parameters().into_query();
                debug!(params = query.len(), "issuing request");

                let body = self.transport.get(endpoint.path(), &query).await?;
                let json = body.as_object().ok_or(ApiError::UnexpectedResponse)?;

                Ok(E::Response::decode(json)?)
            }
        }
    }
}

/// `GET search/repositories` — paginated repository search
#[derive(Debug, Clone)]
pub struct SearchRepositories {
    /// Search query (GitHub search syntax)
    pub query: String,
    /// 1-based page number
    pub page: u32,
}

impl SearchRepositories {
    /// Describe a search for `query` at `page`
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

impl Endpoint for SearchRepositories {
    type Response = SearchResult<Repository>;

    fn path(&self) -> &str {
        "search/repositories"
    }

    fn method(&self) -> Method {
        Method::Get
    }

    fn parameters(&self) -> Parameters {
        Parameters::from([
            ("q", Some(self.query.clone())),
            ("page", Some(self.page.to_string())),
        ])
    }
}
