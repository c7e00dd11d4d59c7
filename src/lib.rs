//! GitHub repository search client
//!
//! A small core for searching the GitHub repository-search API and
//! accumulating paginated results:
//!
//! - **`decode`**: typed extraction from loosely-typed JSON objects, with
//!   structured, key-aware errors
//! - **`types`**: the domain records ([`Repository`], [`User`],
//!   [`SearchResult`]) with atomic fail-fast construction
//! - **`api`**: endpoint descriptions and the generic request/decode
//!   operation over an abstract transport
//! - **`search`**: the paginated session manager with single-flight
//!   request discipline and completion detection
//!
//! # Example
//!
//! ```rust,ignore
//! use github_search::{Config, GitHubApi, SearchRepositoriesManager};
//!
//! let api = GitHubApi::new(&Config::load()?);
//! let manager = SearchRepositoriesManager::new(api, "swift")
//!     .expect("query must not be empty");
//!
//! manager.search(true).await?;
//! for repo in manager.repositories() {
//!     println!("{} ({}★)", repo.full_name, repo.stargazers_count);
//! }
//! ```

pub mod api;
pub mod config;
pub mod decode;
pub mod search;
pub mod types;

// Re-export the main entry points at crate root
pub use api::{ApiError, ApiResult, Endpoint, GitHubApi, SearchRepositories, TransportError};
pub use config::Config;
pub use decode::{Decodable, DecodeError, JsonObject};
pub use search::SearchRepositoriesManager;
pub use types::{Repository, SearchResult, User};
