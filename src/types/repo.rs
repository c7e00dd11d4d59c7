//! Repository type definitions
//!
//! The repository record as returned by the search API. Field order in
//! `decode` mirrors the wire shape; the first failure short-circuits the
//! whole construction.

use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use super::common::User;
use crate::decode::{self, Decodable, DecodeResult, JsonObject};

/// A GitHub repository
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    /// Numeric repository id
    pub id: i64,

    /// Repository name (without owner)
    pub name: String,

    /// Full repository name with owner (e.g., "owner/repo")
    pub full_name: String,

    /// Whether the repository is private (wire key `private`)
    pub is_private: bool,

    /// Repository URL on github.com
    pub html_url: Url,

    /// Repository description
    pub description: Option<String>,

    /// Whether the repository is a fork (wire key `fork`)
    pub is_fork: bool,

    /// API resource URL (wire key `url`)
    pub api_url: Url,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Last push timestamp, absent for empty repositories
    pub pushed_at: Option<DateTime<Utc>>,

    /// Homepage URL as free text
    pub homepage: Option<String>,

    /// Size in kilobytes
    pub size: u64,

    /// Star count
    pub stargazers_count: u64,

    /// Watcher count
    pub watchers_count: u64,

    /// Primary language
    pub language: Option<String>,

    /// Fork count
    pub forks_count: u64,

    /// Open issue count
    pub open_issues_count: u64,

    /// Legacy master branch name, rarely present
    pub master_branch: Option<String>,

    /// Default branch name
    pub default_branch: String,

    /// Search relevance score
    pub score: f64,

    /// Repository owner
    pub owner: User,
}

impl Decodable for Repository {
    fn decode(json: &JsonObject) -> DecodeResult<Self> {
        Ok(Self {
            id: decode::require(json, "id")?,
            name: decode::require(json, "name")?,
            full_name: decode::require(json, "full_name")?,
            is_private: decode::require(json, "private")?,
            html_url: decode::require_url(json, "html_url")?,
            description: decode::optional(json, "description")?,
            is_fork: decode::require(json, "fork")?,
            api_url: decode::require_url(json, "url")?,
            created_at: decode::require_date(json, "created_at")?,
            updated_at: decode::require_date(json, "updated_at")?,
            pushed_at: decode::optional_date(json, "pushed_at")?,
            homepage: decode::optional(json, "homepage")?,
            size: decode::require(json, "size")?,
            stargazers_count: decode::require(json, "stargazers_count")?,
            watchers_count: decode::require(json, "watchers_count")?,
            language: decode::optional(json, "language")?,
            forks_count: decode::require(json, "forks_count")?,
            open_issues_count: decode::require(json, "open_issues_count")?,
            master_branch: decode::optional(json, "master_branch")?,
            default_branch: decode::require(json, "default_branch")?,
            score: decode::require(json, "score")?,
            owner: User::decode(&decode::require::<JsonObject>(json, "owner")?)?,
        })
    }
}

impl Repository {
    /// Re-serialize the modeled fields to their wire representation
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "full_name": self.full_name,
            "private": self.is_private,
            "html_url": self.html_url.as_str(),
            "description": self.description,
            "fork": self.is_fork,
            "url": self.api_url.as_str(),
            "created_at": decode::format_date(&self.created_at),
            "updated_at": decode::format_date(&self.updated_at),
            "pushed_at": self.pushed_at.as_ref().map(decode::format_date),
            "homepage": self.homepage,
            "size": self.size,
            "stargazers_count": self.stargazers_count,
            "watchers_count": self.watchers_count,
            "language": self.language,
            "forks_count": self.forks_count,
            "open_issues_count": self.open_issues_count,
            "master_branch": self.master_branch,
            "default_branch": self.default_branch,
            "score": self.score,
            "owner": self.owner.to_json(),
        })
    }
}

/// Well-formed repository fixture shared across the crate's unit tests
#[cfg(test)]
pub(crate) fn repo_json(id: i64, name: &str) -> Value {
    use serde_json::json;

    json!({
        "id": id,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "private": false,
        "html_url": format!("https://github.com/octocat/{name}"),
        "description": "A test fixture",
        "fork": false,
        "url": format!("https://api.github.com/repos/octocat/{name}"),
        "created_at": "2015-09-21T08:12:58Z",
        "updated_at": "2015-09-22T10:00:00Z",
        "pushed_at": null,
        "homepage": null,
        "size": 128,
        "stargazers_count": 42,
        "watchers_count": 42,
        "language": "Swift",
        "forks_count": 3,
        "open_issues_count": 1,
        "master_branch": null,
        "default_branch": "main",
        "score": 11.5,
        "owner": {
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "gravatar_id": "",
            "url": "https://api.github.com/users/octocat",
            "received_events_url": "https://api.github.com/users/octocat/received_events",
            "type": "User",
        },
    })
}
