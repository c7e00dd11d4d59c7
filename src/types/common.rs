//! Common types shared across GitHub entities

use serde_json::Value;
use url::Url;

use crate::decode::{self, Decodable, DecodeResult, JsonObject};

/// A GitHub account as embedded in search results (the repository owner)
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// GitHub login/username
    pub login: String,

    /// Numeric account id
    pub id: i64,

    /// Avatar image URL
    pub avatar_url: Url,

    /// Gravatar id (frequently empty)
    pub gravatar_id: String,

    /// API resource URL (wire key `url`)
    pub api_url: Url,

    /// Received-events feed URL
    pub received_events_url: Url,

    /// Account type, e.g. "User" or "Organization" (wire key `type`)
    pub account_type: String,
}

impl Decodable for User {
    fn decode(json: &JsonObject) -> DecodeResult<Self> {
        Ok(Self {
            login: decode::require(json, "login")?,
            id: decode::require(json, "id")?,
            avatar_url: decode::require_url(json, "avatar_url")?,
            gravatar_id: decode::require(json, "gravatar_id")?,
            api_url: decode::require_url(json, "url")?,
            received_events_url: decode::require_url(json, "received_events_url")?,
            account_type: decode::require(json, "type")?,
        })
    }
}

impl User {
    /// Re-serialize the modeled fields to their wire representation
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "login": self.login,
            "id": self.id,
            "avatar_url": self.avatar_url.as_str(),
            "gravatar_id": self.gravatar_id,
            "url": self.api_url.as_str(),
            "received_events_url": self.received_events_url.as_str(),
            "type": self.account_type,
        })
    }
}
