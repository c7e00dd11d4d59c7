//! Domain record types
//!
//! Strongly-typed records for the API's response shapes. Each record
//! implements [`Decodable`](crate::decode::Decodable) with atomic,
//! fail-fast construction: the first failing field decode aborts the whole
//! record and propagates its error unchanged.

pub mod common;
pub mod repo;
pub mod search;

pub use common::User;
pub use repo::Repository;
pub use search::SearchResult;
