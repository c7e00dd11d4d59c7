//! Search session state management
//!
//! [`SearchRepositoriesManager`] owns the accumulated result list for one
//! query and coordinates repeated `search/repositories` calls: at most one
//! request in flight, pagination bookkeeping, and completion detection
//! against the server-reported total.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::api::{ApiResult, GitHubApi, SearchRepositories};
use crate::types::Repository;

/// Mutable session state, owned exclusively by the manager
struct SessionState {
    repositories: Vec<Repository>,
    /// 1-based page cursor for the next non-refresh request
    page: u32,
    in_flight: bool,
    completed: bool,
}

/// Paginated search session over a single query
///
/// Clones share the same session. The state lock is held only for flag
/// checks and response application, never across the network await, so a
/// `search` call racing an in-flight request observes the flag and is
/// rejected instead of queueing. Responses are therefore applied strictly
/// in the order their requests were accepted.
#[derive(Clone)]
pub struct SearchRepositoriesManager {
    api: GitHubApi,
    query: Arc<str>,
    state: Arc<Mutex<SessionState>>,
}

impl SearchRepositoriesManager {
    /// Create a session for `query`
    ///
    /// Returns `None` for an empty query; no request is ever issued for one.
    /// The query is immutable for the session's lifetime — a changed query
    /// means a new manager.
    pub fn new(api: GitHubApi, query: impl Into<String>) -> Option<Self> {
        let query: String = query.into();
        if query.is_empty() {
            return None;
        }

        Some(Self {
            api,
            query: query.into(),
            state: Arc::new(Mutex::new(SessionState {
                repositories: Vec::new(),
                page: 1,
                in_flight: false,
                completed: false,
            })),
        })
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }

    /// The session's query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Snapshot of the accumulated results, in API order
    pub fn repositories(&self) -> Vec<Repository> {
        self.state().repositories.clone()
    }

    /// Number of accumulated results
    pub fn len(&self) -> usize {
        self.state().repositories.len()
    }

    /// Whether no results have been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.state().repositories.is_empty()
    }

    /// The page the next non-refresh request will ask for
    pub fn page(&self) -> u32 {
        self.state().page
    }

    /// Whether a request is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        self.state().in_flight
    }

    /// Whether the session has retrieved everything the server reported
    pub fn is_completed(&self) -> bool {
        self.state().completed
    }

    /// Issue the next search request
    ///
    /// Returns `Ok(false)` without touching the network when a request is
    /// already in flight or the session is completed — callers that merely
    /// wanted to be lazy can ignore the rejection. Otherwise requests page 1
    /// (on `refresh`) or the current cursor and applies the response:
    /// refresh clears the accumulated list first, items are appended in API
    /// order, the cursor advances, and the session completes once the
    /// accumulated count reaches the server-reported total. A failed request
    /// leaves the accumulated state untouched and surfaces the error.
    pub async fn search(&self, refresh: bool) -> ApiResult<bool> {
        let page = {
            let mut state = self.state();
            if state.in_flight || state.completed {
                debug!(
                    in_flight = state.in_flight,
                    completed = state.completed,
                    "search rejected"
                );
                return Ok(false);
            }
            state.in_flight = true;
            if refresh {
                1
            } else {
                state.page
            }
        };

        let endpoint = SearchRepositories::new(self.query.as_ref(), page);
        let result = self.api.request(&endpoint).await;

        let mut state = self.state();
        state.in_flight = false;
        match result {
            Ok(response) => {
                if refresh {
                    state.repositories.clear();
                    state.page = 1;
                }
                state.repositories.extend(response.items);
                // The cursor advances on every successful response, even a
                // short page; the completed flag is what stops traffic.
                state.page += 1;
                state.completed = response.total_count <= state.repositories.len() as u64;

                debug!(
                    page,
                    total = response.total_count,
                    accumulated = state.repositories.len(),
                    completed = state.completed,
                    "page applied"
                );
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }
}
