//! Search session manager scenarios over a mock transport
//!
//! These tests drive [`SearchRepositoriesManager`] end to end through the
//! API client with canned responses, covering pagination bookkeeping,
//! single-flight discipline, completion detection, refresh semantics, and
//! failure isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use github_search::api::{Transport, TransportError};
use github_search::{ApiError, GitHubApi, SearchRepositoriesManager};

/// Well-formed repository object as the search API returns it
fn repo_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "private": false,
        "html_url": format!("https://github.com/octocat/{name}"),
        "description": null,
        "fork": false,
        "url": format!("https://api.github.com/repos/octocat/{name}"),
        "created_at": "2015-09-21T08:12:58Z",
        "updated_at": "2015-09-22T10:00:00Z",
        "pushed_at": "2015-09-23T12:30:00Z",
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

/// Search envelope with `count` sequentially named items
fn envelope(total_count: u64, first_id: i64, count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| repo_json(first_id + i as i64, &format!("repo-{}", first_id + i as i64)))
        .collect();

    json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": items,
    })
}

/// Transport returning queued canned responses, recording every call
struct MockTransport {
    responses: Mutex<Vec<Result<Value, (u16, String)>>>,
    queries: Mutex<Vec<Vec<(String, String)>>>,
    calls: AtomicUsize,
}

impl MockTransport {
    fn new(responses: Vec<Result<Value, (u16, String)>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            queries: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn queries(&self) -> Vec<Vec<(String, String)>> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, _path: &str, query: &[(String, String)]) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_vec());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            panic!("mock transport called more times than responses were queued");
        }
        responses
            .remove(0)
            .map_err(|(status, body)| TransportError::Http { status, body })
    }
}

/// Transport that parks inside `get` until released, to observe in-flight state
struct GatedTransport {
    entered: Notify,
    release: Notify,
}

impl GatedTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            entered: Notify::new(),
            release: Notify::new(),
        })
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn get(&self, _path: &str, _query: &[(String, String)]) -> Result<Value, TransportError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(envelope(1, 1, 1))
    }
}

fn manager_over(transport: Arc<dyn Transport>, query: &str) -> SearchRepositoriesManager {
    SearchRepositoriesManager::new(GitHubApi::with_transport(transport), query)
        .expect("non-empty query")
}

#[tokio::test]
async fn paginates_until_the_reported_total_is_reached() {
    let transport = MockTransport::new(vec![
        Ok(envelope(12, 1, 10)),
        Ok(envelope(12, 11, 2)),
    ]);
    let manager = manager_over(transport.clone(), "swift");

    assert!(manager.search(true).await.unwrap());
    assert_eq!(manager.len(), 10);
    assert!(!manager.is_completed());
    assert_eq!(manager.page(), 2);

    assert!(manager.search(false).await.unwrap());
    assert_eq!(manager.len(), 12);
    assert!(manager.is_completed());

    // Accepted requests carried the query and the right page cursor.
    assert_eq!(
        transport.queries(),
        vec![
            vec![
                ("q".to_owned(), "swift".to_owned()),
                ("page".to_owned(), "1".to_owned()),
            ],
            vec![
                ("q".to_owned(), "swift".to_owned()),
                ("page".to_owned(), "2".to_owned()),
            ],
        ]
    );
}

#[tokio::test]
async fn completed_session_rejects_without_network_traffic() {
    let transport = MockTransport::new(vec![Ok(envelope(1, 1, 1))]);
    let manager = manager_over(transport.clone(), "swift");

    assert!(manager.search(true).await.unwrap());
    assert!(manager.is_completed());
    let before = manager.repositories();

    assert!(!manager.search(false).await.unwrap());
    assert_eq!(manager.repositories(), before);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn results_accumulate_in_api_order() {
    let transport = MockTransport::new(vec![
        Ok(envelope(100, 1, 3)),
        Ok(envelope(100, 4, 3)),
    ]);
    let manager = manager_over(transport, "swift");

    manager.search(true).await.unwrap();
    manager.search(false).await.unwrap();

    let ids: Vec<i64> = manager.repositories().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn refresh_clears_accumulated_results_before_appending() {
    let transport = MockTransport::new(vec![
        Ok(envelope(100, 1, 10)),
        Ok(envelope(100, 11, 2)),
        Ok(envelope(100, 21, 5)),
    ]);
    let manager = manager_over(transport, "swift");

    manager.search(true).await.unwrap();
    manager.search(false).await.unwrap();
    assert_eq!(manager.len(), 12);
    assert_eq!(manager.page(), 3);

    // Refresh restarts pagination: only the new page's items survive.
    assert!(manager.search(true).await.unwrap());
    assert_eq!(manager.len(), 5);
    assert_eq!(manager.page(), 2);
}

#[tokio::test]
async fn in_flight_session_rejects_a_second_search() {
    let transport = GatedTransport::new();
    let manager = manager_over(transport.clone(), "swift");

    let background = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.search(true).await })
    };

    // Wait until the first request is parked inside the transport.
    transport.entered.notified().await;
    assert!(manager.is_in_flight());

    assert!(!manager.search(false).await.unwrap());
    assert!(manager.repositories().is_empty());

    transport.release.notify_one();
    assert!(background.await.unwrap().unwrap());
    assert!(!manager.is_in_flight());
    assert_eq!(manager.len(), 1);
}

#[tokio::test]
async fn failed_request_leaves_state_unchanged() {
    let transport = MockTransport::new(vec![
        Ok(envelope(100, 1, 10)),
        Err((403, "rate limit exceeded".to_owned())),
        Ok(envelope(100, 11, 10)),
    ]);
    let manager = manager_over(transport, "swift");

    manager.search(true).await.unwrap();
    assert_eq!(manager.page(), 2);

    let err = manager.search(false).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport(TransportError::Http { status: 403, .. })
    ));
    assert_eq!(manager.len(), 10);
    assert_eq!(manager.page(), 2);
    assert!(!manager.is_in_flight());

    // The session recovers: the retried page is accepted and applied.
    assert!(manager.search(false).await.unwrap());
    assert_eq!(manager.len(), 20);
    assert_eq!(manager.page(), 3);
}

#[tokio::test]
async fn malformed_page_is_never_partially_applied() {
    let mut bad_envelope = envelope(100, 11, 2);
    bad_envelope["items"][1]
        .as_object_mut()
        .unwrap()
        .remove("id");

    let transport = MockTransport::new(vec![Ok(envelope(100, 1, 10)), Ok(bad_envelope)]);
    let manager = manager_over(transport, "swift");

    manager.search(true).await.unwrap();

    let err = manager.search(false).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(manager.len(), 10);
    assert_eq!(manager.page(), 2);
}

#[tokio::test]
async fn empty_query_yields_no_session_and_no_request() {
    let transport = MockTransport::new(vec![]);
    let api = GitHubApi::with_transport(transport.clone());

    assert!(SearchRepositoriesManager::new(api, "").is_none());
    assert_eq!(transport.calls(), 0);
}
