//! Search session state machine
//!
//! `SearchSession` is the single owner of "what should the UI show right
//! now". It issues at most one catalog request at a time, supersedes stale
//! responses via a monotonically increasing request token, and replaces its
//! `SearchState` wholesale on every transition so renderers never observe a
//! partial update.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::catalog::{Category, SearchResult, listing_order};

/// Identifier minted per search to detect superseded responses.
pub type RequestToken = u64;

/// Asynchronous catalog search collaborator. Cancellation is delivered by
/// dropping the returned future.
pub trait SearchClient: Send + Sync + 'static {
    fn search(
        &self,
        text: String,
        category: Category,
    ) -> impl Future<Output = Result<Vec<SearchResult>>> + Send;
}

/// The exhaustive set of UI-relevant search outcomes. `Results` is never
/// empty; an empty success is represented as `NoResults`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchState {
    #[default]
    NotSearchedYet,
    Loading,
    NoResults,
    Results(Vec<SearchResult>),
}

impl SearchState {
    /// Sole constructor for post-search states: sorts the list into listing
    /// order and maps an empty list to `NoResults`.
    fn from_results(mut results: Vec<SearchResult>) -> Self {
        if results.is_empty() {
            SearchState::NoResults
        } else {
            results.sort_by(listing_order);
            SearchState::Results(results)
        }
    }

    pub fn result_count(&self) -> usize {
        match self {
            SearchState::Results(list) => list.len(),
            _ => 0,
        }
    }
}

struct SessionInner {
    state: SearchState,
    /// Last settled (non-`Loading`) state, restored when a search fails.
    fallback: SearchState,
    active_token: RequestToken,
    in_flight: Option<JoinHandle<()>>,
}

/// Owns all search state and the one in-flight request.
pub struct SearchSession<C> {
    client: Arc<C>,
    inner: Arc<Mutex<SessionInner>>,
}

impl<C: SearchClient> SearchSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            inner: Arc::new(Mutex::new(SessionInner {
                state: SearchState::NotSearchedYet,
                fallback: SearchState::NotSearchedYet,
                active_token: 0,
                in_flight: None,
            })),
        }
    }

    /// Starts a new search, superseding any in-flight one.
    ///
    /// The state is `Loading` by the time this returns; the client call runs
    /// on a spawned task. `on_complete` fires exactly once with a success
    /// flag unless the search is superseded first, in which case it never
    /// fires and the late response is discarded without touching state.
    ///
    /// Empty and whitespace-only queries are ignored entirely.
    pub async fn start_search<F>(&self, text: &str, category: Category, on_complete: F)
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let query = text.trim().to_string();
        if query.is_empty() {
            tracing::debug!("ignoring empty search query");
            return;
        }

        let mut inner = self.inner.lock().await;

        // Best-effort transport abort; the token bump below is what actually
        // guarantees the old response can no longer be observed.
        if let Some(handle) = inner.in_flight.take() {
            handle.abort();
        }
        inner.active_token += 1;
        let token = inner.active_token;

        // A superseded search's `Loading` must never become a reversion
        // target, so the fallback only tracks settled states.
        if !matches!(inner.state, SearchState::Loading) {
            inner.fallback = std::mem::replace(&mut inner.state, SearchState::Loading);
        }

        tracing::debug!(token, query = %query, category = ?category, "search started");

        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let outcome = client.search(query.clone(), category).await;

            let mut inner = shared.lock().await;
            if inner.active_token != token {
                tracing::debug!(token, "discarding superseded search response");
                return;
            }
            inner.in_flight = None;

            let success = match outcome {
                Ok(results) => {
                    tracing::info!(
                        token,
                        query = %query,
                        count = results.len(),
                        "search completed"
                    );
                    inner.state = SearchState::from_results(results);
                    true
                }
                Err(e) => {
                    tracing::error!(token, query = %query, error = %e, "search failed");
                    inner.state = inner.fallback.clone();
                    false
                }
            };
            drop(inner);

            on_complete(success);
        });
        inner.in_flight = Some(handle);
    }

    /// The most recent non-superseded transition. Pure read.
    pub async fn current_state(&self) -> SearchState {
        self.inner.lock().await.state.clone()
    }

    pub async fn result_count(&self) -> usize {
        self.inner.lock().await.state.result_count()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use anyhow::anyhow;
    use tokio::sync::oneshot;

    use super::*;

    type Response = Result<Vec<SearchResult>>;

    enum Scripted {
        Ready(Response),
        Gated(oneshot::Receiver<Response>),
    }

    /// Serves one scripted response per `search` call, in order. Panics if
    /// called more times than responses were scripted.
    struct ScriptedClient {
        responses: StdMutex<VecDeque<Scripted>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Scripted>) -> Self {
            Self {
                responses: StdMutex::new(responses.into()),
            }
        }
    }

    impl SearchClient for ScriptedClient {
        fn search(
            &self,
            _text: String,
            _category: Category,
        ) -> impl Future<Output = Response> + Send {
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("search called more times than scripted");
            async move {
                match next {
                    Scripted::Ready(response) => response,
                    Scripted::Gated(gate) => match gate.await {
                        Ok(response) => response,
                        Err(_) => Err(anyhow!("request canceled")),
                    },
                }
            }
        }
    }

    fn result(name: &str, artist: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            artist: artist.to_string(),
            ..SearchResult::default()
        }
    }

    /// Lets spawned session tasks run up to their next suspension point.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn completed_search(
        session: &SearchSession<ScriptedClient>,
        text: &str,
    ) -> bool {
        let (tx, rx) = oneshot::channel();
        session
            .start_search(text, Category::All, move |ok| {
                let _ = tx.send(ok);
            })
            .await;
        rx.await.expect("completion callback never fired")
    }

    #[tokio::test]
    async fn start_search_transitions_to_loading_before_returning() {
        let (_gate, rx) = oneshot::channel();
        let session = SearchSession::new(ScriptedClient::new(vec![Scripted::Gated(rx)]));

        session.start_search("metallica", Category::Music, |_| {}).await;

        assert_eq!(session.current_state().await, SearchState::Loading);
    }

    #[tokio::test]
    async fn whitespace_query_is_a_no_op() {
        let session = SearchSession::new(ScriptedClient::new(vec![]));
        let fired = Arc::new(AtomicBool::new(false));
        let fired_flag = Arc::clone(&fired);

        session
            .start_search("   \t ", Category::All, move |_| {
                fired_flag.store(true, Ordering::SeqCst);
            })
            .await;

        // No client call (ScriptedClient would panic), no transition, no callback.
        assert_eq!(session.current_state().await, SearchState::NotSearchedYet);
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn successful_search_sorts_results_by_name() {
        let session = SearchSession::new(ScriptedClient::new(vec![Scripted::Ready(Ok(vec![
            result("Bravo", "Zoe"),
            result("alpha", "Ann"),
        ]))]));

        assert!(completed_search(&session, "test").await);

        match session.current_state().await {
            SearchState::Results(list) => {
                let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["alpha", "Bravo"]);
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_success_becomes_no_results() {
        let session =
            SearchSession::new(ScriptedClient::new(vec![Scripted::Ready(Ok(vec![]))]));

        assert!(completed_search(&session, "zzzz").await);

        assert_eq!(session.current_state().await, SearchState::NoResults);
    }

    #[tokio::test]
    async fn failure_reverts_to_not_searched_and_reports_it() {
        let session = SearchSession::new(ScriptedClient::new(vec![Scripted::Ready(Err(
            anyhow!("connection refused"),
        ))]));

        assert!(!completed_search(&session, "anything").await);

        assert_eq!(session.current_state().await, SearchState::NotSearchedYet);
    }

    #[tokio::test]
    async fn failure_preserves_previous_results() {
        let session = SearchSession::new(ScriptedClient::new(vec![
            Scripted::Ready(Ok(vec![result("Keeper", "Kay")])),
            Scripted::Ready(Err(anyhow!("timed out"))),
        ]));

        assert!(completed_search(&session, "first").await);
        let settled = session.current_state().await;
        assert_eq!(settled.result_count(), 1);

        assert!(!completed_search(&session, "second").await);

        assert_eq!(session.current_state().await, settled);
    }

    #[tokio::test]
    async fn superseded_search_never_mutates_state_or_fires_callback() {
        let (slow_gate, slow_rx) = oneshot::channel();
        let session = SearchSession::new(ScriptedClient::new(vec![
            Scripted::Gated(slow_rx),
            Scripted::Ready(Ok(vec![result("dog", "Dee")])),
        ]));

        let stale_fired = Arc::new(AtomicBool::new(false));
        let stale_flag = Arc::clone(&stale_fired);
        session
            .start_search("cat", Category::All, move |_| {
                stale_flag.store(true, Ordering::SeqCst);
            })
            .await;
        settle().await;

        assert!(completed_search(&session, "dog").await);

        // Let the first request's response through after the fact; whether
        // its task was aborted or merely outdated, it must change nothing.
        let _ = slow_gate.send(Ok(vec![result("cat", "Cee")]));
        settle().await;

        match session.current_state().await {
            SearchState::Results(list) => assert_eq!(list[0].name, "dog"),
            other => panic!("expected dog results, got {other:?}"),
        }
        assert!(!stale_fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn rapid_resubmission_keeps_loading_as_reversion_source_intact() {
        // First search settles into results; two quick re-searches follow,
        // the earlier one superseded while still loading, the later one
        // failing. The failure must revert to the settled results, not to
        // the superseded search's loading state.
        let (gate, gated_rx) = oneshot::channel();
        let session = SearchSession::new(ScriptedClient::new(vec![
            Scripted::Ready(Ok(vec![result("Settled", "Sam")])),
            Scripted::Gated(gated_rx),
            Scripted::Ready(Err(anyhow!("server error"))),
        ]));

        assert!(completed_search(&session, "one").await);
        let settled = session.current_state().await;

        session.start_search("two", Category::All, |_| {}).await;
        settle().await;
        assert!(!completed_search(&session, "three").await);
        drop(gate);

        assert_eq!(session.current_state().await, settled);
    }

    #[test]
    fn results_cannot_be_constructed_empty() {
        assert_eq!(SearchState::from_results(vec![]), SearchState::NoResults);
        assert_eq!(
            SearchState::from_results(vec![result("only", "one")]).result_count(),
            1
        );
    }
}
