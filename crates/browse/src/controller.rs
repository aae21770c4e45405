//! The browse controller: filter mutations in, view states out.
//!
//! [`BrowseController`] is the single owner of one view's
//! `FilterState` + `Pagination` pair. Every mutation derives a fresh
//! query, stamps it with a monotonically increasing request token, and
//! dispatches it: immediately for category/pagination changes, after a
//! quiet period for free-text search. A response is applied only when
//! its token still equals the most recently issued one; anything older
//! is dropped silently, so the view can never regress to results for a
//! search the user has since changed.
//!
//! Cancellation is purely logical: stale in-flight requests are ignored
//! rather than aborted, which is sufficient for correctness.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use bbsr_core::display::{normalize_page, CuratedImages};
use bbsr_core::filter::{DispatchMode, FilterState};
use bbsr_core::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use bbsr_core::source::{AttractionQuery, AttractionSource};
use bbsr_core::types::RequestToken;
use bbsr_core::CoreError;

use crate::bus::ViewBus;
use crate::session::SessionStore;
use crate::view::{ViewState, ViewStatus, MSG_FETCH_FAILED};

/// Default quiet period between the last keystroke and the search fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Construction options for [`BrowseController`].
pub struct BrowseOptions {
    /// Items per page.
    pub page_size: u32,
    /// Quiet period for debounced search dispatch.
    pub debounce: Duration,
    /// Curated image overrides applied during normalization.
    pub curated: CuratedImages,
    /// Optional session persistence for page / dark-mode scalars.
    pub session: Option<SessionStore>,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            curated: CuratedImages::empty(),
            session: None,
        }
    }
}

/// State guarded by the controller's mutex.
///
/// The lock is only ever held for short, non-async critical sections.
struct Inner {
    filter: FilterState,
    pagination: Pagination,
    last_view: ViewState,
}

/// Everything shared between the controller handle and its fetch tasks.
struct Shared {
    inner: Mutex<Inner>,
    source: Arc<dyn AttractionSource>,
    bus: ViewBus,
    /// Token of the most recently dispatched query. Responses carrying
    /// an older token are discarded on arrival.
    active_token: AtomicU64,
    /// Cancellation handle for the one scheduled-but-unfired debounce
    /// task. Swapped atomically on every new dispatch.
    pending: Mutex<CancellationToken>,
    debounce: Duration,
    page_size: u32,
    curated: CuratedImages,
    session: Option<SessionStore>,
}

/// Debounced query dispatcher for one browse view instance.
///
/// Cheap to clone; all clones share the same state and bus.
#[derive(Clone)]
pub struct BrowseController {
    shared: Arc<Shared>,
}

impl BrowseController {
    /// Create a controller over the given source.
    ///
    /// When a session store is supplied, the last-viewed page is
    /// restored from it (defaulting to 1 if absent or unparsable).
    pub fn new(source: Arc<dyn AttractionSource>, options: BrowseOptions) -> Self {
        let mut pagination = Pagination::new(options.page_size);
        if let Some(session) = &options.session {
            pagination.restore_page(session.load().last_page);
        }

        let last_view = ViewState::initial(pagination.current_page());

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    filter: FilterState::new(),
                    pagination,
                    last_view,
                }),
                source,
                bus: ViewBus::default(),
                active_token: AtomicU64::new(0),
                pending: Mutex::new(CancellationToken::new()),
                debounce: options.debounce,
                page_size: options.page_size,
                curated: options.curated,
                session: options.session,
            }),
        }
    }

    /// Subscribe to view-state snapshots.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ViewState> {
        self.shared.bus.subscribe()
    }

    /// The most recently published view state.
    pub fn current_state(&self) -> ViewState {
        self.shared.inner.lock().unwrap().last_view.clone()
    }

    // ---- filter mutations ----

    /// Select a category. Clears any free-text search, resets to page 1,
    /// and dispatches immediately.
    pub fn set_category(&self, value: &str) {
        let mode = self.mutate_filter(|filter| filter.set_category(value).dispatch);
        self.dispatch(mode);
    }

    /// Update the free-text search. Non-empty input clears the category;
    /// the fetch fires after the quiet period, and any previously
    /// scheduled-but-unfired fetch is cancelled.
    pub fn set_search_text(&self, value: &str) {
        let mode = self.mutate_filter(|filter| filter.set_search_text(value).dispatch);
        self.dispatch(mode);
    }

    /// Remove the category facet and dispatch immediately.
    pub fn clear_category(&self) {
        let mode = self.mutate_filter(|filter| filter.clear_category().dispatch);
        self.dispatch(mode);
    }

    /// Remove the free-text search and dispatch immediately.
    pub fn clear_search(&self) {
        let mode = self.mutate_filter(|filter| filter.clear_search().dispatch);
        self.dispatch(mode);
    }

    /// Reset every filter to defaults and dispatch immediately.
    pub fn clear_all(&self) {
        let mode = self.mutate_filter(|filter| filter.clear_all().dispatch);
        self.dispatch(mode);
    }

    // ---- pagination ----

    /// Navigate to page `n`.
    ///
    /// Out-of-range targets are rejected with the state unchanged and no
    /// fetch. A valid navigation persists the page and triggers exactly
    /// one immediate fetch; renderers scroll to the top on the resulting
    /// snapshot.
    pub fn go_to_page(&self, n: u32) -> Result<(), CoreError> {
        {
            let mut inner = self.shared.inner.lock().unwrap();
            inner.pagination.go_to_page(n)?;
        }
        self.shared.persist_page(n);
        self.dispatch(DispatchMode::Immediate);
        Ok(())
    }

    /// Re-run the current query immediately (e.g. after a failure).
    pub fn refresh(&self) {
        self.dispatch(DispatchMode::Immediate);
    }

    // ---- session scalars ----

    /// Persist the dark-mode preference, when a session store exists.
    pub fn set_dark_mode(&self, on: bool) {
        if let Some(session) = &self.shared.session {
            if let Err(e) = session.save_dark_mode(on) {
                tracing::warn!(error = %e, "Failed to persist dark mode");
            }
        }
    }

    /// The persisted dark-mode preference (false without a store).
    pub fn dark_mode(&self) -> bool {
        self.shared
            .session
            .as_ref()
            .map(|s| s.load().dark_mode)
            .unwrap_or(false)
    }

    // ---- private helpers ----

    /// Apply a filter mutation; every filter change resets to page 1
    /// and persists it.
    fn mutate_filter(&self, mutate: impl FnOnce(&mut FilterState) -> DispatchMode) -> DispatchMode {
        let mode = {
            let mut inner = self.shared.inner.lock().unwrap();
            let mode = mutate(&mut inner.filter);
            inner.pagination.reset_to_first_page();
            mode
        };
        self.shared.persist_page(1);
        mode
    }

    /// Issue a new request token, cancel any pending debounce, publish a
    /// `Loading` snapshot, and spawn the fetch task.
    fn dispatch(&self, mode: DispatchMode) {
        let shared = &self.shared;
        let token = shared.active_token.fetch_add(1, Ordering::SeqCst) + 1;

        // Swap in a fresh cancellation token; the previous one covers
        // exactly the scheduled-but-unfired fetch being superseded.
        let cancel = {
            let mut pending = shared.pending.lock().unwrap();
            pending.cancel();
            let fresh = CancellationToken::new();
            *pending = fresh.clone();
            fresh
        };

        let query = {
            let mut inner = shared.inner.lock().unwrap();
            let query = AttractionQuery {
                page: inner.pagination.current_page(),
                page_size: shared.page_size,
                selector: inner.filter.selector(),
            };
            inner.last_view = ViewState {
                records: inner.last_view.records.clone(),
                page: query.page,
                total_pages: inner.pagination.total_pages(),
                status: ViewStatus::Loading,
                filter: inner.filter.clone(),
                fetched_at: inner.last_view.fetched_at,
            };
            shared.bus.publish(inner.last_view.clone());
            query
        };

        tracing::debug!(token, page = query.page, ?mode, "Dispatching query");

        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            if mode == DispatchMode::Debounced {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!(token, "Debounced fetch superseded before firing");
                        return;
                    }
                    _ = tokio::time::sleep(shared.debounce) => {}
                }
            }
            shared.run_fetch(token, query).await;
        });
    }
}

impl Shared {
    /// Execute one fetch and apply the response unless it went stale.
    async fn run_fetch(&self, token: RequestToken, query: AttractionQuery) {
        let result = self.source.fetch_page(&query).await;

        let view = {
            let mut inner = self.inner.lock().unwrap();

            // Staleness check at arrival time: a newer dispatch wins.
            if self.active_token.load(Ordering::SeqCst) != token {
                tracing::debug!(token, "Discarding stale response");
                return;
            }

            match result {
                Ok(page) => {
                    let total_pages = page.resolved_total_pages(self.page_size);
                    inner.pagination.set_total_pages(total_pages);

                    let records = normalize_page(&page.items, &self.curated);
                    let status = if records.is_empty() {
                        ViewStatus::Empty
                    } else {
                        ViewStatus::Ready
                    };

                    inner.last_view = ViewState {
                        records,
                        page: inner.pagination.current_page(),
                        total_pages,
                        status,
                        filter: inner.filter.clone(),
                        fetched_at: Some(chrono::Utc::now()),
                    };
                }
                Err(e) => {
                    tracing::warn!(token, error = %e, "Attraction query failed");
                    inner.pagination.set_total_pages(0);
                    inner.last_view = ViewState {
                        records: Vec::new(),
                        page: inner.pagination.current_page(),
                        total_pages: 0,
                        status: ViewStatus::Failed(MSG_FETCH_FAILED.to_string()),
                        filter: inner.filter.clone(),
                        fetched_at: Some(chrono::Utc::now()),
                    };
                }
            }

            inner.last_view.clone()
        };

        self.bus.publish(view);
    }

    /// Persist the current page, logging (not propagating) any failure.
    fn persist_page(&self, page: u32) {
        if let Some(session) = &self.session {
            if let Err(e) = session.save_last_page(page) {
                tracing::warn!(error = %e, "Failed to persist page");
            }
        }
    }
}
