//! Listing Engine: one bulk fetch per page view, then in-memory filtering.
//!
//! ```text
//! ToolStore ──load_all()──▶ collection ──ListingFilter(category, query)──▶ ListingView
//! ```
//!
//! Filtering is a pure function over the last applied collection. It sits
//! behind [`ListingFilter`] so a server-side filtered query can replace the
//! client-side scan without changing the filter controls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::freshness::Freshness;
use crate::store::{ToolQuery, ToolStore};
use crate::tool::{ALL_CATEGORIES, Tool};

// ── Filter parameters ──────────────────────────────────────────────

/// Category selection. `All` is the `"all"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Slug(String),
}

impl CategoryFilter {
    /// Parse a raw selection. `"all"` and the empty string select everything.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Slug(raw.to_string())
        }
    }

    /// The raw value as submitted by the filter controls.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Slug(slug) => slug,
        }
    }
}

/// Literal values of the filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub category: String,
    #[serde(rename = "q")]
    pub query: String,
}

impl FilterParams {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::parse(&self.category)
    }

    /// Category value to pre-select in the controls.
    pub fn selected_category(&self) -> &str {
        if self.category.is_empty() {
            ALL_CATEGORIES
        } else {
            &self.category
        }
    }
}

// ── Pure filter ────────────────────────────────────────────────────

/// Filter `collection` by category and case-insensitive text query.
///
/// Both filters compose by intersection and preserve relative order. An
/// empty `query` does not filter.
pub fn filter(collection: &[Tool], category: &CategoryFilter, query: &str) -> Vec<Tool> {
    let needle = query.to_lowercase();
    collection
        .iter()
        .filter(|tool| match category {
            CategoryFilter::All => true,
            CategoryFilter::Slug(slug) => tool.category == *slug,
        })
        .filter(|tool| needle.is_empty() || tool.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Strategy that narrows a fetched collection to what the controls select.
pub trait ListingFilter: Send + Sync {
    fn apply(&self, collection: &[Tool], params: &FilterParams) -> Vec<Tool>;
}

/// Linear in-memory scan using [`filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientFilter;

impl ListingFilter for ClientFilter {
    fn apply(&self, collection: &[Tool], params: &FilterParams) -> Vec<Tool> {
        filter(collection, &params.category_filter(), &params.query)
    }
}

// ── View ───────────────────────────────────────────────────────────

/// What the listing page should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingView {
    /// A fetch is outstanding.
    Loading,
    /// Loaded, but nothing survives the filters.
    Empty,
    /// Loaded, with at least one surviving tool.
    Tools { tools: Vec<Tool> },
}

impl ListingView {
    fn from_filtered(tools: Vec<Tool>) -> Self {
        if tools.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Tools { tools }
        }
    }

    /// Surviving tools, empty for `Loading` and `Empty`.
    pub fn tools(&self) -> &[Tool] {
        match self {
            ListingView::Tools { tools } => tools,
            _ => &[],
        }
    }
}

/// How a call to [`ListingEngine::load_all`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The response replaced the collection.
    Applied,
    /// The fetch failed; the collection was left as it was.
    Failed,
    /// A newer load already resolved; the response was discarded.
    Stale,
}

// ── Engine ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ListingState {
    freshness: Freshness,
    tools: Vec<Tool>,
}

/// Fetches the tool collection and computes filtered views of it.
///
/// One engine per page view. State is replaced whole on each applied load;
/// the lock is never held across the store call.
pub struct ListingEngine {
    store: Arc<dyn ToolStore>,
    filter: Arc<dyn ListingFilter>,
    state: Mutex<ListingState>,
}

impl ListingEngine {
    /// Engine using the client-side filter.
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self::with_filter(store, Arc::new(ClientFilter))
    }

    pub fn with_filter(store: Arc<dyn ToolStore>, filter: Arc<dyn ListingFilter>) -> Self {
        Self {
            store,
            filter,
            state: Mutex::new(ListingState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch every tool, featured first then newest first.
    ///
    /// Failures are logged and leave the collection untouched. A response
    /// that resolves after a newer load has been applied is discarded.
    pub async fn load_all(&self) -> LoadStatus {
        let ticket = self.state().freshness.issue();
        debug!("Listing load #{} started", ticket.get());

        let query = ToolQuery::listing();
        let result = self.store.execute(&query).await;

        let mut state = self.state();
        if !state.freshness.accept(ticket) {
            debug!("Discarding stale listing response #{}", ticket.get());
            return LoadStatus::Stale;
        }
        match result {
            Ok(tools) => {
                debug!("Listing load #{} applied {} tool(s)", ticket.get(), tools.len());
                state.tools = tools;
                LoadStatus::Applied
            }
            Err(e) => {
                error!("Error fetching tools: {e}");
                LoadStatus::Failed
            }
        }
    }

    /// Whether a load is outstanding or none has resolved yet.
    pub fn is_loading(&self) -> bool {
        let state = self.state();
        state.freshness.is_pending() || !state.freshness.has_resolved()
    }

    /// Snapshot of the last applied collection.
    pub fn collection(&self) -> Vec<Tool> {
        self.state().tools.clone()
    }

    /// The view for the given control values.
    pub fn view(&self, params: &FilterParams) -> ListingView {
        let state = self.state();
        if state.freshness.is_pending() || !state.freshness.has_resolved() {
            return ListingView::Loading;
        }
        ListingView::from_filtered(self.filter.apply(&state.tools, params))
    }
}
