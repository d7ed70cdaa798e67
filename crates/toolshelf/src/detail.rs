//! Tool Detail Fetch: load exactly one tool by identifier.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, warn};

use crate::freshness::Freshness;
use crate::store::{ToolQuery, ToolStore};
use crate::tool::Tool;

/// State of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// A fetch is outstanding (or none has started).
    Loading,
    Found(Tool),
    /// The store holds no tool with the requested id.
    NotFound,
    /// The fetch failed; the cause was logged.
    Failed,
}

impl DetailState {
    pub fn tool(&self) -> Option<&Tool> {
        match self {
            DetailState::Found(tool) => Some(tool),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct DetailSlot {
    freshness: Freshness,
    state: DetailState,
}

/// Loads a single tool for the detail view.
///
/// Single attempt per call. When navigation issues a newer load before an
/// older one resolves, the older result is discarded.
pub struct DetailLoader {
    store: Arc<dyn ToolStore>,
    slot: Mutex<DetailSlot>,
}

impl DetailLoader {
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self {
            store,
            slot: Mutex::new(DetailSlot {
                freshness: Freshness::new(),
                state: DetailState::Loading,
            }),
        }
    }

    fn slot(&self) -> MutexGuard<'_, DetailSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the tool with `id` and return the resulting state.
    ///
    /// If a newer load has been issued since, this response is dropped and
    /// the current state is returned: the newer result, or `Loading` while
    /// it is still outstanding.
    pub async fn load_by_id(&self, id: &str) -> DetailState {
        let ticket = {
            let mut slot = self.slot();
            slot.state = DetailState::Loading;
            slot.freshness.issue()
        };

        let query = ToolQuery::by_id(id);
        let result = self.store.execute(&query).await;

        let next = match result {
            Ok(mut rows) => match rows.len() {
                0 => DetailState::NotFound,
                1 => DetailState::Found(rows.remove(0)),
                n => {
                    warn!("Tool id {id:?} matched {n} rows");
                    DetailState::Failed
                }
            },
            Err(e) if e.is_invalid_value() => {
                debug!("Store rejected tool id {id:?} as malformed: {e}");
                DetailState::NotFound
            }
            Err(e) => {
                error!("Error fetching tool {id:?}: {e}");
                DetailState::Failed
            }
        };

        // Only the newest navigation may replace the state.
        let mut slot = self.slot();
        if slot.freshness.is_latest(ticket) && slot.freshness.accept(ticket) {
            slot.state = next;
        } else {
            debug!("Discarding stale detail response for {id:?}");
        }
        slot.state.clone()
    }

    /// Current state.
    pub fn state(&self) -> DetailState {
        self.slot().state.clone()
    }
}
