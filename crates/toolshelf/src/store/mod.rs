//! Remote Tool Store query surface.
//!
//! A [`ToolQuery`] describes a read against the `tools` table: which columns
//! to select, equality filters, and ordering. A [`ToolStore`] executes it.
//!
//! - [`postgrest`]: HTTP client for a hosted PostgREST endpoint (Supabase).
//! - [`memory`]: in-memory store that interprets queries over a fixed
//!   collection. Used by tests and the `--fixtures` server mode.
//!
//! Stores are constructed explicitly and passed in as `Arc<dyn ToolStore>`;
//! there is no process-wide client.

pub mod memory;
pub mod postgrest;

pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::tool::Tool;

/// Boxed future returned by [`ToolStore::execute`].
pub type StoreFuture<'a, T> = BoxFuture<'a, Result<T, StoreError>>;

/// PostgREST error code for "invalid text representation" (e.g. a non-UUID
/// value compared against a UUID column).
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Errors from executing a store query.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status.
    #[error("store HTTP {status}: {message}")]
    Http {
        status: u16,
        /// PostgREST / Postgres error code, when the body carried one.
        code: Option<String>,
        message: String,
    },
    /// The response body was not a list of tool rows.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the store rejected a filter value as malformed for its column.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, StoreError::Http { code: Some(code), .. } if code == INVALID_TEXT_REPRESENTATION)
    }
}

/// Sort direction for an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// One `order` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// A read-only query against the tools table.
///
/// Mirrors the store's builder: `select(columns)`, zero or more `eq`
/// filters, zero or more `order` clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolQuery {
    pub columns: String,
    pub filters: Vec<(String, String)>,
    pub order: Vec<OrderBy>,
}

impl ToolQuery {
    /// Start a query selecting `columns` (`"*"` for all).
    pub fn select(columns: impl Into<String>) -> Self {
        Self {
            columns: columns.into(),
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Keep only rows where `column` equals `value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    /// Append an ordering clause. Earlier clauses take precedence.
    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order.push(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    /// Every tool, featured first, newest first within each group.
    pub fn listing() -> Self {
        Self::select("*")
            .order("featured", Direction::Descending)
            .order("created_at", Direction::Descending)
    }

    /// The tool with the given identifier.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::select("*").eq("id", id)
    }
}

/// Read access to the tools table.
pub trait ToolStore: Send + Sync {
    /// Execute `query` and return the matching rows in store order.
    fn execute<'a>(&'a self, query: &'a ToolQuery) -> StoreFuture<'a, Vec<Tool>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_orders_featured_then_newest() {
        let q = ToolQuery::listing();
        assert_eq!(q.columns, "*");
        assert!(q.filters.is_empty());
        assert_eq!(
            q.order,
            vec![
                OrderBy {
                    column: "featured".into(),
                    direction: Direction::Descending,
                },
                OrderBy {
                    column: "created_at".into(),
                    direction: Direction::Descending,
                },
            ]
        );
    }

    #[test]
    fn by_id_query_filters_on_id() {
        let q = ToolQuery::by_id("abc");
        assert_eq!(q.filters, vec![("id".to_string(), "abc".to_string())]);
        assert!(q.order.is_empty());
    }

    #[test]
    fn invalid_value_detection() {
        let err = StoreError::Http {
            status: 400,
            code: Some("22P02".into()),
            message: "invalid input syntax for type uuid".into(),
        };
        assert!(err.is_invalid_value());

        let other = StoreError::Http {
            status: 401,
            code: None,
            message: "unauthorized".into(),
        };
        assert!(!other.is_invalid_value());
    }
}
