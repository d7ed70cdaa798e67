//! In-memory [`ToolStore`] that interprets queries over a fixed collection.

use std::cmp::Ordering;
use std::path::Path;

use futures::FutureExt;

use super::{Direction, StoreError, StoreFuture, ToolQuery, ToolStore};
use crate::config::ConfigError;
use crate::tool::Tool;

/// Postgres error code for a reference to an unknown column.
const UNDEFINED_COLUMN: &str = "42703";

/// Columns that support `eq` filters.
const FILTER_COLUMNS: &[&str] = &["id", "name", "category", "pricing_model"];

/// A fixed collection of tools answering the same queries as the hosted store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tools: Vec<Tool>,
}

impl MemoryStore {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Load a JSON array of tool rows, in the same shape the hosted store returns.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tools: Vec<Tool> =
            serde_json::from_str(&text).map_err(|source| ConfigError::FixtureParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(tools))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn run(&self, query: &ToolQuery) -> Result<Vec<Tool>, StoreError> {
        for (column, _) in &query.filters {
            if !FILTER_COLUMNS.contains(&column.as_str()) {
                return Err(undefined_column(column));
            }
        }
        for clause in &query.order {
            if !matches!(
                clause.column.as_str(),
                "featured" | "created_at" | "name" | "category"
            ) {
                return Err(undefined_column(&clause.column));
            }
        }

        let mut rows: Vec<Tool> = self
            .tools
            .iter()
            .filter(|tool| {
                query
                    .filters
                    .iter()
                    .all(|(column, value)| column_text(tool, column) == Some(value.as_str()))
            })
            .cloned()
            .collect();

        // `sort_by` is stable, so unordered columns keep insertion order.
        rows.sort_by(|a, b| {
            query
                .order
                .iter()
                .map(|clause| {
                    let ord = compare_column(a, b, &clause.column);
                    match clause.direction {
                        Direction::Ascending => ord,
                        Direction::Descending => ord.reverse(),
                    }
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        Ok(rows)
    }
}

impl ToolStore for MemoryStore {
    fn execute<'a>(&'a self, query: &'a ToolQuery) -> StoreFuture<'a, Vec<Tool>> {
        futures::future::ready(self.run(query)).boxed()
    }
}

fn undefined_column(column: &str) -> StoreError {
    StoreError::Http {
        status: 400,
        code: Some(UNDEFINED_COLUMN.to_string()),
        message: format!("column tools.{column} does not exist"),
    }
}

fn column_text<'t>(tool: &'t Tool, column: &str) -> Option<&'t str> {
    match column {
        "id" => Some(&tool.id),
        "name" => Some(&tool.name),
        "category" => Some(&tool.category),
        "pricing_model" => Some(&tool.pricing_model),
        _ => None,
    }
}

fn compare_column(a: &Tool, b: &Tool, column: &str) -> Ordering {
    match column {
        "featured" => a.featured.cmp(&b.featured),
        "created_at" => a.created_at.cmp(&b.created_at),
        "name" => a.name.cmp(&b.name),
        "category" => a.category.cmp(&b.category),
        _ => Ordering::Equal,
    }
}
