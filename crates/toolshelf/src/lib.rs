//! Data layer for a SaaS tool directory.
//!
//! `toolshelf` lists SaaS tools held in a hosted PostgREST table (Supabase),
//! filters them by category and free-text search, and loads single tools for
//! a detail page. It has no storage of its own: every page view fetches
//! fresh, read-only copies through a [`ToolStore`].
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use toolshelf::{FilterParams, ListingEngine, PostgrestStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Arc::new(PostgrestStore::new(&config)?);
//!
//! let engine = ListingEngine::new(store);
//! engine.load_all().await;
//! let view = engine.view(&FilterParams::new("development", "bot"));
//! for tool in view.tools() {
//!     println!("{} → {}", tool.name, tool.outbound_url());
//! }
//! ```
//!
//! # Where to find things
//!
//! - **The record:** [`Tool`] and the fixed [`CATEGORIES`] vocabulary.
//! - **Talking to the store:** [`ToolQuery`] describes a read, [`ToolStore`]
//!   executes it. [`PostgrestStore`] is the HTTP client; [`MemoryStore`]
//!   answers the same queries from a fixed collection.
//! - **The listing page:** [`ListingEngine`] (one bulk load, then
//!   [`ListingView`]s per filter change) and the pure [`filter`] function.
//! - **The detail page:** [`DetailLoader`] and [`DetailState`].
//! - **Out-of-order responses:** [`freshness::Freshness`] tickets, used by
//!   both loaders.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tool`] | [`Tool`] record, categories, outbound link selection |
//! | [`store`] | Query surface, PostgREST client, in-memory store |
//! | [`listing`] | Listing engine, filter strategy, listing view |
//! | [`detail`] | Single-tool loader |
//! | [`freshness`] | Request tickets for discarding stale responses |
//! | [`config`] | Store connection settings |

pub mod config;
pub mod detail;
pub mod freshness;
pub mod listing;
pub mod store;
pub mod tool;

pub use config::{ConfigError, StoreConfig};
pub use detail::{DetailLoader, DetailState};
pub use listing::{
    CategoryFilter, ClientFilter, FilterParams, ListingEngine, ListingFilter, ListingView,
    LoadStatus, filter,
};
pub use store::{
    Direction, MemoryStore, PostgrestStore, StoreError, StoreFuture, ToolQuery, ToolStore,
};
pub use tool::{ALL_CATEGORIES, CATEGORIES, Category, Tool, category_by_slug, category_label};
