//! HTTP client for a hosted PostgREST endpoint.
//!
//! Translates a [`ToolQuery`] into PostgREST query parameters:
//!
//! ```text
//! select("*").eq("id", "42").order("featured", desc)
//!   → GET {url}/rest/v1/tools?select=*&id=eq.42&order=featured.desc
//! ```
//!
//! Single attempt per call: no retries.

use std::time::Instant;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, trace};

use super::{StoreError, StoreFuture, ToolQuery, ToolStore};
use crate::config::{ConfigError, StoreConfig, URL_VAR};
use crate::tool::Tool;

/// Error body returned by PostgREST on non-2xx responses.
#[derive(Deserialize, Debug)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Async client for the `tools` table behind a PostgREST endpoint.
pub struct PostgrestStore {
    client: reqwest::Client,
    endpoint: Url,
    anon_key: String,
}

impl PostgrestStore {
    /// Build a client from connection settings.
    pub fn new(config: &StoreConfig) -> Result<Self, ConfigError> {
        let raw = format!(
            "{}/rest/v1/{}",
            config.url.trim_end_matches('/'),
            config.table
        );
        let endpoint = Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
            var: URL_VAR,
            value: config.url.clone(),
        })?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "toolshelf/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            anon_key: config.anon_key.clone(),
        })
    }

    /// The full request URL for `query`.
    pub fn request_url(&self, query: &ToolQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", &query.columns);
            for (column, value) in &query.filters {
                pairs.append_pair(column, &format!("eq.{value}"));
            }
            if !query.order.is_empty() {
                let order = query
                    .order
                    .iter()
                    .map(|o| format!("{}.{}", o.column, o.direction.as_str()))
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.append_pair("order", &order);
            }
        }
        url
    }

    async fn fetch(&self, query: &ToolQuery) -> Result<Vec<Tool>, StoreError> {
        let url = self.request_url(query);
        debug!("Store request: {}", url);
        let start = Instant::now();

        let resp = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(
            "Store response: HTTP {} in {:.1}ms ({} bytes)",
            status,
            start.elapsed().as_secs_f64() * 1000.0,
            text.len()
        );

        if !status.is_success() {
            return Err(http_error(status.as_u16(), &text));
        }

        let rows: Vec<Tool> = serde_json::from_str(&text)?;
        trace!("Decoded {} tool row(s)", rows.len());
        Ok(rows)
    }
}

impl ToolStore for PostgrestStore {
    fn execute<'a>(&'a self, query: &'a ToolQuery) -> StoreFuture<'a, Vec<Tool>> {
        Box::pin(self.fetch(query))
    }
}

/// Convert a non-success response into a [`StoreError::Http`].
fn http_error(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(parsed) => StoreError::Http {
            status,
            code: parsed.code,
            message: parsed.message.unwrap_or_else(|| body.to_string()),
        },
        Err(_) => StoreError::Http {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}
