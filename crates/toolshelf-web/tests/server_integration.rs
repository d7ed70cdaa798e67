//! Integration tests for the toolshelf web server.
//!
//! These tests start a real axum server on a random port, backed by an
//! in-memory store, and exercise the HTML pages and JSON API.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use toolshelf::{MemoryStore, StoreError, StoreFuture, Tool, ToolQuery, ToolStore};
use toolshelf_web::{AppState, WebConfig, spawn_web};

fn tool(id: &str, name: &str, category: &str, featured: bool, day: u32) -> Tool {
    Tool {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} for teams"),
        logo_url: String::new(),
        website_url: format!("https://{id}.example"),
        category: category.to_string(),
        pricing_model: "subscription".to_string(),
        starting_price: "$10/mo".to_string(),
        features: vec!["Fast".to_string()],
        integrations: vec![],
        affiliate_link: None,
        featured,
        created_at: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
    }
}

fn collection() -> Vec<Tool> {
    let mut acme = tool("acme", "Acme CRM", "sales-marketing", true, 2);
    acme.affiliate_link = Some("https://aff.example/x".to_string());
    vec![
        tool("devbot", "DevBot", "development", false, 1),
        acme,
        tool("notely", "Notely", "productivity", false, 3),
    ]
}

/// Store that fails every query.
struct DownStore;

impl ToolStore for DownStore {
    fn execute<'a>(&'a self, _query: &'a ToolQuery) -> StoreFuture<'a, Vec<Tool>> {
        Box::pin(async {
            Err(StoreError::Http {
                status: 503,
                code: None,
                message: "connection pool exhausted".to_string(),
            })
        })
    }
}

/// Helper: spawn a test server on port 0 (random available port).
async fn spawn_test_server(store: Arc<dyn ToolStore>) -> String {
    let config = WebConfig {
        bind_addr: ([127, 0, 0, 1], 0).into(),
        ..Default::default()
    };
    let addr = spawn_web(AppState::new(store), config).await.unwrap();
    format!("http://{addr}")
}

async fn memory_server() -> String {
    spawn_test_server(Arc::new(MemoryStore::new(collection()))).await
}

async fn get_text(url: &str) -> (u16, String) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

// ── JSON API ─────────────────────────────────────────────────────────

#[tokio::test]
async fn api_lists_featured_first_then_newest() {
    let base = memory_server().await;

    let json: serde_json::Value = reqwest::get(format!("{base}/api/tools"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["state"], "tools");
    let names: Vec<&str> = json["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Acme CRM", "Notely", "DevBot"]);
}

#[tokio::test]
async fn api_filters_by_category_and_query() {
    let base = memory_server().await;

    let json: serde_json::Value = reqwest::get(format!("{base}/api/tools?category=all&q=BOT"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["tools"].as_array().unwrap().len(), 1);
    assert_eq!(json["tools"][0]["name"], "DevBot");

    let json: serde_json::Value =
        reqwest::get(format!("{base}/api/tools?category=sales-marketing"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    assert_eq!(json["tools"][0]["name"], "Acme CRM");
}

#[tokio::test]
async fn api_empty_result_is_a_state_not_an_error() {
    let base = memory_server().await;

    let resp = reqwest::get(format!("{base}/api/tools?category=customer-service"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json, serde_json::json!({"state": "empty"}));
}

#[tokio::test]
async fn api_get_tool_and_not_found() {
    let base = memory_server().await;

    let resp = reqwest::get(format!("{base}/api/tools/acme")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["name"], "Acme CRM");
    assert_eq!(json["affiliate_link"], "https://aff.example/x");

    let resp = reqwest::get(format!("{base}/api/tools/nope")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "Tool not found");
}

#[tokio::test]
async fn api_categories_and_health() {
    let base = memory_server().await;

    let json: serde_json::Value = reqwest::get(format!("{base}/api/categories"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json.as_array().unwrap().len(), 5);
    assert_eq!(json[0]["slug"], "sales-marketing");

    let json: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["status"], "ok");
}

// ── HTML pages ───────────────────────────────────────────────────────

#[tokio::test]
async fn listing_page_renders_cards_and_controls() {
    let base = memory_server().await;

    let (status, html) = get_text(&format!("{base}/")).await;
    assert_eq!(status, 200);
    assert!(html.contains("Find Your Perfect SaaS Tool"));
    assert_eq!(html.matches("<article").count(), 3);
    assert!(html.contains(r#"<a href="/tools/devbot">DevBot</a>"#));
    // Affiliate link replaces the website for outbound clicks.
    assert!(html.contains(r#"href="https://aff.example/x" target="_blank" rel="noopener noreferrer""#));
    assert!(html.contains(r#"href="https://devbot.example" target="_blank" rel="noopener noreferrer""#));
}

#[tokio::test]
async fn listing_page_applies_filters_and_keeps_inputs() {
    let base = memory_server().await;

    let (_, html) = get_text(&format!("{base}/?category=development&q=dev")).await;
    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains("DevBot"));
    assert!(html.contains(r#"<option value="development" selected>"#));
    assert!(html.contains(r#"value="dev""#));
}

#[tokio::test]
async fn listing_page_shows_no_tools_found() {
    let base = memory_server().await;

    let (status, html) = get_text(&format!("{base}/?category=customer-service")).await;
    assert_eq!(status, 200);
    assert!(html.contains("No tools found."));
    assert!(!html.contains(r#"class="spinner""#));
}

#[tokio::test]
async fn detail_page_renders_tool() {
    let base = memory_server().await;

    let (status, html) = get_text(&format!("{base}/tools/acme")).await;
    assert_eq!(status, 200);
    assert!(html.contains("<h1>Acme CRM"));
    assert!(html.contains("Featured"));
    assert!(html.contains("Key Features"));
    assert!(html.contains("Sales &amp; Marketing"));
    assert!(html.contains(r#"href="https://aff.example/x" target="_blank" rel="noopener noreferrer" class="btn block""#));
}

#[tokio::test]
async fn detail_page_unknown_id_is_not_found() {
    let base = memory_server().await;

    let (status, html) = get_text(&format!("{base}/tools/does-not-exist")).await;
    assert_eq!(status, 404);
    assert!(html.contains("Tool not found"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = memory_server().await;

    let (status, _) = get_text(&format!("{base}/no/such/page")).await;
    assert_eq!(status, 404);
}

// ── Degraded store ───────────────────────────────────────────────────

#[tokio::test]
async fn failed_listing_fetch_renders_empty_state() {
    let base = spawn_test_server(Arc::new(DownStore)).await;

    let (status, html) = get_text(&format!("{base}/")).await;
    assert_eq!(status, 200);
    assert!(html.contains("No tools found."));
    assert!(!html.contains("connection pool exhausted"));

    let json: serde_json::Value = reqwest::get(format!("{base}/api/tools"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["state"], "empty");
}

#[tokio::test]
async fn failed_detail_fetch_is_generic_failure() {
    let base = spawn_test_server(Arc::new(DownStore)).await;

    let (status, html) = get_text(&format!("{base}/tools/acme")).await;
    assert_eq!(status, 502);
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("connection pool exhausted"));

    let resp = reqwest::get(format!("{base}/api/tools/acme")).await.unwrap();
    assert_eq!(resp.status(), 502);
}
