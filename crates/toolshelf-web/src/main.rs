//! SaaS tool directory server.
//!
//! Reads store credentials from `SUPABASE_URL` and `SUPABASE_ANON_KEY`, or
//! serves a local JSON file with `--fixtures`.
//!
//! # Usage
//!
//! ```bash
//! SUPABASE_URL=https://xyz.supabase.co SUPABASE_ANON_KEY=... cargo run -p toolshelf-web
//! cargo run -p toolshelf-web -- --fixtures demos/tools.json --bind 0.0.0.0:8080
//! RUST_LOG=toolshelf=debug cargo run -p toolshelf-web -- --fixtures demos/tools.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use toolshelf::{MemoryStore, PostgrestStore, StoreConfig, ToolStore};
use toolshelf_web::{AppState, WebConfig, serve_web};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SaaS tool directory server.
#[derive(Parser)]
#[command(name = "toolshelf-web")]
#[command(about = "Serve the SaaS tool directory")]
#[command(version)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:3001")]
    bind: SocketAddr,

    /// Directory of static assets served for unmatched paths.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Serve tools from a JSON file instead of the hosted store.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Per-request timeout for the hosted store. Unset waits indefinitely.
    #[arg(long)]
    store_timeout_secs: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_store(args: &Args) -> Result<Arc<dyn ToolStore>, String> {
    if let Some(path) = &args.fixtures {
        let store = MemoryStore::from_json_file(path).map_err(|e| e.to_string())?;
        info!("Serving {} tool(s) from {}", store.len(), path.display());
        return Ok(Arc::new(store));
    }

    let mut config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(secs) = args.store_timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let store = PostgrestStore::new(&config).map_err(|e| e.to_string())?;
    info!("Using store {} (table {})", config.url, config.table);
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .init();

    let store = build_store(&args)?;
    let config = WebConfig {
        bind_addr: args.bind,
        static_dir: args.static_dir.clone(),
    };

    serve_web(AppState::new(store), config)
        .await
        .map_err(|e| format!("server failed: {e}"))
}
