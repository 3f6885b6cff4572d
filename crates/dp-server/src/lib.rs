//! HTTP server for Downpatch.
//!
//! This crate provides a native Rust HTTP server using axum, serving
//! `GET /sitemap.xml` for the guide section of a content directory.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use dp_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         source_dir: PathBuf::from("content"),
//!         base_url: None,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Crawler ──HTTP──► axum server (dp-server)
//!                        │
//!                        └─► GET /sitemap.xml
//!                                │
//!                                └─► dp_sitemap::generate
//!                                        │
//!                                        └─► FsContent (index + pages)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use dp_content_fs::FsContent;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content source directory.
    pub source_dir: PathBuf,
    /// Public base URL (`None` derives it from each request).
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from("content"),
            base_url: None,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Shared filesystem backend serves as both index and renderer
    let content = Arc::new(FsContent::new(config.source_dir.clone()));

    let fallback_host = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState {
        index: Arc::clone(&content) as Arc<dyn dp_content::ContentIndex>,
        renderer: content,
        base_url: config
            .base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_owned()),
        fallback_host,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, source_dir = %config.source_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Downpatch config.
///
/// # Arguments
///
/// * `config` - Downpatch configuration
#[must_use]
pub fn server_config_from_config(config: &dp_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.content_resolved.source_dir.clone(),
        base_url: config.base_url().map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use dp_config::{CliSettings, Config};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("downpatch.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 8081\n\n[site]\nbase_url = \"https://docs.example.com/\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), Some(&CliSettings::default())).unwrap();
        let server = server_config_from_config(&config);

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8081);
        assert_eq!(server.source_dir, temp_dir.path().join("content"));
        assert_eq!(server.base_url.as_deref(), Some("https://docs.example.com"));
    }
}
