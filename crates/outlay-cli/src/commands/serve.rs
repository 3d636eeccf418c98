//! Server command implementation

use std::path::Path;

use anyhow::Result;

use outlay_core::{SettingsStore, Store};
use outlay_server::ServerConfig;

use super::load_catalog;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    catalog_path: Option<&Path>,
    static_dir: Option<&Path>,
    cors_origins: Vec<String>,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    println!("🚀 Starting Outlay web server...");
    println!("   Catalog: {} products", catalog.len());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !cors_origins.is_empty() {
        println!("   CORS origins: {}", cors_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = ServerConfig {
        allowed_origins: cors_origins,
    };
    let static_dir_str =
        static_dir.map(|p| p.to_str().expect("static_dir path must be valid UTF-8"));

    outlay_server::serve(
        Store::new(),
        catalog,
        SettingsStore::new(),
        host,
        port,
        static_dir_str,
        config,
    )
    .await?;

    Ok(())
}
