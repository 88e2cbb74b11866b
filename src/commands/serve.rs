//! Graph API server
//! Usage: loomviz serve [--host <addr>] [--port <port>]

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::store::GraphStore;
use crate::{server, LOGO};

/// Run the HTTP API in the foreground until interrupted.
pub fn execute(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("{LOGO}");
    println!();
    println!("graph API listening on http://{host}:{port}");

    let store = GraphStore::new();
    actix_web::rt::System::new()
        .block_on(server::run(&host, port, store))
        .context("graph API server terminated unexpectedly")
}
