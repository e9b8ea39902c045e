//! MCP server initialization for stdio and Streamable HTTP transports.
//!
//! Provides [`serve_stdio`] and [`serve_http`] entry points that wire up the
//! timeline store and MCP tool handler into a running server.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use rmcp::ServiceExt;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;
use crate::tools::LifelogTools;

/// Shared setup: open the store once and wrap it for the tool handler.
fn setup_shared_state(
    config: LifelogConfig,
) -> Result<(Arc<Mutex<TimelineStore>>, Arc<LifelogConfig>)> {
    let db_path = config.resolved_db_path();
    let store = TimelineStore::open(&db_path)?;
    tracing::info!(db = %db_path.display(), "timeline store ready");

    Ok((Arc::new(Mutex::new(store)), Arc::new(config)))
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: LifelogConfig) -> Result<()> {
    tracing::info!("starting lifelog MCP server on stdio");

    let (store, config) = setup_shared_state(config)?;

    let tools = LifelogTools::new(store, config);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport.
pub async fn serve_http(config: LifelogConfig) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let bind_addr = format!("{host}:{port}");

    tracing::info!(addr = %bind_addr, "starting lifelog MCP server on HTTP");

    let (store, config) = setup_shared_state(config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(LifelogTools::new(store.clone(), config.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
