//! Local web server for the observatory dashboard.
//!
//! Serves a single page with a Plotly sunburst of the class hierarchy next
//! to a class dropdown. Picking a class swaps in its pre-rendered
//! property-combination plot from the assets directory.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `templates` - HTML/CSS/JS template rendering

mod handlers;
mod models;
mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use observatory_core::config::ASSETS_ROUTE;
use observatory_core::{Config, Dashboard};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
///
/// The dashboard is built before the server starts and never changes, so
/// handlers read it without locking.
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the dashboard server.
pub struct ServeConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to open the browser automatically.
    pub open_browser: bool,
    /// Static assets directory, mounted under `/assets`.
    pub assets_dir: PathBuf,
    /// Everything needed to build the dashboard.
    pub config: Config,
}

impl From<Config> for ServeConfig {
    fn from(config: Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            open_browser: config.server.open_browser,
            assets_dir: PathBuf::from(&config.assets.dir),
            config,
        }
    }
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Build the router for an initialized dashboard.
pub fn router(dashboard: Arc<Dashboard>, assets_dir: PathBuf) -> Router {
    let state = Arc::new(AppState { dashboard });

    Router::new()
        // Main page - sunburst and plot viewer
        .route("/", get(handlers::index))
        // API endpoints
        .route("/api/chart", get(handlers::api_chart))
        .route("/api/classes", get(handlers::api_classes))
        .route("/api/selection", get(handlers::api_selection))
        // Plot images and other static files
        .nest_service(&format!("/{}", ASSETS_ROUTE), ServeDir::new(assets_dir))
        // CORS for API access
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Start the dashboard server.
///
/// The hierarchy is loaded and assembled before binding; a bad input file
/// stops startup here.
pub async fn start_server(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Arc::new(Dashboard::init(&config.config)?);

    if !config.assets_dir.is_dir() {
        warn!(dir = %config.assets_dir.display(), "assets directory not found, plots will not load");
    }

    let app = router(dashboard, config.assets_dir.clone());

    let host: std::net::IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((host, config.port));
    let url = format!("http://{}", addr);

    info!(%url, "starting observatory dashboard (Ctrl+C to stop)");

    // Open browser if requested
    if config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "could not open browser");
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
