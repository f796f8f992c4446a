//! HTTP front end that serves the dashboard page and its figure data.
//!
//! Tables are loaded once and shared read-only; every request recomputes the
//! aggregates from that shared state.

use crate::pipeline::Dashboard;
use crate::readers::Datasets;
use crate::settings::DashboardSettings;
use crate::writers::HtmlWriter;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};

/// Immutable state shared by every request
pub struct AppState {
    pub datasets: Datasets,
    pub settings: DashboardSettings,
}

pub type SharedState = Arc<AppState>;

pub struct DashboardServer {
    state: SharedState,
    bind_addr: String,
}

impl DashboardServer {
    pub fn new(datasets: Datasets, settings: DashboardSettings, bind_addr: &str) -> Self {
        Self {
            state: Arc::new(AppState { datasets, settings }),
            bind_addr: bind_addr.to_string(),
        }
    }

    /// Serve until the process is interrupted
    pub async fn start(self) -> crate::error::Result<()> {
        let app = build_router(self.state.clone());
        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;

        info!("Serving climate dashboard on http://{}", listener.local_addr()?);
        println!("Dashboard available at http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Dashboard server stopped");
        Ok(())
    }
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/figures", get(dashboard_figures))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

pub async fn health_check() -> &'static str {
    "ok"
}

/// Run the aggregation pass on the blocking pool so request workers stay free
async fn build_dashboard(state: SharedState) -> Result<Dashboard, Response> {
    tokio::task::spawn_blocking(move || Dashboard::build(&state.datasets, &state.settings))
        .await
        .map_err(|e| {
            error!("Dashboard build task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to build dashboard").into_response()
        })
}

pub async fn dashboard_page(State(state): State<SharedState>) -> Response {
    let dashboard = match build_dashboard(state).await {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };

    match HtmlWriter::new().render(&dashboard) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render dashboard: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render dashboard").into_response()
        }
    }
}

pub async fn dashboard_figures(State(state): State<SharedState>) -> Response {
    match build_dashboard(state).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(response) => response,
    }
}
