//! Renice Medical Centre site server
//!
//! Serves the single-page site and runs the Health AI chat assistant.

mod api;
mod assistant;
mod content;
mod llm;
mod runtime;
mod state_machine;
mod system_prompt;

use api::{create_router, AppState};
use assistant::{AssistantGateway, ASSISTANT_MODEL};
use llm::LlmConfig;
use runtime::SessionManager;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "renice_site=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("RENICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let session_idle = std::env::var("RENICE_SESSION_IDLE_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map_or(Duration::from_secs(1800), Duration::from_secs);

    // Initialize the assistant
    let llm_config = LlmConfig::from_env();
    if llm_config.has_api_key() {
        tracing::info!(
            model = ASSISTANT_MODEL,
            timeout_secs = llm_config.timeout().as_secs(),
            gateway = llm_config.gateway.as_deref().unwrap_or("default"),
            "Assistant initialized"
        );
    } else {
        tracing::warn!("No API key configured. Set API_KEY; the assistant will reply with the fallback message.");
    }
    let llm = llm::build_service(&llm_config, ASSISTANT_MODEL)?;
    let assistant = Arc::new(AssistantGateway::new(llm));
    tracing::debug!(model = %assistant.model_id(), "Assistant gateway ready");

    // Sessions live for one page visit; abandoned ones are swept
    let sessions = Arc::new(SessionManager::new(assistant));
    spawn_idle_sweeper(sessions.clone(), session_idle);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(AppState::new(sessions))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Renice site listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn spawn_idle_sweeper(sessions: Arc<SessionManager>, max_idle: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sessions.sweep_idle(max_idle).await;
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
