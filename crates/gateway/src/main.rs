//! Dojo Gateway
//!
//! HTTP front door for the Dojo wisdom corpus.
//! Handles:
//! - Tool listing and dispatch
//! - Search, seed, resource and prompt endpoints
//! - Rate limiting
//! - Observability (logging, metrics)

mod handlers;
mod middleware;
mod tools;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use dojo_common::{
    config::{AppConfig, ObservabilityConfig},
    corpus::Corpus,
    errors::{AppError, Result},
    metrics,
};
use dojo_context::PromptCatalog;
use dojo_search::RelevanceEngine;
use metrics_exporter_prometheus::PrometheusBuilder;
use middleware::rate_limit::{rate_limit_middleware, RateLimit};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{signal, sync::Notify};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub corpus: Arc<Corpus>,
    pub engine: RelevanceEngine,
    pub prompts: Arc<PromptCatalog>,
}

impl AppState {
    pub fn new(config: AppConfig, corpus: Corpus) -> Self {
        let corpus = Arc::new(corpus);
        Self {
            config: Arc::new(config),
            engine: RelevanceEngine::new(corpus.clone()),
            prompts: Arc::new(PromptCatalog::new(corpus.clone())),
            corpus,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Tracing needs the log settings, so load configuration first
    let config = AppConfig::load();
    let observability = config
        .as_ref()
        .map(|c| c.observability.clone())
        .unwrap_or_default();
    init_tracing(&observability);

    info!("Starting Dojo Gateway v{}", dojo_common::VERSION);

    let config = config.map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    // Initialize metrics
    if config.metrics_enabled() {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.observability.metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(addr)
            .set_buckets(metrics::LATENCY_BUCKETS)
            .and_then(|builder| builder.install())
            .map_err(|e| AppError::Configuration {
                message: format!("metrics exporter: {}", e),
            })?;
        info!(%addr, "Prometheus exporter listening");
    }
    metrics::register_metrics();

    let corpus = Corpus::builtin()?;
    let state = AppState::new(config, corpus);
    let config = state.config.clone();

    // Build the router
    let app = create_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    let draining = Arc::new(Notify::new());
    let signal = {
        let draining = draining.clone();
        async move {
            shutdown_signal().await;
            draining.notify_one();
        }
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();
    tokio::pin!(server);

    let grace = config.shutdown_timeout();
    tokio::select! {
        result = &mut server => result?,
        _ = async {
            draining.notified().await;
            tokio::time::sleep(grace).await;
        } => warn!(timeout_secs = grace.as_secs(), "Graceful shutdown timed out"),
    }

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(observability: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&observability.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if observability.json_logging {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // API routes
    let api_routes = Router::new()
        // Tool endpoints
        .route("/tools", get(handlers::tools::list_tools))
        .route("/tools/{name}", post(handlers::tools::call_tool))

        // Search endpoints
        .route("/search", post(handlers::search::search))

        // Corpus endpoints
        .route("/seeds", get(handlers::corpus::list_seeds))
        .route("/seeds/{name}", get(handlers::corpus::get_seed))
        .route("/principles", get(handlers::corpus::get_principles))
        .route("/resources", get(handlers::corpus::list_resources))
        .route("/resources/{slug}", get(handlers::corpus::get_resource))

        // Prompt endpoints
        .route("/prompts", get(handlers::prompts::list_prompts))
        .route("/prompts/{name}", get(handlers::prompts::get_prompt));

    let mut app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .nest("/v1", api_routes);

    let limits = &state.config.rate_limit;
    if limits.enabled {
        let limiter = RateLimit::new(limits.requests_per_second, limits.burst);
        app = app.layer(from_fn_with_state(limiter, rate_limit_middleware));
    }

    // Compose the app
    app.layer(TimeoutLayer::new(state.config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(propagate_id)
        .layer(request_id)
        .with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(AppConfig::default(), Corpus::builtin().unwrap())
}

#[cfg(test)]
pub(crate) fn test_router() -> Router {
    create_router(test_state())
}
