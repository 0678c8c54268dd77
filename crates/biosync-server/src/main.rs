//! BioSync Server
//!
//! Loads the stress classifiers once at startup and serves predictions over
//! HTTP until a shutdown signal arrives.

use anyhow::Result;
use biosync_classifiers::ClassifierRegistry;
use biosync_core::ModelKind;
use biosync_server::{create_router, AppState, Cli, ServerConfig};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);

    info!("Starting BioSync Server");

    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Models directory: {}", config.models.dir.display());

    let metrics_handle = init_metrics()?;

    // Fully built before the listener exists, so every request sees the same registry
    let registry = ClassifierRegistry::load(&config.models);
    for kind in ModelKind::ALL {
        let loaded = registry.get(kind).is_loaded();
        metrics::gauge!("biosync_model_loaded", "model" => kind.as_str())
            .set(if loaded { 1.0 } else { 0.0 });
        if !loaded {
            warn!("{} model unavailable; requests routed to it will fail", kind);
        }
    }

    let addr: SocketAddr = format!("{}:{}", config.listen, config.port).parse()?;
    let state = AppState::new(config, registry, metrics_handle);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Shutdown signal received, stopping server...");
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("biosync=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("biosync=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "biosync_requests_total",
        "Total number of prediction requests received"
    );
    metrics::describe_counter!(
        "biosync_predictions_total",
        "Successful predictions by model and label"
    );
    metrics::describe_counter!("biosync_errors_total", "Failed requests by error kind");
    metrics::describe_histogram!(
        "biosync_prediction_latency_us",
        metrics::Unit::Microseconds,
        "Selection, scoring and advice latency in microseconds"
    );
    metrics::describe_gauge!(
        "biosync_model_loaded",
        "1 when the model loaded at startup, 0 otherwise"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
