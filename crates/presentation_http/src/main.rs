//! terpdigest HTTP server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use ai_core::OllamaInferenceEngine;
use application::services::{ReviewDigestService, SummaryPipeline};
use infrastructure::AppConfig;
use infrastructure::adapters::{OllamaSummarizerAdapter, PlanetTerpAdapter};
use infrastructure::persistence::{SqliteResultCache, create_pool};
use infrastructure::scheduled_tasks::{create_course_sweep_task, create_professor_sweep_task};
use integration_planetterp::HttpPlanetTerpClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "terpdigest_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("terpdigest v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    // Persistence
    let pool = Arc::new(create_pool(&config.database)?);
    let cache = Arc::new(SqliteResultCache::new(pool));

    // Upstream provider
    let planetterp = HttpPlanetTerpClient::new(config.planetterp.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize PlanetTerp client: {e}"))?;
    let provider = Arc::new(PlanetTerpAdapter::new(Arc::new(planetterp)));

    // Summarizer
    let engine = OllamaInferenceEngine::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?;
    let summarizer = Arc::new(OllamaSummarizerAdapter::new(Arc::new(engine)));
    let pipeline = Arc::new(SummaryPipeline::new(
        summarizer,
        config.pipeline.to_settings(),
    ));

    // Core service
    let service = Arc::new(ReviewDigestService::new(
        cache,
        provider,
        pipeline,
        config.cache.to_settings(),
        config.prefetch.to_settings(),
    ));

    // Scheduled prefetch sweeps
    let scheduler = JobScheduler::new().await?;
    if config.prefetch.enabled {
        let course_task = create_course_sweep_task(Arc::clone(&service));
        scheduler
            .add(Job::new_async(
                config.prefetch.course_cron.as_str(),
                move |_id, _lock| {
                    let run = course_task();
                    Box::pin(async move {
                        let _ = run.await;
                    })
                },
            )?)
            .await?;

        let professor_task = create_professor_sweep_task(Arc::clone(&service));
        scheduler
            .add(Job::new_async(
                config.prefetch.professor_cron.as_str(),
                move |_id, _lock| {
                    let run = professor_task();
                    Box::pin(async move {
                        let _ = run.await;
                    })
                },
            )?)
            .await?;

        scheduler.start().await?;
        info!(
            course_cron = %config.prefetch.course_cron,
            professor_cron = %config.prefetch.professor_cron,
            "Prefetch sweeps scheduled"
        );
    }

    // Build router
    let state = AppState {
        fetcher: service,
        config: Arc::new(config.clone()),
    };
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    };

    let app = if config.server.cors_enabled {
        app.layer(TraceLayer::new_for_http()).layer(cors_layer)
    } else {
        app.layer(TraceLayer::new_for_http())
    };

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
