use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{company_auto, company_manual, health, AppState};
use crate::openapi::openapi_json;
use companysearch::bootstrap::bootstrap_indices;
use companysearch::{AppConfig, ElasticsearchClient};

/// All routes, without middleware layers.
pub fn build_router(state: Arc<AppState>) -> Router {
    let auto = Router::new()
        .route("/company/auto/:id", get(company_auto::get_company))
        .route("/company/auto/search/:term", get(company_auto::search))
        .route(
            "/company/auto/autocomplete/search/:term",
            get(company_auto::autocomplete_search),
        )
        .route(
            "/company/auto/autocomplete/fuzzy/search/:term",
            get(company_auto::autocomplete_fuzzy_search),
        )
        .route(
            "/company/auto/search/telephone/:term",
            get(company_auto::telephone_search),
        )
        .route(
            "/company/auto/search/owner/:term",
            get(company_auto::owner_search),
        );

    let manual = Router::new()
        .route("/company/manual/:id", get(company_manual::get_company))
        .route("/company/manual/search/:term", get(company_manual::search))
        .route(
            "/company/manual/autocomplete/search/:term",
            get(company_manual::autocomplete_search),
        )
        .route(
            "/company/manual/autocomplete/fuzzy/search/:term",
            get(company_manual::autocomplete_fuzzy_search),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(auto)
        .merge(manual)
        .with_state(state)
}

pub async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        es_url = %config.es_url,
        force_seed = config.force_seed,
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    let client = Arc::new(ElasticsearchClient::from_config(&config));

    let (manual, auto) = bootstrap_indices(&client, &config).await?;
    tracing::info!(
        manual_seeded = manual.seeded,
        auto_seeded = auto.seeded,
        "Indices ready"
    );

    let state = Arc::new(AppState::new(client));
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive().max_age(std::time::Duration::from_secs(86400)));

    tracing::info!("Starting companysearch server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
