use anyhow::Context;
use axum::http::{HeaderValue, Method};
use k3_audit_api::{
    api_v1_routes, config, db, events, middleware_helpers::request_id::request_id_middleware,
    openapi, tracing as app_tracing, AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_config().context("failed to load configuration")?;
    config::init_tracing(app_config.log_level(), app_config.log_json);

    info!(
        environment = %app_config.environment,
        host = %app_config.host,
        port = app_config.port,
        "Starting k3-audit-api"
    );

    let db_pool = Arc::new(
        db::establish_connection_from_app_config(&app_config)
            .await
            .context("failed to connect to database")?,
    );

    if app_config.auto_migrate {
        db::run_migrations(&db_pool)
            .await
            .context("failed to run database migrations")?;
        info!("Database migrations applied");
    }

    let (event_tx, event_rx) = mpsc::channel(1024);
    let event_sender = Arc::new(events::EventSender::new(event_tx));
    tokio::spawn(events::process_events(event_rx));

    let state = AppState::new(db_pool, app_config.clone(), Some(event_sender));

    let cors = build_cors_layer(&app_config)?;

    let app = axum::Router::new()
        .merge(openapi::swagger_ui())
        .nest("/api/v1", api_v1_routes())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(app_tracing::configure_http_tracing())
        .layer(TimeoutLayer::new(Duration::from_secs(
            app_config.request_timeout_secs,
        )))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", app_config.host, app_config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

fn build_cors_layer(app_config: &config::AppConfig) -> anyhow::Result<CorsLayer> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if let Some(origins) = &app_config.cors_allowed_origins {
        let parsed: Result<Vec<HeaderValue>, _> = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect();
        let parsed = parsed.context("invalid origin in cors_allowed_origins")?;

        // Wildcard headers cannot be combined with credentials, so mirror
        // the request's headers when credentials are enabled.
        let layer = CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(methods);
        let layer = if app_config.cors_allow_credentials {
            layer
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        } else {
            layer.allow_headers(Any)
        };
        return Ok(layer);
    }

    if app_config.should_allow_permissive_cors() {
        warn!("No CORS origins configured; falling back to permissive CORS");
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any));
    }

    anyhow::bail!(
        "cors_allowed_origins must be set outside development (or enable cors_allow_any_origin)"
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
