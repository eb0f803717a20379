use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vidquiz::{
    config::AppConfig, handlers, services::database::Database, utils, ApiDoc, AppState,
};

/// Graceful shutdown signal handler
///
/// Handles shutdown signals gracefully, allowing in-flight requests to complete
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    utils::logging::init_logging()?;

    let config = Arc::new(AppConfig::load()?);

    let database = Database::new(&config.database.url, &config.database.name).await?;

    let state = AppState {
        db: database,
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/video/default", get(handlers::video::get_default_video))
        .route(
            "/api/videos/:title/overlays",
            get(handlers::overlay::get_video_overlays),
        )
        .route("/api/attempts", post(handlers::tracking::record_quiz_attempt))
        .route("/api/events", post(handlers::tracking::record_user_event))
        .route(
            "/api/notes",
            post(handlers::tracking::save_user_note).get(handlers::tracking::get_user_notes),
        )
        .route(
            "/api/reports/student",
            get(handlers::report::get_student_report),
        )
        .route(
            "/api/reports/performance",
            get(handlers::report::get_quiz_performance_report),
        )
        .route(
            "/api/settings",
            get(handlers::settings::get_app_settings).put(handlers::settings::update_app_settings),
        );

    let api_docs_routes = Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    Router::new()
        .merge(api_routes)
        .merge(api_docs_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
