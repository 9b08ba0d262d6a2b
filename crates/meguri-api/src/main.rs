use std::env;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use meguri_core::config::LayeredConfig;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meguri_api::router::create_router;
use meguri_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meguri_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = env::var("MEGURI_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000);

    let mut config = LayeredConfig::with_defaults();
    if let Ok(path) = env::var("MEGURI_CONFIG") {
        config = match config.load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to load config file");
                std::process::exit(1);
            }
        };
    }
    let config = config.load_from_env();

    tracing::info!(
        port = port,
        geocoder_url = %config.geocoder_url.value,
        osrm_url = %config.osrm_url.value,
        "Starting meguri API server"
    );

    let state = Arc::new(AppState::from_config(&config));

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for http://localhost:3000");

    axum::serve(listener, app).await.unwrap();
}
