// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::dataset_service::DatasetService;
use crate::application::history_service::HistoryService;
use crate::application::prediction_service::PredictionService;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::csv_dataset::CsvDatasetStore;
use crate::infrastructure::json_history::JsonHistoryStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, list_csv_rows, list_history, predict, upload_dataset,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_server_config()?;

    // Working directories must exist before the stores touch them
    tokio::fs::create_dir_all(&config.public_dir).await?;
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    // Create repositories (infrastructure layer)
    let dataset_store = Arc::new(CsvDatasetStore::new(config.dataset_path()));
    let history_store = Arc::new(JsonHistoryStore::new(config.history_path()));

    // Create services (application layer)
    let dataset_service = DatasetService::new(dataset_store);
    let history_service = HistoryService::new(history_store);
    let prediction_service = PredictionService::new(history_service.clone());

    // Load persisted state; missing files start the service empty
    let rows = dataset_service.reload().await?;
    let records = history_service.load().await?;
    tracing::info!("loaded {rows} dataset rows and {records} history records");

    // Create application state
    let state = Arc::new(AppState {
        dataset_service,
        history_service,
        prediction_service,
        upload_dir: config.upload_dir.clone(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(health_check))
        .route("/api/csv-rows", get(list_csv_rows))
        .route("/api/history", get(list_history))
        .route("/api/predict", post(predict))
        .route("/api/upload", post(upload_dataset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("Starting aqi-backend service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
