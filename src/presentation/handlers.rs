// HTTP request handlers
use crate::domain::reading::{DatasetRow, HistoryRecord, Reading};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Serialize)]
pub struct PredictResponse {
    #[serde(rename = "predictedAQI")]
    pub predicted_aqi: Option<i64>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
}

/// Liveness check
pub async fn health_check() -> &'static str {
    "AQI Backend Running"
}

/// Current in-memory dataset rows
pub async fn list_csv_rows(State(state): State<Arc<AppState>>) -> Json<Vec<DatasetRow>> {
    Json(state.dataset_service.rows().await)
}

/// Past predictions, oldest first
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryRecord>> {
    Json(state.history_service.records().await)
}

/// Score a reading and append it to the history log
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(reading): Json<Reading>,
) -> Result<Json<PredictResponse>, ApiError> {
    let predicted_aqi = state.prediction_service.predict_and_record(reading).await?;
    Ok(Json(PredictResponse { predicted_aqi }))
}

/// Replace the dataset file with the uploaded CSV and reload it
pub async fn upload_dataset(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::UploadFailed)?
    {
        if field.name() != Some("file") {
            continue;
        }
        let data = field.bytes().await.map_err(|_| ApiError::UploadFailed)?;

        let staged = stage_path(&state.upload_dir);
        tokio::fs::write(&staged, &data)
            .await
            .map_err(|_| ApiError::UploadFailed)?;

        let count = state
            .dataset_service
            .replace_dataset(&staged)
            .await
            .map_err(|e| {
                tracing::error!("dataset replace failed: {e:#}");
                ApiError::UploadFailed
            })?;
        tracing::info!("dataset replaced, {count} rows loaded");

        return Ok(Json(UploadResponse {
            message: "CSV Uploaded & Reloaded Successfully",
        }));
    }

    // No `file` field in the form
    Err(ApiError::UploadFailed)
}

fn stage_path(upload_dir: &Path) -> PathBuf {
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    upload_dir.join(format!("staged-{stamp}.csv"))
}
