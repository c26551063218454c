// Application state for HTTP handlers
use crate::application::dataset_service::DatasetService;
use crate::application::history_service::HistoryService;
use crate::application::prediction_service::PredictionService;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub dataset_service: DatasetService,
    pub history_service: HistoryService,
    pub prediction_service: PredictionService,
    pub upload_dir: PathBuf,
}
