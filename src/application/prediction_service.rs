// Prediction service - score a reading and record it in the history log
use crate::application::history_service::HistoryService;
use crate::domain::predictor;
use crate::domain::reading::{HistoryRecord, Reading};
use chrono::Local;

#[derive(Clone)]
pub struct PredictionService {
    history: HistoryService,
}

impl PredictionService {
    pub fn new(history: HistoryService) -> Self {
        Self { history }
    }

    /// Run the predictor, append the scored reading to the history log and
    /// return the score. A reading with missing or non-numeric fields scores
    /// `None`; it is still recorded.
    pub async fn predict_and_record(&self, reading: Reading) -> anyhow::Result<Option<i64>> {
        let aqi = predictor::predict(&reading);
        let time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.history
            .append(HistoryRecord::new(reading, aqi, time))
            .await?;
        Ok(aqi)
    }
}
