// JSON-file history repository
use crate::application::history_repository::HistoryRepository;
use crate::domain::reading::HistoryRecord;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// Whole-file JSON persistence for the history log. Every save rewrites the
/// file from the full record sequence, pretty-printed.
pub struct JsonHistoryStore {
    history_path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(history_path: PathBuf) -> Self {
        Self { history_path }
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryStore {
    async fn load(&self) -> anyhow::Result<Vec<HistoryRecord>> {
        let raw = match tokio::fs::read_to_string(&self.history_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("reading history file {}", self.history_path.display())
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).context("parsing history file")
    }

    async fn save_all(&self, records: &[HistoryRecord]) -> anyhow::Result<()> {
        let body = serde_json::to_string_pretty(records).context("serializing history")?;
        tokio::fs::write(&self.history_path, body)
            .await
            .with_context(|| format!("writing history file {}", self.history_path.display()))
    }
}
