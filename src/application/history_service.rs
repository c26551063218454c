// History service - append-only log mirrored to the history file
use crate::application::history_repository::HistoryRepository;
use crate::domain::reading::HistoryRecord;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct HistoryService {
    repository: Arc<dyn HistoryRepository>,
    records: Arc<RwLock<Vec<HistoryRecord>>>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self {
            repository,
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Populate the in-memory log from the history file.
    pub async fn load(&self) -> anyhow::Result<usize> {
        let records = self.repository.load().await?;
        let count = records.len();
        *self.records.write().await = records;
        Ok(count)
    }

    pub async fn records(&self) -> Vec<HistoryRecord> {
        self.records.read().await.clone()
    }

    /// Append a record and rewrite the history file. The write lock is held
    /// across the save, so concurrent appends cannot interleave their file
    /// writes.
    pub async fn append(&self, record: HistoryRecord) -> anyhow::Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        self.repository.save_all(&records).await
    }
}
