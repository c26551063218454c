// Repository trait for the history log file
use crate::domain::reading::HistoryRecord;
use async_trait::async_trait;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Read the persisted history. A missing file or an empty body is an
    /// empty history, not an error.
    async fn load(&self) -> anyhow::Result<Vec<HistoryRecord>>;

    /// Rewrite the whole history file from the given records.
    async fn save_all(&self, records: &[HistoryRecord]) -> anyhow::Result<()>;
}
