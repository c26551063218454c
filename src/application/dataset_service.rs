// Dataset service - in-memory rows backed by the CSV store
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::reading::DatasetRow;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct DatasetService {
    repository: Arc<dyn DatasetRepository>,
    rows: Arc<RwLock<Vec<DatasetRow>>>,
}

impl DatasetService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self {
            repository,
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Reparse the dataset file and swap the in-memory rows wholesale.
    /// Readers never observe a partially built sequence.
    pub async fn reload(&self) -> anyhow::Result<usize> {
        let rows = self.repository.load_rows().await?;
        let count = rows.len();
        *self.rows.write().await = rows;
        Ok(count)
    }

    pub async fn rows(&self) -> Vec<DatasetRow> {
        self.rows.read().await.clone()
    }

    /// Replace the dataset file with a staged upload, then reload.
    /// A failed move leaves the previous file and the in-memory rows
    /// untouched.
    pub async fn replace_dataset(&self, staged: &Path) -> anyhow::Result<usize> {
        self.repository.replace_with(staged).await?;
        self.reload().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::Reading;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubDataset {
        rows: Mutex<Vec<DatasetRow>>,
        replaced: Mutex<Vec<std::path::PathBuf>>,
    }

    impl StubDataset {
        fn with_rows(rows: Vec<DatasetRow>) -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(rows),
                replaced: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl DatasetRepository for StubDataset {
        async fn load_rows(&self) -> anyhow::Result<Vec<DatasetRow>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn replace_with(&self, staged: &Path) -> anyhow::Result<()> {
            self.replaced.lock().unwrap().push(staged.to_path_buf());
            Ok(())
        }
    }

    fn row(name: &str, value: f64) -> DatasetRow {
        let mut row = Reading::new();
        row.insert(name, value);
        row
    }

    #[tokio::test]
    async fn test_reload_replaces_rows_entirely() {
        let repository = StubDataset::with_rows(vec![row("PM2_5", 10.0)]);
        let service = DatasetService::new(repository.clone());

        assert_eq!(service.reload().await.unwrap(), 1);
        assert_eq!(service.rows().await.len(), 1);

        *repository.rows.lock().unwrap() = vec![row("PM2_5", 20.0), row("PM2_5", 30.0)];
        assert_eq!(service.reload().await.unwrap(), 2);

        let rows = service.rows().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value("PM2_5"), 20.0);
    }

    #[tokio::test]
    async fn test_replace_dataset_moves_then_reloads() {
        let repository = StubDataset::with_rows(vec![row("NO2", 5.0)]);
        let service = DatasetService::new(repository.clone());

        let count = service
            .replace_dataset(Path::new("uploads/staged.csv"))
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            repository.replaced.lock().unwrap().as_slice(),
            &[std::path::PathBuf::from("uploads/staged.csv")]
        );
        assert_eq!(service.rows().await.len(), 1);
    }
}
