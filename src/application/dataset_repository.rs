// Repository trait for the dataset file
use crate::domain::reading::DatasetRow;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Parse the canonical dataset file into rows.
    /// A missing file is an empty dataset, not an error.
    async fn load_rows(&self) -> anyhow::Result<Vec<DatasetRow>>;

    /// Move a staged upload over the canonical dataset file.
    /// On failure the previous file is left in place.
    async fn replace_with(&self, staged: &Path) -> anyhow::Result<()>;
}
