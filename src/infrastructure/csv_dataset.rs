// CSV-backed dataset repository
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::reading::{DatasetRow, Reading, coerce_cell};
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct CsvDatasetStore {
    dataset_path: PathBuf,
}

impl CsvDatasetStore {
    pub fn new(dataset_path: PathBuf) -> Self {
        Self { dataset_path }
    }

    /// Parse a CSV body with a header row. Every cell is coerced to a
    /// number; empty and non-numeric cells become NaN.
    fn parse_rows(raw: &str) -> anyhow::Result<Vec<DatasetRow>> {
        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let headers = reader.headers().context("reading CSV header row")?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("reading CSV record")?;
            let mut row = Reading::new();
            for (name, cell) in headers.iter().zip(record.iter()) {
                row.insert(name, coerce_cell(cell));
            }
            rows.push(row);
        }
        Ok(rows)
    }
}

#[async_trait]
impl DatasetRepository for CsvDatasetStore {
    async fn load_rows(&self) -> anyhow::Result<Vec<DatasetRow>> {
        let raw = match tokio::fs::read_to_string(&self.dataset_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("reading dataset file {}", self.dataset_path.display())
                });
            }
        };
        Self::parse_rows(&raw)
    }

    async fn replace_with(&self, staged: &Path) -> anyhow::Result<()> {
        tokio::fs::rename(staged, &self.dataset_path)
            .await
            .with_context(|| {
                format!(
                    "moving staged upload into {}",
                    self.dataset_path.display()
                )
            })
    }
}
