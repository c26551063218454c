// Infrastructure layer - file stores and configuration
pub mod config;
pub mod csv_dataset;
pub mod json_history;
