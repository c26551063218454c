use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: PathBuf,
    pub upload_dir: PathBuf,
}

impl ServerConfig {
    /// Canonical dataset file inside the public directory.
    pub fn dataset_path(&self) -> PathBuf {
        self.public_dir.join("aqi_data.csv")
    }

    /// History log file inside the public directory.
    pub fn history_path(&self) -> PathBuf {
        self.public_dir.join("history.json")
    }
}

/// Load the server configuration from the environment (PORT, PUBLIC_DIR,
/// UPLOAD_DIR) over built-in defaults.
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .set_default("port", 5000)?
        .set_default("public_dir", "public")?
        .set_default("upload_dir", "uploads")?
        .add_source(config::Environment::default())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_data_paths() {
        let config = ServerConfig {
            port: 5000,
            public_dir: PathBuf::from("public"),
            upload_dir: PathBuf::from("uploads"),
        };

        assert_eq!(config.dataset_path(), Path::new("public/aqi_data.csv"));
        assert_eq!(config.history_path(), Path::new("public/history.json"));
    }
}
