use crate::models::Room;
use crate::sources::traits::CatalogSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog stored as a JSON array of rooms
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, json: &str) -> Result<Vec<Room>> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        if !value.is_array() {
            anyhow::bail!(
                "Catalog {} must contain a JSON array of rooms",
                self.path.display()
            );
        }
        serde_json::from_value(value).context("Failed to parse catalog rooms")
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Room>> {
        debug!("Reading catalog file: {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        debug!("Read {} bytes of catalog JSON", json.len());
        self.parse(&json)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
