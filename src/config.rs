use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Endpoints for the export run. The proxy is tried before remote
/// storage for every photo; the catalog is fetched at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proxy_base: String,
    pub remote_base: String,
    pub catalog_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_base: "http://localhost:4000/api/photo".into(),
            remote_base: "https://storage.example.co.th/inspection-photos".into(),
            catalog_url: "https://api.example.co.th/citations".into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("ไม่พบโฮมไดเรกทอรี".into()))?;
        Ok(home.join(".config").join("defect-report").join("config.json"))
    }
}
