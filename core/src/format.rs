use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;

/// Document formats accepted for manifests and session files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(anyhow!(
                "unsupported file extension for '{}' (expected .json, .yaml, .yml or .toml)",
                path.display()
            )),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, input: &str) -> Result<T> {
        match self {
            Format::Json => serde_json::from_str(input).map_err(|e| anyhow!(e)),
            Format::Yaml => serde_yaml::from_str(input).map_err(|e| anyhow!(e)),
            Format::Toml => toml::from_str(input).map_err(|e| anyhow!(e)),
        }
    }
}

/// Read and deserialize a file, picking the format from its extension
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let src = std::fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path.display()))?;
    format
        .parse(&src)
        .with_context(|| format!("Failed to parse '{}'", path.display()))
}
