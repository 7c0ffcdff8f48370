use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use cellsense_core::format::read_document;
use cellsense_core::{Bindings, CompletionConfig, Environment, Value};
use serde::Deserialize;
use tracing::debug;

/// On-disk shape of a session: what an evaluator would hand the engine
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SessionFile {
    bindings: BTreeMap<String, Value>,
    /// Compiler-generated variables; never offered as completions
    hidden: BTreeMap<String, Value>,
    environment: Environment,
    config: CompletionConfig,
}

/// Bindings, lexical environment and engine configuration of one cell
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub bindings: Bindings,
    pub environment: Environment,
    pub config: CompletionConfig,
}

impl Session {
    pub fn load(path: &Path) -> Result<Self> {
        let file: SessionFile =
            read_document(path).with_context(|| format!("Failed to load session '{}'", path.display()))?;
        let mut bindings: Bindings = file.bindings.into_iter().collect();
        for (name, value) in file.hidden {
            bindings.insert_hidden(name, value);
        }
        debug!(path = %path.display(), bindings = bindings.len(), "loaded session");
        Ok(Self {
            bindings,
            environment: file.environment,
            config: file.config,
        })
    }
}
