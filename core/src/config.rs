use once_cell::sync::Lazy;
use serde::Deserialize;

pub(crate) static DEFAULT_CONFIG: Lazy<CompletionConfig> = Lazy::new(CompletionConfig::default);

/// Knobs of the completion engine.
///
/// Every key is optional in a session file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Namespace imported into every scope
    pub core_namespace: String,
    /// Namespace holding the built-in syntactic forms
    pub special_forms_namespace: String,
    /// Name of the container that holds every top-level namespace, if any
    pub root_namespace: Option<String>,
    /// Column at which typespec fences are wrapped
    pub signature_width: usize,
    /// Column at which field values are wrapped
    pub value_width: usize,
    /// Entries shown per collection in field values
    pub value_item_limit: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            core_namespace: "Kernel".to_string(),
            special_forms_namespace: "Kernel.SpecialForms".to_string(),
            root_namespace: Some("Elixir".to_string()),
            signature_width: 80,
            value_width: 80,
            value_item_limit: 50,
        }
    }
}
