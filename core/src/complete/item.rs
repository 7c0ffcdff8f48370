use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Variable,
    Namespace,
    Function,
    Type,
    Field,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Variable => "variable",
            ItemKind::Namespace => "namespace",
            ItemKind::Function => "function",
            ItemKind::Type => "type",
            ItemKind::Field => "field",
        }
    }
}

/// A single completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    /// Shown in the list; callables and types carry a `/arity` suffix
    pub label: String,
    pub kind: ItemKind,
    pub detail: String,
    /// Markdown; `None` when nothing is documented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Text spliced at the cursor, always the bare name
    pub insert_text: String,
}

/// Provider output before ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) name: String,
    pub(crate) arity: Option<u8>,
    pub(crate) kind: ItemKind,
    pub(crate) detail: String,
    pub(crate) documentation: Option<String>,
}

impl Candidate {
    pub(crate) fn new(name: impl Into<String>, kind: ItemKind, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: None,
            kind,
            detail: detail.into(),
            documentation: None,
        }
    }

    pub(crate) fn into_item(self) -> CompletionItem {
        let label = match self.arity {
            Some(arity) => format!("{}/{}", self.name, arity),
            None => self.name.clone(),
        };
        CompletionItem {
            label,
            kind: self.kind,
            detail: self.detail,
            documentation: self.documentation,
            insert_text: self.name,
        }
    }
}
