use serde::{Deserialize, Deserializer};

/// Kind of an exported symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    #[default]
    Function,
    Macro,
    Type,
}

/// Stored documentation for a namespace or symbol.
///
/// `Missing` means nothing was ever written; `Hidden` marks a symbol its
/// author excluded from documentation, which completion must not offer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Documentation {
    #[default]
    Missing,
    Hidden,
    Text(String),
}

impl Documentation {
    pub fn text(s: impl Into<String>) -> Self {
        Documentation::Text(s.into())
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Documentation::Hidden)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Documentation::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Manifests write `doc: "..."`, `doc: false` (hidden) or omit the key
impl<'de> Deserialize<'de> for Documentation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Flag(true)) => Documentation::Missing,
            Some(Raw::Flag(false)) => Documentation::Hidden,
            Some(Raw::Text(s)) => Documentation::Text(s),
        })
    }
}

/// One exported `name/arity` of a namespace
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ExportedSymbol {
    pub name: String,
    #[serde(default)]
    pub arity: u8,
    #[serde(default)]
    pub kind: SymbolKind,
    /// Rendered call head, e.g. `split(string, pattern \\ " ")`
    #[serde(default)]
    pub signature: Option<String>,
    /// Typespec text shown in the documentation fence
    #[serde(default)]
    pub spec: Option<String>,
    #[serde(default)]
    pub doc: Documentation,
    /// Lower arities generated by default arguments of this clause
    #[serde(default)]
    pub defaults: Vec<u8>,
}

impl ExportedSymbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>, arity: u8) -> Self {
        Self {
            name: name.into(),
            arity,
            kind,
            ..Default::default()
        }
    }

    pub fn function(name: impl Into<String>, arity: u8) -> Self {
        Self::new(SymbolKind::Function, name, arity)
    }

    pub fn macro_(name: impl Into<String>, arity: u8) -> Self {
        Self::new(SymbolKind::Macro, name, arity)
    }

    pub fn type_(name: impl Into<String>, arity: u8) -> Self {
        Self::new(SymbolKind::Type, name, arity)
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Documentation::Text(doc.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.doc = Documentation::Hidden;
        self
    }

    pub fn defaults(mut self, arities: &[u8]) -> Self {
        self.defaults = arities.to_vec();
        self
    }
}

/// Read-only view of the namespaces loadable in the running system.
///
/// Implementations may be backed by live reflection or a static manifest;
/// every completion call queries afresh, so answers may change between calls
/// as namespaces are (re)loaded.
pub trait NamespaceRegistry: Send + Sync {
    fn namespace_exists(&self, name: &str) -> bool;

    /// Full names of loaded namespaces starting with `prefix`
    fn list_namespaces(&self, prefix: &str) -> Vec<String>;

    fn exported_symbols(&self, namespace: &str, kind: SymbolKind) -> Vec<ExportedSymbol>;

    fn namespace_docs(&self, _name: &str) -> Documentation {
        Documentation::Missing
    }
}
