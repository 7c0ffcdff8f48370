use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::format::read_document;
use crate::registry::{Documentation, ExportedSymbol, NamespaceRegistry, SymbolKind};

/// Exports of one namespace as stored in a manifest file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamespaceManifest {
    pub name: String,
    #[serde(default)]
    pub doc: Documentation,
    #[serde(default)]
    pub functions: Vec<ExportedSymbol>,
    #[serde(default)]
    pub macros: Vec<ExportedSymbol>,
    #[serde(default)]
    pub types: Vec<ExportedSymbol>,
}

impl NamespaceManifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Documentation::Text(doc.into());
        self
    }

    /// Add a symbol to the list matching its kind
    pub fn export(mut self, symbol: ExportedSymbol) -> Self {
        match symbol.kind {
            SymbolKind::Function => self.functions.push(symbol),
            SymbolKind::Macro => self.macros.push(symbol),
            SymbolKind::Type => self.types.push(symbol),
        }
        self
    }

    pub fn symbols(&self, kind: SymbolKind) -> &[ExportedSymbol] {
        match kind {
            SymbolKind::Function => &self.functions,
            SymbolKind::Macro => &self.macros,
            SymbolKind::Type => &self.types,
        }
    }

    // Kinds come from the list a symbol sits in, not from the file
    fn normalize(mut self) -> Self {
        for (list, kind) in [
            (&mut self.functions, SymbolKind::Function),
            (&mut self.macros, SymbolKind::Macro),
            (&mut self.types, SymbolKind::Type),
        ] {
            for symbol in list.iter_mut() {
                symbol.kind = kind;
            }
        }
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    Bundle { namespaces: Vec<NamespaceManifest> },
    List(Vec<NamespaceManifest>),
    Single(NamespaceManifest),
}

/// A source of namespace manifests, e.g. one standard library namespace
pub trait Module: Send + Sync + std::fmt::Debug {
    /// Full namespace name
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn enabled(&self) -> bool {
        true
    }

    fn manifest(&self) -> NamespaceManifest;
}

/// Namespace registry backed by manifests.
///
/// Entries live in a concurrent map so readers completing one cell never
/// block a writer reloading an unrelated namespace.
#[derive(Debug, Default)]
pub struct ManifestRegistry {
    namespaces: DashMap<String, Arc<NamespaceManifest>>,
}

impl ManifestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module's manifest under the module's name
    pub fn register_module(&self, module: &dyn Module) -> Result<()> {
        if !module.enabled() {
            debug!(namespace = module.name(), "skipping disabled module");
            return Ok(());
        }
        let manifest = module.manifest();
        if manifest.name != module.name() {
            return Err(anyhow!(
                "Module '{}' produced a manifest named '{}'",
                module.name(),
                manifest.name
            ));
        }
        debug!(namespace = module.name(), description = module.description(), "registering module");
        self.insert(manifest)?;
        Ok(())
    }

    /// Insert or replace a namespace, returning the previous manifest
    pub fn insert(&self, manifest: NamespaceManifest) -> Result<Option<Arc<NamespaceManifest>>> {
        validate_name(&manifest.name)?;
        let manifest = manifest.normalize();
        Ok(self.namespaces.insert(manifest.name.clone(), Arc::new(manifest)))
    }

    /// Unload a namespace; returns whether it was loaded
    pub fn remove(&self, name: &str) -> bool {
        self.namespaces.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<Arc<NamespaceManifest>> {
        self.namespaces.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// All loaded namespace names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.namespaces.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Load every manifest in a `.json`, `.yaml`/`.yml` or `.toml` file
    pub fn load_path(&self, path: &Path) -> Result<usize> {
        let document: ManifestDocument = read_document(path)?;
        let manifests = match document {
            ManifestDocument::Bundle { namespaces } | ManifestDocument::List(namespaces) => namespaces,
            ManifestDocument::Single(manifest) => vec![manifest],
        };
        let count = manifests.len();
        for manifest in manifests {
            self.insert(manifest)?;
        }
        info!(path = %path.display(), count, "loaded namespace manifests");
        Ok(count)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .split('.')
            .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_'));
    if valid {
        Ok(())
    } else {
        Err(anyhow!("Invalid namespace name '{}'", name))
    }
}

impl NamespaceRegistry for ManifestRegistry {
    fn namespace_exists(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    fn list_namespaces(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .namespaces
            .iter()
            .filter(|e| e.key().starts_with(prefix))
            .map(|e| e.key().clone())
            .collect();
        names.sort();
        names
    }

    fn exported_symbols(&self, namespace: &str, kind: SymbolKind) -> Vec<ExportedSymbol> {
        // clone the Arc first so no shard lock is held while copying symbols
        match self.get(namespace) {
            Some(manifest) => manifest.symbols(kind).to_vec(),
            None => Vec::new(),
        }
    }

    fn namespace_docs(&self, name: &str) -> Documentation {
        self.get(name).map(|m| m.doc.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Debug)]
    struct Greeter;

    impl Module for Greeter {
        fn name(&self) -> &str {
            "Greeter"
        }

        fn manifest(&self) -> NamespaceManifest {
            NamespaceManifest::new("Greeter")
                .doc("Says hello.")
                .export(ExportedSymbol::function("hello", 1).signature("hello(name)"))
        }
    }

    #[derive(Debug)]
    struct Misnamed;

    impl Module for Misnamed {
        fn name(&self) -> &str {
            "Right"
        }

        fn manifest(&self) -> NamespaceManifest {
            NamespaceManifest::new("Wrong")
        }
    }

    #[test]
    fn test_register_module() {
        let registry = ManifestRegistry::new();
        registry.register_module(&Greeter).unwrap();
        assert!(registry.namespace_exists("Greeter"));
        assert_eq!(
            registry.namespace_docs("Greeter"),
            Documentation::Text("Says hello.".to_string())
        );
        let funs = registry.exported_symbols("Greeter", SymbolKind::Function);
        assert_eq!(funs.len(), 1);
        assert_eq!(funs[0].name, "hello");
        assert!(registry.exported_symbols("Greeter", SymbolKind::Macro).is_empty());
    }

    #[test]
    fn test_register_module_rejects_mismatched_name() {
        let registry = ManifestRegistry::new();
        assert!(registry.register_module(&Misnamed).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_list_namespaces_by_prefix() {
        let registry = ManifestRegistry::new();
        for name in ["String", "String.Chars", "Stream", "Enum"] {
            registry.insert(NamespaceManifest::new(name)).unwrap();
        }
        assert_eq!(registry.list_namespaces("Str"), vec!["Stream", "String", "String.Chars"]);
        assert_eq!(registry.list_namespaces("String."), vec!["String.Chars"]);
        assert_eq!(registry.list_namespaces("").len(), 4);
    }

    #[test]
    fn test_reload_and_unload() {
        let registry = ManifestRegistry::new();
        registry.insert(NamespaceManifest::new("Demo")).unwrap();
        assert!(registry.exported_symbols("Demo", SymbolKind::Function).is_empty());

        let previous = registry
            .insert(NamespaceManifest::new("Demo").export(ExportedSymbol::function("run", 0)))
            .unwrap();
        assert!(previous.is_some());
        assert_eq!(registry.exported_symbols("Demo", SymbolKind::Function).len(), 1);

        assert!(registry.remove("Demo"));
        assert!(!registry.namespace_exists("Demo"));
        assert!(registry.exported_symbols("Demo", SymbolKind::Function).is_empty());
    }

    #[test]
    fn test_invalid_names_rejected() {
        let registry = ManifestRegistry::new();
        for name in ["", "A..B", ".A", "A.", "with space"] {
            assert!(registry.insert(NamespaceManifest::new(name)).is_err(), "{name:?}");
        }
    }

    #[test]
    fn test_load_json_bundle() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("demo.json");
        fs::write(
            &path,
            r#"{"namespaces": [
                {"name": "Demo", "doc": "Demo namespace.",
                 "functions": [{"name": "run", "arity": 1, "signature": "run(x)", "doc": false}],
                 "macros": [{"name": "defdemo", "arity": 2}]}
            ]}"#,
        )?;

        let registry = ManifestRegistry::new();
        assert_eq!(registry.load_path(&path)?, 1);
        let funs = registry.exported_symbols("Demo", SymbolKind::Function);
        assert_eq!(funs[0].doc, Documentation::Hidden);
        assert_eq!(funs[0].kind, SymbolKind::Function);
        let macros = registry.exported_symbols("Demo", SymbolKind::Macro);
        assert_eq!(macros[0].kind, SymbolKind::Macro);
        assert_eq!(macros[0].doc, Documentation::Missing);
        Ok(())
    }

    #[test]
    fn test_load_yaml_and_toml() -> Result<()> {
        let dir = tempdir()?;
        let yaml = dir.path().join("a.yaml");
        fs::write(
            &yaml,
            "- name: Alpha\n  functions:\n    - name: one\n      arity: 0\n- name: Alpha.Beta\n",
        )?;
        let toml_path = dir.path().join("b.toml");
        fs::write(
            &toml_path,
            "name = \"Gamma\"\ndoc = \"G.\"\n\n[[types]]\nname = \"t\"\narity = 0\n",
        )?;

        let registry = ManifestRegistry::new();
        assert_eq!(registry.load_path(&yaml)?, 2);
        assert_eq!(registry.load_path(&toml_path)?, 1);
        assert_eq!(registry.names(), vec!["Alpha", "Alpha.Beta", "Gamma"]);
        assert_eq!(registry.exported_symbols("Gamma", SymbolKind::Type)[0].kind, SymbolKind::Type);
        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let registry = ManifestRegistry::new();
        let err = registry.load_path(Path::new("manifest.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }
}
