use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::val::Value;

/// A bound value together with its visibility
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub value: Value,
    /// `false` for synthetic, compiler-generated variables
    pub visible: bool,
}

/// Variables in scope at the cursor, as produced by the last evaluation
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: FxHashMap<String, Binding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Binding> {
        self.entries.insert(name.into(), Binding { value, visible: true })
    }

    pub fn insert_hidden(&mut self, name: impl Into<String>, value: Value) -> Option<Binding> {
        self.entries.insert(name.into(), Binding { value, visible: false })
    }

    /// Mark an existing binding as synthetic; returns whether it existed
    pub fn hide(&mut self, name: &str) -> bool {
        match self.entries.get_mut(name) {
            Some(binding) => {
                binding.visible = false;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.entries.remove(name)
    }

    /// Value of a visible binding
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).filter(|b| b.visible).map(|b| &b.value)
    }

    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.entries.get(name)
    }

    /// Visible bindings, unordered
    pub fn visible(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter(|(_, b)| b.visible)
            .map(|(name, b)| (name.as_str(), &b.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}

/// `name/arity` reference used by import filters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolRef {
    pub name: String,
    pub arity: u8,
}

impl SymbolRef {
    pub fn new(name: impl Into<String>, arity: u8) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportFilter {
    #[default]
    All,
    Only(Vec<SymbolRef>),
    Except(Vec<SymbolRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub namespace: String,
    #[serde(default)]
    pub filter: ImportFilter,
}

/// Arities listed per function name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AritySet(FxHashMap<String, FxHashSet<u8>>);

impl AritySet {
    fn from_refs(refs: &[SymbolRef]) -> Self {
        let mut set = Self::default();
        set.extend(refs);
        set
    }

    pub fn contains(&self, name: &str, arity: u8) -> bool {
        self.0.get(name).is_some_and(|arities| arities.contains(&arity))
    }

    fn extend(&mut self, refs: &[SymbolRef]) {
        for r in refs {
            self.0.entry(r.name.clone()).or_default().insert(r.arity);
        }
    }

    fn remove(&mut self, refs: &[SymbolRef]) {
        for r in refs {
            if let Some(arities) = self.0.get_mut(r.name.as_str()) {
                arities.remove(&r.arity);
                if arities.is_empty() {
                    self.0.remove(r.name.as_str());
                }
            }
        }
    }
}

/// Effective visibility of one namespace after folding all of its imports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    All,
    Only(AritySet),
    AllExcept(AritySet),
}

impl Visibility {
    pub fn admits(&self, name: &str, arity: u8) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Only(set) => set.contains(name, arity),
            Visibility::AllExcept(set) => !set.contains(name, arity),
        }
    }

    // Later filters refine what earlier ones made visible
    fn refine(current: Option<Visibility>, filter: &ImportFilter) -> Visibility {
        match (current, filter) {
            (_, ImportFilter::All) => Visibility::All,
            (None, ImportFilter::Only(refs)) => Visibility::Only(AritySet::from_refs(refs)),
            (Some(Visibility::All), ImportFilter::Only(_)) => Visibility::All,
            (Some(Visibility::Only(mut set)), ImportFilter::Only(refs)) => {
                set.extend(refs);
                Visibility::Only(set)
            }
            (Some(Visibility::AllExcept(mut set)), ImportFilter::Only(refs)) => {
                set.remove(refs);
                Visibility::AllExcept(set)
            }
            (None | Some(Visibility::All), ImportFilter::Except(refs)) => {
                Visibility::AllExcept(AritySet::from_refs(refs))
            }
            (Some(Visibility::Only(mut set)), ImportFilter::Except(refs)) => {
                set.remove(refs);
                Visibility::Only(set)
            }
            (Some(Visibility::AllExcept(mut set)), ImportFilter::Except(refs)) => {
                set.extend(refs);
                Visibility::AllExcept(set)
            }
        }
    }
}

/// Lexical environment in effect at the cursor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Namespace being defined, if any
    pub namespace: Option<String>,
    /// short name -> full namespace name
    pub aliases: BTreeMap<String, String>,
    /// In the order they were declared
    pub imports: Vec<Import>,
    pub requires: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_alias(mut self, short: impl Into<String>, full: impl Into<String>) -> Self {
        self.aliases.insert(short.into(), full.into());
        self
    }

    pub fn with_import(mut self, namespace: impl Into<String>, filter: ImportFilter) -> Self {
        self.imports.push(Import {
            namespace: namespace.into(),
            filter,
        });
        self
    }

    pub fn with_require(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        if !self.requires.contains(&namespace) {
            self.requires.push(namespace);
        }
        self
    }

    pub fn lookup_alias(&self, short: &str) -> Option<&str> {
        self.aliases.get(short).map(String::as_str)
    }

    /// Visibility of `namespace` through its imports, `None` when never imported
    pub fn import_visibility(&self, namespace: &str) -> Option<Visibility> {
        self.imports
            .iter()
            .filter(|i| i.namespace == namespace)
            .fold(None, |acc, import| Some(Visibility::refine(acc, &import.filter)))
    }

    /// Imported namespaces ordered by their most recent import
    pub fn imported_namespaces(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for import in self.imports.iter().rev() {
            if !out.contains(&import.namespace.as_str()) {
                out.push(&import.namespace);
            }
        }
        out.reverse();
        out
    }
}
