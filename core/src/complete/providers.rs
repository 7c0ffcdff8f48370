use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use super::Completer;
use super::docs;
use super::item::{Candidate, ItemKind};
use crate::env::{Bindings, Environment, Visibility};
use crate::registry::{ExportedSymbol, SymbolKind};
use crate::val::{Printer, Value};

const CALLABLE_KINDS: [SymbolKind; 2] = [SymbolKind::Function, SymbolKind::Macro];

/// A callable or type together with the namespace it came from
#[derive(Debug, Clone)]
struct Entry {
    namespace: String,
    symbol: ExportedSymbol,
}

fn placeholder_signature(name: &str, arity: u8) -> String {
    let args: Vec<String> = (1..=arity).map(|i| format!("arg{}", i)).collect();
    format!("{}({})", name, args.join(", "))
}

fn looks_like_namespace(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest: Vec<char> = chars.collect();
    let body = match rest.last() {
        Some('?') | Some('!') => &rest[..rest.len() - 1],
        _ => &rest[..],
    };
    (first.is_alphabetic() || first == '_') && body.iter().all(|c| c.is_alphanumeric() || *c == '_')
}

/// Arities generated by one default-argument clause share the clause's
/// signature, and a lone documented arity lends its docs to the others.
fn apply_default_groups(entries: &mut [Entry]) {
    let heads: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.symbol.defaults.is_empty())
        .map(|(i, _)| i)
        .collect();

    for head_idx in heads {
        let head = entries[head_idx].clone();
        let members: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(i, e)| {
                *i == head_idx
                    || (e.namespace == head.namespace
                        && e.symbol.name == head.symbol.name
                        && e.symbol.kind == head.symbol.kind
                        && head.symbol.defaults.contains(&e.symbol.arity))
            })
            .map(|(i, _)| i)
            .collect();

        let signature = head
            .symbol
            .signature
            .clone()
            .unwrap_or_else(|| placeholder_signature(&head.symbol.name, head.symbol.arity));

        let documented: Vec<usize> = members
            .iter()
            .copied()
            .filter(|&i| entries[i].symbol.doc.as_text().is_some())
            .collect();
        let shared = match documented.as_slice() {
            [only] => Some((entries[*only].symbol.doc.clone(), entries[*only].symbol.spec.clone())),
            _ => None,
        };

        for &i in &members {
            let symbol = &mut entries[i].symbol;
            symbol.signature = Some(signature.clone());
            if let Some((doc, spec)) = &shared
                && !symbol.doc.is_hidden()
            {
                symbol.doc = doc.clone();
                if symbol.spec.is_none() {
                    symbol.spec = spec.clone();
                }
            }
        }
    }
}

impl Completer<'_> {
    pub(crate) fn variables(&self, hint: &str, bindings: &Bindings) -> Vec<Candidate> {
        let out: Vec<Candidate> = bindings
            .visible()
            .filter(|(name, _)| name.starts_with(hint))
            .map(|(name, _)| Candidate::new(name, ItemKind::Variable, "variable"))
            .collect();
        trace!(count = out.len(), "variable candidates");
        out
    }

    fn namespace_candidate(&self, label: &str, full_name: &str, detail: &str) -> Candidate {
        let mut candidate = Candidate::new(label, ItemKind::Namespace, detail);
        candidate.documentation = docs::namespace_docs(&self.registry.namespace_docs(full_name));
        candidate
    }

    /// Aliases, top-level namespaces and the root container for a bare hint
    pub(crate) fn bare_namespaces(&self, hint: &str, env: &Environment) -> Vec<Candidate> {
        let mut out: Vec<Candidate> = env
            .aliases
            .iter()
            .filter(|(short, full)| short.starts_with(hint) && self.namespace_known(full))
            .map(|(short, full)| self.namespace_candidate(short, full, "alias"))
            .collect();
        out.extend(self.root_level(hint));
        if let Some(root) = self.config.root_namespace.as_deref()
            && root.starts_with(hint)
        {
            out.push(Candidate::new(root, ItemKind::Namespace, "namespace"));
        }
        trace!(count = out.len(), "namespace candidates");
        out
    }

    /// First components of capitalized namespace names
    pub(crate) fn root_level(&self, hint: &str) -> Vec<Candidate> {
        let heads: BTreeSet<String> = self
            .registry
            .list_namespaces(hint)
            .iter()
            .filter_map(|name| name.split('.').next())
            .filter(|head| looks_like_namespace(head))
            .map(str::to_string)
            .collect();
        heads
            .iter()
            .map(|head| self.namespace_candidate(head, head, "namespace"))
            .collect()
    }

    /// Loadable namespaces without a parent, matched literally
    pub(crate) fn literal_namespaces(&self, hint: &str) -> Vec<Candidate> {
        self.registry
            .list_namespaces(hint)
            .iter()
            .filter(|name| !name.contains('.'))
            .map(|name| self.namespace_candidate(name, name, "namespace"))
            .collect()
    }

    /// Next path component of namespaces nested under `parent`
    pub(crate) fn child_namespaces(&self, parent: &str, hint: &str) -> Vec<Candidate> {
        let base = parent.len() + 1;
        let children: BTreeSet<String> = self
            .registry
            .list_namespaces(&format!("{}.{}", parent, hint))
            .iter()
            .filter_map(|name| name.get(base..))
            .filter_map(|rest| rest.split('.').next())
            .filter(|child| !child.is_empty())
            .map(str::to_string)
            .collect();
        children
            .iter()
            .map(|child| self.namespace_candidate(child, &format!("{}.{}", parent, child), "namespace"))
            .collect()
    }

    /// Every export of `namespace` in `kinds`, default groups applied.
    ///
    /// Grouping sees the whole export list so a group keeps its shared
    /// signature even when filters later drop its head.
    fn grouped_exports(&self, namespace: &str, kinds: &[SymbolKind]) -> Vec<Entry> {
        let mut entries = Vec::new();
        for &kind in kinds {
            for mut symbol in self.registry.exported_symbols(namespace, kind) {
                symbol.kind = kind;
                entries.push(Entry {
                    namespace: namespace.to_string(),
                    symbol,
                });
            }
        }
        apply_default_groups(&mut entries);
        entries
    }

    /// Functions, macros and types exported by one namespace
    pub(crate) fn namespace_members(&self, namespace: &str, hint: &str) -> Vec<Candidate> {
        let entries = self
            .grouped_exports(namespace, &[SymbolKind::Function, SymbolKind::Macro, SymbolKind::Type])
            .into_iter()
            .filter(|e| e.symbol.name.starts_with(hint) && !e.symbol.doc.is_hidden())
            .collect();
        self.finish_callables(entries)
    }

    /// Callables reachable without qualification, lowest precedence first
    pub(crate) fn bare_callables(&self, hint: &str, env: &Environment) -> Vec<Candidate> {
        let mut table: BTreeMap<(String, u8, SymbolKind), Entry> = BTreeMap::new();

        let core = self.config.core_namespace.as_str();
        let core_visibility = env.import_visibility(core).unwrap_or(Visibility::All);
        self.merge_from(&mut table, core, &CALLABLE_KINDS, hint, Some(&core_visibility));

        for namespace in env.requires.iter().filter(|ns| ns.as_str() != core) {
            self.merge_from(&mut table, namespace, &[SymbolKind::Macro], hint, None);
        }

        for namespace in env.imported_namespaces() {
            if namespace == core {
                continue;
            }
            let visibility = env.import_visibility(namespace).unwrap_or(Visibility::All);
            self.merge_from(&mut table, namespace, &CALLABLE_KINDS, hint, Some(&visibility));
        }

        if let Some(local) = env.namespace.as_deref() {
            self.merge_from(&mut table, local, &CALLABLE_KINDS, hint, None);
        }

        let special = self.config.special_forms_namespace.as_str();
        for entry in self.grouped_exports(special, &CALLABLE_KINDS) {
            let symbol = &entry.symbol;
            if !symbol.name.starts_with(hint) || symbol.doc.is_hidden() {
                continue;
            }
            // shadowed by anything above with the same name and arity
            if CALLABLE_KINDS
                .iter()
                .any(|k| table.contains_key(&(symbol.name.clone(), symbol.arity, *k)))
            {
                continue;
            }
            table.insert((symbol.name.clone(), symbol.arity, symbol.kind), entry);
        }

        self.finish_callables(table.into_values().collect())
    }

    // later calls override earlier ones on the same name/arity
    fn merge_from(
        &self,
        table: &mut BTreeMap<(String, u8, SymbolKind), Entry>,
        namespace: &str,
        kinds: &[SymbolKind],
        hint: &str,
        visibility: Option<&Visibility>,
    ) {
        for entry in self.grouped_exports(namespace, kinds) {
            let symbol = &entry.symbol;
            if !symbol.name.starts_with(hint) || symbol.doc.is_hidden() {
                continue;
            }
            if let Some(visibility) = visibility
                && !visibility.admits(&symbol.name, symbol.arity)
            {
                continue;
            }
            for other in CALLABLE_KINDS {
                table.remove(&(symbol.name.clone(), symbol.arity, other));
            }
            table.insert((symbol.name.clone(), symbol.arity, symbol.kind), entry);
        }
    }

    fn finish_callables(&self, entries: Vec<Entry>) -> Vec<Candidate> {
        let out: Vec<Candidate> = entries.into_iter().map(|e| self.callable_candidate(e.symbol)).collect();
        trace!(count = out.len(), "callable candidates");
        out
    }

    fn callable_candidate(&self, symbol: ExportedSymbol) -> Candidate {
        let documentation = docs::symbol_docs(&symbol.doc, symbol.spec.as_deref(), self.config.signature_width);
        let (kind, detail) = match symbol.kind {
            SymbolKind::Type => (ItemKind::Type, "typespec".to_string()),
            SymbolKind::Function | SymbolKind::Macro => (
                ItemKind::Function,
                symbol
                    .signature
                    .unwrap_or_else(|| placeholder_signature(&symbol.name, symbol.arity)),
            ),
        };
        Candidate {
            name: symbol.name,
            arity: Some(symbol.arity),
            kind,
            detail,
            documentation,
        }
    }

    pub(crate) fn fields(&self, value: &Value, hint: &str) -> Vec<Candidate> {
        let Some(fields) = value.fields() else {
            return Vec::new();
        };
        let printer = Printer::new(self.config.value_width, self.config.value_item_limit);
        fields
            .iter()
            .filter(|(name, _)| name.starts_with(hint) && is_field_name(name))
            .map(|(name, v)| {
                let mut candidate = Candidate::new(name.to_string(), ItemKind::Field, "field");
                candidate.documentation = Some(docs::value_docs(v, &printer));
                candidate
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_signatures() {
        assert_eq!(placeholder_signature("now", 0), "now()");
        assert_eq!(placeholder_signature("put", 3), "put(arg1, arg2, arg3)");
    }

    #[test]
    fn field_names_must_be_identifiers() {
        assert!(is_field_name("foo"));
        assert!(is_field_name("valid?"));
        assert!(is_field_name("_x1"));
        assert!(!is_field_name("with space"));
        assert!(!is_field_name("1st"));
        assert!(!is_field_name("a?b"));
        assert!(!is_field_name(""));
    }
}
