//! Completion engine: turns the text before the cursor into ranked
//! suggestions drawn from bindings, the lexical environment and the
//! namespace registry.

mod classify;
mod docs;
mod item;
mod merge;
mod providers;
mod resolve;


use tracing::{debug, trace};

use crate::config::{CompletionConfig, DEFAULT_CONFIG};
use crate::env::{Bindings, Environment};
use crate::registry::NamespaceRegistry;
use crate::token::Chain;
use classify::{Strategy, classify};
use item::Candidate;
use resolve::Target;

pub use item::{CompletionItem, ItemKind};

/// Completion entry point bound to a registry and a configuration.
///
/// Holds no state of its own; every call queries the registry afresh, so a
/// single `Completer` may serve concurrent requests.
#[derive(Clone, Copy)]
pub struct Completer<'a> {
    registry: &'a dyn NamespaceRegistry,
    config: &'a CompletionConfig,
}

impl<'a> Completer<'a> {
    pub fn new(registry: &'a dyn NamespaceRegistry) -> Self {
        Self {
            registry,
            config: &DEFAULT_CONFIG,
        }
    }

    pub fn with_config(registry: &'a dyn NamespaceRegistry, config: &'a CompletionConfig) -> Self {
        Self { registry, config }
    }

    /// Suggestions for the chain ending at the end of `text`.
    ///
    /// Never fails: unresolvable or malformed input yields an empty list.
    pub fn complete(&self, text: &str, bindings: &Bindings, env: &Environment) -> Vec<CompletionItem> {
        let chain = Chain::parse(text);
        let strategy = classify(&chain, bindings);
        debug!(?strategy, "completing");
        let items = merge::rank(self.candidates(&strategy, bindings, env));
        trace!(count = items.len(), "completion done");
        items
    }

    /// Items whose name equals the hint exactly, for hover-style lookups
    pub fn details(&self, text: &str, bindings: &Bindings, env: &Environment) -> Vec<CompletionItem> {
        let chain = Chain::parse(text);
        if chain.hint.is_empty() {
            return Vec::new();
        }
        let mut items = self.complete(text, bindings, env);
        items.retain(|item| item.insert_text == chain.hint);
        items
    }

    fn candidates(&self, strategy: &Strategy<'_>, bindings: &Bindings, env: &Environment) -> Vec<Vec<Candidate>> {
        match *strategy {
            Strategy::Nothing => Vec::new(),
            Strategy::NamespaceLiteral { hint } => vec![self.literal_namespaces(hint)],
            Strategy::QualifiedNamespace {
                segments,
                hint,
                literal,
            } => match self.resolve_namespace_chain(segments, env, literal) {
                Some(target) => self.target_candidates(&target, hint),
                None => Vec::new(),
            },
            Strategy::VariableMember { segments, hint } => match self.resolve_variable_chain(segments, bindings, env) {
                Some(target) => self.target_candidates(&target, hint),
                None => Vec::new(),
            },
            Strategy::Bare { hint, scope } => {
                let mut groups = Vec::with_capacity(3);
                if scope.variables {
                    groups.push(self.variables(hint, bindings));
                }
                if scope.callables {
                    groups.push(self.bare_namespaces(hint, env));
                    groups.push(self.bare_callables(hint, env));
                }
                groups
            }
        }
    }

    fn target_candidates(&self, target: &Target<'_>, hint: &str) -> Vec<Vec<Candidate>> {
        match target {
            Target::Root => vec![self.root_level(hint)],
            Target::Namespace(namespace) => vec![
                self.child_namespaces(namespace, hint),
                self.namespace_members(namespace, hint),
            ],
            Target::Value(value) => vec![self.fields(value, hint)],
        }
    }
}

/// Complete `text` against `registry` with the default configuration
pub fn complete(
    registry: &dyn NamespaceRegistry,
    text: &str,
    bindings: &Bindings,
    env: &Environment,
) -> Vec<CompletionItem> {
    Completer::new(registry).complete(text, bindings, env)
}
