use tracing::debug;

use super::Completer;
use crate::env::{Bindings, Environment};
use crate::val::Value;

/// What a chain's segments resolved to
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Target<'v> {
    /// Container of every top-level namespace
    Root,
    Namespace(String),
    Value(&'v Value),
}

impl Completer<'_> {
    /// A loaded namespace, or the parent of at least one
    pub(crate) fn namespace_known(&self, name: &str) -> bool {
        self.registry.namespace_exists(name) || !self.registry.list_namespaces(&format!("{}.", name)).is_empty()
    }

    pub(crate) fn resolve_namespace_chain(
        &self,
        segments: &[String],
        env: &Environment,
        literal: bool,
    ) -> Option<Target<'static>> {
        let (first, rest) = segments.split_first()?;

        if literal {
            return self.walk_namespace(first.clone(), rest);
        }

        if self.config.root_namespace.as_deref() == Some(first.as_str()) && !self.registry.namespace_exists(first) {
            return match rest.split_first() {
                None => Some(Target::Root),
                Some((head, tail)) => self.walk_namespace(head.clone(), tail),
            };
        }

        let root = env.lookup_alias(first).unwrap_or(first).to_string();
        self.walk_namespace(root, rest)
    }

    pub(crate) fn resolve_variable_chain<'v>(
        &self,
        segments: &[String],
        bindings: &'v Bindings,
        env: &Environment,
    ) -> Option<Target<'v>> {
        let (first, rest) = segments.split_first()?;
        let mut current = bindings.get(first)?;

        for (idx, segment) in rest.iter().enumerate() {
            if let Some(name) = current.namespace_ref() {
                return self.resolve_namespace_reference(name, &rest[idx..], env);
            }
            let Some(fields) = current.fields() else {
                debug!(segment = %segment, kind = current.type_name(), "value has no fields");
                return None;
            };
            match fields.get(segment.as_str()) {
                Some(next) => current = next,
                None => {
                    debug!(segment = %segment, "no such field");
                    return None;
                }
            }
        }

        match current.namespace_ref() {
            Some(name) => self.resolve_namespace_reference(name, &[], env),
            None => Some(Target::Value(current)),
        }
    }

    // a variable bound to a namespace may hold an alias short name
    fn resolve_namespace_reference(&self, name: &str, rest: &[String], env: &Environment) -> Option<Target<'static>> {
        let root = env.lookup_alias(name).unwrap_or(name).to_string();
        self.walk_namespace(root, rest)
    }

    fn walk_namespace(&self, mut current: String, rest: &[String]) -> Option<Target<'static>> {
        if !self.namespace_known(&current) {
            debug!(namespace = %current, "unknown namespace");
            return None;
        }
        for segment in rest {
            current.push('.');
            current.push_str(segment);
            if !self.namespace_known(&current) {
                debug!(namespace = %current, "unknown namespace");
                return None;
            }
        }
        Some(Target::Namespace(current))
    }
}
