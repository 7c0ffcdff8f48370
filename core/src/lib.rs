pub mod complete;
pub mod config;
pub mod env;
pub mod format;
pub mod module;
pub mod registry;
pub mod token;
pub mod val;

#[cfg(test)]
mod env_test;

pub use complete::{Completer, CompletionItem, ItemKind, complete};
pub use config::CompletionConfig;
pub use env::{Bindings, Environment, ImportFilter, SymbolRef};
pub use module::{ManifestRegistry, Module, NamespaceManifest};
pub use registry::{Documentation, ExportedSymbol, NamespaceRegistry, SymbolKind};
pub use val::Value;
