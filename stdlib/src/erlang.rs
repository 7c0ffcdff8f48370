//! Lowercase host-runtime namespaces, reachable only through `:name` literals.

use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct ListsModule;

impl ListsModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for ListsModule {
    fn name(&self) -> &str {
        "lists"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("lists")
            .export(ExportedSymbol::function("map", 2).signature("map(fun, list1)"))
            .export(ExportedSymbol::function("foldl", 3).signature("foldl(fun, acc0, list)"))
            .export(ExportedSymbol::function("reverse", 1).signature("reverse(list1)"))
            .export(ExportedSymbol::function("reverse", 2).signature("reverse(list1, tail)"))
            .export(ExportedSymbol::function("seq", 2).signature("seq(from, to)"))
            .export(ExportedSymbol::function("sum", 1).signature("sum(list)"))
    }
}

#[derive(Debug, Default)]
pub struct MathModule;

impl MathModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for MathModule {
    fn name(&self) -> &str {
        "math"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("math")
            .export(ExportedSymbol::function("pi", 0).signature("pi()").doc("Ratio of the circumference of a circle to its diameter."))
            .export(ExportedSymbol::function("sqrt", 1).signature("sqrt(x)"))
            .export(ExportedSymbol::function("pow", 2).signature("pow(x, y)"))
            .export(ExportedSymbol::function("log", 1).signature("log(x)"))
            .export(ExportedSymbol::function("sin", 1).signature("sin(x)"))
            .export(ExportedSymbol::function("cos", 1).signature("cos(x)"))
    }
}
