use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct ListModule;

impl ListModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for ListModule {
    fn name(&self) -> &str {
        "List"
    }

    fn description(&self) -> &str {
        "Linked lists"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("List")
            .doc("Linked lists hold zero, one, or more elements in the chosen order.")
            .export(
                ExportedSymbol::function("first", 2)
                    .signature("first(list, default \\\\ nil)")
                    .doc("Returns the first element in `list` or `default` if `list` is empty.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("first", 1))
            .export(
                ExportedSymbol::function("last", 2)
                    .signature("last(list, default \\\\ nil)")
                    .doc("Returns the last element in `list` or `default` if `list` is empty.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("last", 1))
            .export(
                ExportedSymbol::function("flatten", 1)
                    .signature("flatten(list)")
                    .doc("Flattens the given `list` of nested lists."),
            )
            .export(
                ExportedSymbol::function("wrap", 1)
                    .signature("wrap(term)")
                    .doc("Wraps `term` in a list if this is not list."),
            )
            .export(
                ExportedSymbol::function("keyfind", 4)
                    .signature("keyfind(list, key, position, default \\\\ nil)")
                    .doc("Receives a list of tuples and returns the first tuple where the element at `position` matches `key`.")
                    .defaults(&[3]),
            )
            .export(ExportedSymbol::function("keyfind", 3))
    }
}
