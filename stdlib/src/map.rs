use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct MapModule;

impl MapModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for MapModule {
    fn name(&self) -> &str {
        "Map"
    }

    fn description(&self) -> &str {
        "Key-value stores"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("Map")
            .doc("Maps are the \"go to\" key-value data structure.")
            .export(
                ExportedSymbol::function("get", 3)
                    .signature("get(map, key, default \\\\ nil)")
                    .spec("get(map(), key(), value()) :: value()")
                    .doc("Gets the value for a specific `key` in `map`.")
                    .defaults(&[2]),
            )
            .export(ExportedSymbol::function("get", 2))
            .export(
                ExportedSymbol::function("put", 3)
                    .signature("put(map, key, value)")
                    .spec("put(map(), key(), value()) :: map()")
                    .doc("Puts the given `value` under `key` in `map`."),
            )
            .export(
                ExportedSymbol::function("delete", 2)
                    .signature("delete(map, key)")
                    .doc("Deletes the entry in `map` for a specific `key`."),
            )
            .export(
                ExportedSymbol::function("fetch", 2)
                    .signature("fetch(map, key)")
                    .doc("Fetches the value for a specific `key` in the given `map`."),
            )
            .export(
                ExportedSymbol::function("fetch!", 2)
                    .signature("fetch!(map, key)")
                    .doc("Fetches the value for a specific `key` in the given `map`, erroring out if `map` doesn't contain `key`."),
            )
            .export(
                ExportedSymbol::function("has_key?", 2)
                    .signature("has_key?(map, key)")
                    .doc("Returns whether the given `key` exists in the given `map`."),
            )
            .export(ExportedSymbol::function("keys", 1).signature("keys(map)").doc("Returns all keys from `map`."))
            .export(ExportedSymbol::function("values", 1).signature("values(map)").doc("Returns all values from `map`."))
            .export(
                ExportedSymbol::function("merge", 2)
                    .signature("merge(map1, map2)")
                    .doc("Merges two maps into one."),
            )
            .export(ExportedSymbol::function("new", 0).signature("new()").doc("Returns a new empty map."))
            .export(ExportedSymbol::type_("key", 0))
            .export(ExportedSymbol::type_("value", 0))
    }
}
