#[cfg(test)]
mod tests {
    use crate::env::{Bindings, Environment, ImportFilter, SymbolRef, Visibility};
    use crate::val::Value;

    fn refs(list: &[(&str, u8)]) -> Vec<SymbolRef> {
        list.iter().map(|(n, a)| SymbolRef::new(*n, *a)).collect()
    }

    #[test]
    fn test_hidden_bindings_are_invisible() {
        let mut bindings = Bindings::new();
        bindings.insert("x", Value::Int(1));
        bindings.insert_hidden("_gen", Value::Int(2));
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("x"), Some(&Value::Int(1)));
        assert_eq!(bindings.get("_gen"), None);
        assert!(bindings.binding("_gen").is_some());

        assert!(bindings.hide("x"));
        assert!(!bindings.hide("missing"));
        assert_eq!(bindings.visible().count(), 0);

        assert!(bindings.remove("x").is_some());
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_alias_lookup() {
        let env = Environment::new().with_alias("Sys", "System");
        assert_eq!(env.lookup_alias("Sys"), Some("System"));
        assert_eq!(env.lookup_alias("System"), None);
    }

    #[test]
    fn test_never_imported() {
        let env = Environment::new().with_import("Enum", ImportFilter::All);
        assert_eq!(env.import_visibility("Map"), None);
        assert_eq!(env.import_visibility("Enum"), Some(Visibility::All));
    }

    #[test]
    fn test_only_imports_accumulate() {
        let env = Environment::new()
            .with_import("Enum", ImportFilter::Only(refs(&[("map", 2)])))
            .with_import("Enum", ImportFilter::Only(refs(&[("count", 1)])));
        let vis = env.import_visibility("Enum").unwrap();
        assert!(vis.admits("map", 2));
        assert!(vis.admits("count", 1));
        assert!(!vis.admits("map", 3));
        assert!(!vis.admits("reduce", 2));
    }

    #[test]
    fn test_except_after_only_narrows() {
        let env = Environment::new()
            .with_import("Enum", ImportFilter::Only(refs(&[("map", 2), ("count", 1)])))
            .with_import("Enum", ImportFilter::Except(refs(&[("map", 2)])));
        let vis = env.import_visibility("Enum").unwrap();
        assert!(!vis.admits("map", 2));
        assert!(vis.admits("count", 1));
        assert!(!vis.admits("reduce", 2));
    }

    #[test]
    fn test_filters_track_each_arity() {
        let env = Environment::new()
            .with_import("Enum", ImportFilter::Only(refs(&[("map", 2), ("map", 3)])))
            .with_import("Enum", ImportFilter::Except(refs(&[("map", 2)])));
        let vis = env.import_visibility("Enum").unwrap();
        assert!(!vis.admits("map", 2));
        assert!(vis.admits("map", 3));

        let env = env.with_import("Enum", ImportFilter::Except(refs(&[("map", 3)])));
        let vis = env.import_visibility("Enum").unwrap();
        assert!(!vis.admits("map", 3));
        assert!(!vis.admits("ma", 3));
    }

    #[test]
    fn test_except_then_only_restores() {
        let env = Environment::new()
            .with_import("Enum", ImportFilter::Except(refs(&[("map", 2), ("max", 1)])))
            .with_import("Enum", ImportFilter::Only(refs(&[("map", 2)])));
        let vis = env.import_visibility("Enum").unwrap();
        assert!(vis.admits("map", 2));
        assert!(!vis.admits("max", 1));
        assert!(vis.admits("reduce", 2));
    }

    #[test]
    fn test_plain_import_resets_filters() {
        let env = Environment::new()
            .with_import("Enum", ImportFilter::Except(refs(&[("map", 2)])))
            .with_import("Enum", ImportFilter::All)
            .with_import("Enum", ImportFilter::Only(refs(&[("count", 1)])));
        assert_eq!(env.import_visibility("Enum"), Some(Visibility::All));
    }

    #[test]
    fn test_imported_namespaces_by_last_import() {
        let env = Environment::new()
            .with_import("Enum", ImportFilter::All)
            .with_import("Map", ImportFilter::All)
            .with_import("Enum", ImportFilter::Only(refs(&[("map", 2)])));
        assert_eq!(env.imported_namespaces(), vec!["Map", "Enum"]);
    }

    #[test]
    fn test_requires_dedup() {
        let env = Environment::new().with_require("Logger").with_require("Logger");
        assert_eq!(env.requires, vec!["Logger".to_string()]);
    }

    #[test]
    fn test_environment_from_json() {
        let json = r#"{
            "namespace": "Cell",
            "aliases": {"Sys": "System"},
            "imports": [
                {"namespace": "Enum", "filter": {"only": [{"name": "map", "arity": 2}]}},
                {"namespace": "Map"}
            ],
            "requires": ["Logger"]
        }"#;
        let env: Environment = serde_json::from_str(json).unwrap();
        assert_eq!(env.namespace.as_deref(), Some("Cell"));
        assert_eq!(env.lookup_alias("Sys"), Some("System"));
        assert_eq!(env.imports[0].filter, ImportFilter::Only(refs(&[("map", 2)])));
        assert_eq!(env.imports[1].filter, ImportFilter::All);
        assert_eq!(env.requires, vec!["Logger".to_string()]);

        let empty: Environment = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Environment::new());
    }
}
