use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

/// Built-in syntactic forms; they cannot be overridden, only shadowed
#[derive(Debug, Default)]
pub struct SpecialFormsModule;

impl SpecialFormsModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for SpecialFormsModule {
    fn name(&self) -> &str {
        "Kernel.SpecialForms"
    }

    fn description(&self) -> &str {
        "Language building blocks"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("Kernel.SpecialForms")
            .doc("Special forms are the basic building blocks of the language and cannot be overridden.")
            .export(
                ExportedSymbol::macro_("case", 2)
                    .signature("case(condition, clauses)")
                    .doc("Matches the given expression against the given clauses."),
            )
            .export(
                ExportedSymbol::macro_("cond", 1)
                    .signature("cond(clauses)")
                    .doc("Evaluates the expression corresponding to the first clause that evaluates to a truthy value."),
            )
            .export(
                ExportedSymbol::macro_("fn", 1)
                    .signature("fn(clauses)")
                    .doc("Defines an anonymous function."),
            )
            .export(
                ExportedSymbol::macro_("for", 1)
                    .signature("for(args)")
                    .doc("Comprehensions allow you to quickly build a data structure from an enumerable or a bitstring."),
            )
            .export(
                ExportedSymbol::macro_("with", 1)
                    .signature("with(args)")
                    .doc("Used to combine matching clauses."),
            )
            .export(
                ExportedSymbol::macro_("alias", 2)
                    .signature("alias(module, opts)")
                    .doc("`alias/2` is used to set up aliases, often useful with modules' names."),
            )
            .export(
                ExportedSymbol::macro_("import", 2)
                    .signature("import(module, opts)")
                    .doc("Imports functions and macros from other modules."),
            )
            .export(
                ExportedSymbol::macro_("require", 2)
                    .signature("require(module, opts)")
                    .doc("Requires a module in order to use its macros."),
            )
            .export(
                ExportedSymbol::macro_("quote", 2)
                    .signature("quote(opts, block)")
                    .doc("Gets the representation of any expression."),
            )
            .export(ExportedSymbol::macro_("__aliases__", 1).hidden())
    }
}
