use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

/// Functions and macros imported into every scope
#[derive(Debug, Default)]
pub struct KernelModule;

impl KernelModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for KernelModule {
    fn name(&self) -> &str {
        "Kernel"
    }

    fn description(&self) -> &str {
        "Default functions and macros available in every scope"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("Kernel")
            .doc(
                "`Kernel` is the default environment.\n\n\
                 Its functions and macros can be called without the `Kernel` prefix.",
            )
            .export(
                ExportedSymbol::function("length", 1)
                    .signature("length(list)")
                    .spec("length(list()) :: non_neg_integer()")
                    .doc("Returns the length of `list`.\n\nAllowed in guard tests. Inlined by the compiler."),
            )
            .export(
                ExportedSymbol::function("hd", 1)
                    .signature("hd(list)")
                    .spec("hd(nonempty_maybe_improper_list(elem, any())) :: elem when elem: term()")
                    .doc("Returns the head of a list. Raises `ArgumentError` if the list is empty."),
            )
            .export(
                ExportedSymbol::function("tl", 1)
                    .signature("tl(list)")
                    .doc("Returns the tail of a list. Raises `ArgumentError` if the list is empty."),
            )
            .export(
                ExportedSymbol::function("abs", 1)
                    .signature("abs(number)")
                    .spec("abs(number()) :: number()")
                    .doc("Returns an integer or float which is the arithmetical absolute value of `number`."),
            )
            .export(
                ExportedSymbol::function("max", 2)
                    .signature("max(first, second)")
                    .doc("Returns the biggest of the two given terms according to their structural comparison."),
            )
            .export(
                ExportedSymbol::function("min", 2)
                    .signature("min(first, second)")
                    .doc("Returns the smallest of the two given terms according to their structural comparison."),
            )
            .export(
                ExportedSymbol::function("map_size", 1)
                    .signature("map_size(map)")
                    .spec("map_size(map()) :: non_neg_integer()")
                    .doc("Returns the size of a map."),
            )
            .export(
                ExportedSymbol::function("elem", 2)
                    .signature("elem(tuple, index)")
                    .doc("Gets the element at the zero-based `index` in `tuple`."),
            )
            .export(
                ExportedSymbol::function("inspect", 2)
                    .signature("inspect(term, opts \\\\ [])")
                    .spec("inspect(Inspect.t(), keyword()) :: String.t()")
                    .doc("Inspects the given argument according to the `Inspect` protocol.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("inspect", 1))
            .export(
                ExportedSymbol::function("to_string", 1)
                    .signature("to_string(term)")
                    .doc("Converts the argument to a string according to the `String.Chars` protocol."),
            )
            .export(ExportedSymbol::function("is_integer", 1).signature("is_integer(term)"))
            .export(ExportedSymbol::function("is_list", 1).signature("is_list(term)"))
            .export(ExportedSymbol::function("is_map", 1).signature("is_map(term)"))
            .export(
                ExportedSymbol::function("apply", 3)
                    .signature("apply(module, function_name, args)")
                    .doc("Invokes the given function from `module` with the list of arguments `args`."),
            )
            .export(ExportedSymbol::function("struct", 2).hidden())
            .export(
                ExportedSymbol::macro_("if", 2)
                    .signature("if(condition, clauses)")
                    .doc("Provides an `if/2` macro."),
            )
            .export(
                ExportedSymbol::macro_("unless", 2)
                    .signature("unless(condition, clauses)")
                    .doc("Provides an `unless` macro."),
            )
            .export(
                ExportedSymbol::macro_("is_nil", 1)
                    .signature("is_nil(term)")
                    .doc("Returns `true` if `term` is `nil`, `false` otherwise."),
            )
            .export(
                ExportedSymbol::macro_("def", 2)
                    .signature("def(call, expr \\\\ nil)")
                    .doc("Defines a public function with the given name and body.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::macro_("def", 1))
            .export(
                ExportedSymbol::macro_("defmodule", 2)
                    .signature("defmodule(alias, do_block)")
                    .doc("Defines a module given by name with the given contents."),
            )
            .export(
                ExportedSymbol::macro_("raise", 1)
                    .signature("raise(message)")
                    .doc("Raises an exception."),
            )
            .export(ExportedSymbol::type_("as_boolean", 1))
    }
}
