use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct EnumModule;

impl EnumModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for EnumModule {
    fn name(&self) -> &str {
        "Enum"
    }

    fn description(&self) -> &str {
        "Eager algorithms over enumerables"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("Enum")
            .doc(
                "Functions for working with collections (known as enumerables).\n\n\
                 Lists, maps and ranges all implement the `Enumerable` protocol.",
            )
            .export(
                ExportedSymbol::function("map", 2)
                    .signature("map(enumerable, fun)")
                    .spec("map(t(), (element() -> any())) :: list()")
                    .doc("Returns a list where each element is the result of invoking `fun` on each corresponding element of `enumerable`."),
            )
            .export(
                ExportedSymbol::function("filter", 2)
                    .signature("filter(enumerable, fun)")
                    .spec("filter(t(), (element() -> as_boolean(term()))) :: list()")
                    .doc("Filters the `enumerable`, i.e. returns only those elements for which `fun` returns a truthy value."),
            )
            .export(
                ExportedSymbol::function("reduce", 2)
                    .signature("reduce(enumerable, fun)")
                    .spec("reduce(t(), (element(), acc() -> acc())) :: acc()")
                    .doc("Invokes `fun` for each element in the `enumerable` using the first element as the accumulator."),
            )
            .export(
                ExportedSymbol::function("reduce", 3)
                    .signature("reduce(enumerable, acc, fun)")
                    .spec("reduce(t(), acc(), (element(), acc() -> acc())) :: acc()")
                    .doc("Invokes `fun` for each element in the `enumerable` with the accumulator."),
            )
            .export(
                ExportedSymbol::function("count", 1)
                    .signature("count(enumerable)")
                    .spec("count(t()) :: non_neg_integer()")
                    .doc("Returns the size of the `enumerable`."),
            )
            .export(
                ExportedSymbol::function("count", 2)
                    .signature("count(enumerable, fun)")
                    .doc("Returns the count of elements in the `enumerable` for which `fun` returns a truthy value."),
            )
            .export(
                ExportedSymbol::function("join", 2)
                    .signature("join(enumerable, joiner \\\\ \"\")")
                    .spec("join(t(), String.t()) :: String.t()")
                    .doc("Joins the given `enumerable` into a string using `joiner` as a separator.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("join", 1))
            .export(
                ExportedSymbol::function("sort", 1)
                    .signature("sort(enumerable)")
                    .doc("Sorts the `enumerable` according to Erlang's term ordering."),
            )
            .export(
                ExportedSymbol::function("max", 1)
                    .signature("max(enumerable)")
                    .doc("Returns the maximal element in the `enumerable` according to Erlang's term ordering."),
            )
            .export(
                ExportedSymbol::function("min", 1)
                    .signature("min(enumerable)")
                    .doc("Returns the minimal element in the `enumerable` according to Erlang's term ordering."),
            )
            .export(
                ExportedSymbol::function("zip", 2)
                    .signature("zip(enumerable1, enumerable2)")
                    .doc("Zips corresponding elements from two enumerables into a list of tuples."),
            )
            .export(ExportedSymbol::function("into", 2).signature("into(enumerable, collectable)"))
            .export(
                ExportedSymbol::type_("t", 0)
                    .spec("t() :: Enumerable.t()")
                    .doc("Any enumerable."),
            )
            .export(ExportedSymbol::type_("acc", 0))
            .export(ExportedSymbol::type_("element", 0))
    }
}
