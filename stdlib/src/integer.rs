use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct IntegerModule;

impl IntegerModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for IntegerModule {
    fn name(&self) -> &str {
        "Integer"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("Integer")
            .doc("Functions for working with integers.")
            .export(
                ExportedSymbol::function("parse", 2)
                    .signature("parse(binary, base \\\\ 10)")
                    .spec("parse(binary(), 2..36) :: {integer(), remainder_of_binary :: binary()} | :error")
                    .doc("Parses a text representation of an integer.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("parse", 1))
            .export(
                ExportedSymbol::function("to_string", 2)
                    .signature("to_string(integer, base \\\\ 10)")
                    .doc("Returns a binary which corresponds to the text representation of `integer` in the given `base`.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("to_string", 1))
            .export(
                ExportedSymbol::function("digits", 2)
                    .signature("digits(integer, base \\\\ 10)")
                    .doc("Returns the ordered digits for the given `integer`.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("digits", 1))
            .export(ExportedSymbol::function("pow", 2).signature("pow(base, exponent)").doc("Computes `base` raised to power of `exponent`."))
            .export(ExportedSymbol::macro_("is_even", 1).signature("is_even(integer)").doc("Determines if `integer` is even."))
            .export(ExportedSymbol::macro_("is_odd", 1).signature("is_odd(integer)").doc("Determines if `integer` is odd."))
    }
}
