use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct StringModule;

impl StringModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for StringModule {
    fn name(&self) -> &str {
        "String"
    }

    fn description(&self) -> &str {
        "UTF-8 encoded binaries"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("String")
            .doc("Strings in Elixir are UTF-8 encoded binaries.")
            .export(
                ExportedSymbol::function("split", 3)
                    .signature("split(string, pattern, options \\\\ [])")
                    .spec("split(t(), pattern() | Regex.t(), keyword()) :: [t()]")
                    .doc("Divides a string into parts based on a pattern.")
                    .defaults(&[2]),
            )
            .export(ExportedSymbol::function("split", 2))
            .export(
                ExportedSymbol::function("split", 1)
                    .signature("split(binary)")
                    .doc("Divides a string into substrings at each Unicode whitespace occurrence."),
            )
            .export(
                ExportedSymbol::function("length", 1)
                    .signature("length(string)")
                    .spec("length(t()) :: non_neg_integer()")
                    .doc("Returns the number of Unicode graphemes in a UTF-8 string."),
            )
            .export(
                ExportedSymbol::function("upcase", 2)
                    .signature("upcase(string, mode \\\\ :default)")
                    .doc("Converts all characters in the given string to uppercase according to `mode`.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("upcase", 1))
            .export(
                ExportedSymbol::function("downcase", 2)
                    .signature("downcase(string, mode \\\\ :default)")
                    .doc("Converts all characters in the given string to lowercase according to `mode`.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("downcase", 1))
            .export(ExportedSymbol::function("trim", 1).signature("trim(string)").doc("Returns a string where all leading and trailing Unicode whitespaces have been removed."))
            .export(
                ExportedSymbol::function("starts_with?", 2)
                    .signature("starts_with?(string, prefix)")
                    .doc("Returns `true` if `string` starts with any of the prefixes given."),
            )
            .export(
                ExportedSymbol::function("contains?", 2)
                    .signature("contains?(string, contents)")
                    .doc("Searches if `string` contains any of the given `contents`."),
            )
            .export(ExportedSymbol::type_("t", 0).spec("t() :: binary()").doc("A UTF-8 encoded binary."))
            .export(ExportedSymbol::type_("pattern", 0))
    }
}

/// The `String.Chars` protocol, nested under `String`
#[derive(Debug, Default)]
pub struct StringCharsModule;

impl StringCharsModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for StringCharsModule {
    fn name(&self) -> &str {
        "String.Chars"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("String.Chars")
            .doc("The `String.Chars` protocol is responsible for converting a structure to a binary.")
            .export(
                ExportedSymbol::function("to_string", 1)
                    .signature("to_string(term)")
                    .spec("to_string(t()) :: String.t()")
                    .doc("Converts `term` to a string."),
            )
            .export(ExportedSymbol::type_("t", 0))
    }
}
