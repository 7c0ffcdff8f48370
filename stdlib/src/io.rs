use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct IoModule;

impl IoModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for IoModule {
    fn name(&self) -> &str {
        "IO"
    }

    fn description(&self) -> &str {
        "Standard input and output"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("IO")
            .doc("Functions handling input/output (IO).")
            .export(
                ExportedSymbol::function("puts", 2)
                    .signature("puts(device \\\\ :stdio, item)")
                    .spec("puts(device(), chardata() | String.Chars.t()) :: :ok")
                    .doc("Writes `item` to the given `device`, similar to `write/2`, but adds a newline at the end.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("puts", 1))
            .export(
                ExportedSymbol::function("inspect", 2)
                    .signature("inspect(item, opts \\\\ [])")
                    .doc("Inspects and writes the given `item` to the standard output.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("inspect", 1))
            .export(
                ExportedSymbol::function("gets", 2)
                    .signature("gets(device \\\\ :stdio, prompt)")
                    .doc("Reads a line from the IO `device`.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("gets", 1))
            .export(ExportedSymbol::type_("device", 0))
            .export(ExportedSymbol::type_("chardata", 0))
    }
}
