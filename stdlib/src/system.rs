use cellsense_core::module::{Module, NamespaceManifest};
use cellsense_core::registry::ExportedSymbol;

#[derive(Debug, Default)]
pub struct SystemModule;

impl SystemModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for SystemModule {
    fn name(&self) -> &str {
        "System"
    }

    fn description(&self) -> &str {
        "Interaction with the VM and the host system"
    }

    fn manifest(&self) -> NamespaceManifest {
        NamespaceManifest::new("System")
            .doc(
                "The `System` module provides functions that interact directly with the VM or the host system.\n\n\
                 ## Time\n\nThe `System` module also provides functions that work with time.",
            )
            .export(
                ExportedSymbol::function("version", 0)
                    .signature("version()")
                    .spec("version() :: String.t()")
                    .doc("Elixir version information.\n\nReturns Elixir's version as binary."),
            )
            .export(
                ExportedSymbol::function("otp_release", 0)
                    .signature("otp_release()")
                    .spec("otp_release() :: String.t()")
                    .doc("Returns the OTP release number."),
            )
            .export(
                ExportedSymbol::function("get_env", 2)
                    .signature("get_env(varname, default \\\\ nil)")
                    .spec("get_env(String.t(), String.t() | nil) :: String.t() | nil")
                    .doc("Returns the value of the given environment variable.")
                    .defaults(&[1]),
            )
            .export(ExportedSymbol::function("get_env", 1))
            .export(
                ExportedSymbol::function("get_env", 0)
                    .signature("get_env()")
                    .doc("Returns all system environment variables."),
            )
            .export(
                ExportedSymbol::function("put_env", 2)
                    .signature("put_env(varname, value)")
                    .doc("Sets an environment variable value."),
            )
            .export(
                ExportedSymbol::function("monotonic_time", 0)
                    .signature("monotonic_time()")
                    .doc("Returns the current monotonic time in the `:native` time unit."),
            )
            .export(
                ExportedSymbol::function("halt", 1)
                    .signature("halt(status \\\\ 0)")
                    .doc("Immediately halts the VM.")
                    .defaults(&[0]),
            )
            .export(ExportedSymbol::function("halt", 0))
            .export(ExportedSymbol::type_("time_unit", 0))
    }
}
