pub mod enumerable;
pub mod erlang;
pub mod integer;
pub mod io;
pub mod kernel;
pub mod list;
pub mod map;
pub mod special_forms;
pub mod string;
pub mod system;


use anyhow::{Context, Result};
use cellsense_core::module::{ManifestRegistry, Module};
use once_cell::sync::Lazy;
use tracing::info;

static MODULES: Lazy<Vec<Box<dyn Module>>> = Lazy::new(|| {
    vec![
        Box::new(kernel::KernelModule::new()),
        Box::new(special_forms::SpecialFormsModule::new()),
        Box::new(system::SystemModule::new()),
        Box::new(enumerable::EnumModule::new()),
        Box::new(map::MapModule::new()),
        Box::new(list::ListModule::new()),
        Box::new(string::StringModule::new()),
        Box::new(string::StringCharsModule::new()),
        Box::new(integer::IntegerModule::new()),
        Box::new(io::IoModule::new()),
        Box::new(erlang::ListsModule::new()),
        Box::new(erlang::MathModule::new()),
    ]
});

/// Every standard namespace module, in registration order
pub fn stdlib_modules() -> &'static [Box<dyn Module>] {
    &MODULES
}

/// Register all standard namespaces with the given registry
pub fn register_stdlib_namespaces(registry: &ManifestRegistry) -> Result<()> {
    for module in stdlib_modules() {
        registry
            .register_module(module.as_ref())
            .with_context(|| format!("registering standard namespace '{}'", module.name()))?;
    }
    info!(count = MODULES.len(), "registered standard namespaces");
    Ok(())
}

/// A fresh registry preloaded with the standard namespaces
pub fn stdlib_registry() -> Result<ManifestRegistry> {
    let registry = ManifestRegistry::new();
    register_stdlib_namespaces(&registry)?;
    Ok(registry)
}
