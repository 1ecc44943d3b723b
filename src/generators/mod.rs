//! Generators invoked by `ignite generate`.

pub mod registry;

pub use registry::{
    Generator, GeneratorContext, GeneratorRegistry, ModuleGenerator, COMMAND_NAMESPACE,
    GENERATOR_MODULE_PREFIX,
};
