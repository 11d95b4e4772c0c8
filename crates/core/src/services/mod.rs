//! Service implementations for the import pipeline
//!
//! Concrete implementations of the resolver traits in [`crate::interfaces`].

pub mod build_number_resolver;
pub mod named_build_resolver;
pub mod registry_project_resolver;

pub use build_number_resolver::BuildNumberResolver;
pub use named_build_resolver::NamedBuildResolver;
pub use registry_project_resolver::RegistryProjectResolver;
