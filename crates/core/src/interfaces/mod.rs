//! Core interfaces for the import pipeline
//!
//! Host collaborators live in [`host`]; the resolver traits are the seams
//! callers swap out (for example with fixtures in tests).

pub mod build_resolver;
pub mod host;
pub mod project_resolver;

pub use build_resolver::BuildResolver;
pub use host::{
    Build, ContributionTarget, EnvironmentContribution, Project, ProjectRegistry, RunningBuild,
};
pub use project_resolver::ProjectResolver;
