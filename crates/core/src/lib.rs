//! buildvars - import environment variables from one CI build into another
//!
//! This crate provides:
//! - Project and build resolution against a host-supplied registry
//! - Two transfer strategies: verbatim copy and templated, deferred contribution
//! - The import executor that ties resolution and transfer together
//! - Build selection lists filtered by result
//! - The host extension points (build step and parameter) and two hosts
//!   (in-memory and a directory of JSON build records)
pub mod config;
pub mod error;
pub mod execution;
pub mod integration;
pub mod interfaces;
pub mod options;
pub mod services;
pub mod store;
pub mod transfer;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use execution::{ImportExecutor, ImportResult, ImportVarsConfiguration};
pub use integration::{ImportBuildStep, OtherBuildParameterDefinition, StepOutcome};
pub use transfer::{TransferAgent, VarNameTemplate, is_valid_template};
