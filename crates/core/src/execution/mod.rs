//! Import execution

pub mod config;
pub mod executor;
pub mod expand;
pub mod result;

pub use config::ImportVarsConfiguration;
pub use executor::ImportExecutor;
pub use expand::expand;
pub use result::ImportResult;
