//! Host implementations
//!
//! - [`memory`]: values held in memory
//! - [`json`]: a directory of JSON build records

pub mod json;
pub mod memory;

pub use json::{JsonBuild, JsonBuildRecord, JsonProject, JsonRegistry};
pub use memory::{MemoryBuild, MemoryProject, MemoryRegistry};
