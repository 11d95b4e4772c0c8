pub mod build_result;

pub use build_result::BuildResult;

use std::collections::BTreeMap;

/// All environment variables visible to a build at a point in time, ordered by name
pub type EnvironmentMap = BTreeMap<String, String>;
