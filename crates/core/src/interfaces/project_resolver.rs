//! Project resolution interface

use std::sync::Arc;

use super::Project;
use crate::error::Result;

/// Resolves a project name to a live project handle
pub trait ProjectResolver: Send + Sync {
    /// Fails with [`crate::Error::ProjectNotFound`] carrying `name`
    fn resolve(&self, name: &str) -> Result<Arc<dyn Project>>;
}
