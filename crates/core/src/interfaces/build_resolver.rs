//! Build resolution interface

use std::sync::Arc;

use super::{Build, Project};
use crate::error::Result;

/// Resolves a build identifier within a project
pub trait BuildResolver: Send + Sync {
    /// Fails with [`crate::Error::BuildNotFound`] carrying the project name and `id`
    fn resolve(&self, project: &dyn Project, id: &str) -> Result<Arc<dyn Build>>;
}
