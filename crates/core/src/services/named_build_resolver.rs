//! Resolve builds by display name, falling back to the build number

use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{Error, Result},
    interfaces::{Build, BuildResolver, Project},
};

use super::BuildNumberResolver;

/// Preferred resolver: the first build in history order whose display name
/// equals the identifier wins; otherwise the identifier is tried as a number.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedBuildResolver {
    by_number: BuildNumberResolver,
}

impl NamedBuildResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds without a display name are skipped
    pub fn find_by_name(&self, project: &dyn Project, name: &str) -> Result<Arc<dyn Build>> {
        project
            .builds()
            .into_iter()
            .find(|build| build.display_name().as_deref() == Some(name))
            .ok_or_else(|| Error::build_not_found(project.name(), name))
    }
}

impl BuildResolver for NamedBuildResolver {
    fn resolve(&self, project: &dyn Project, id: &str) -> Result<Arc<dyn Build>> {
        match self.find_by_name(project, id) {
            Ok(build) => {
                debug!("Build '{}' matched by display name (#{})", id, build.number());
                Ok(build)
            }
            Err(_) => {
                debug!("No build named '{}' in {}, trying build number", id, project.name());
                self.by_number.resolve(project, id)
            }
        }
    }
}
