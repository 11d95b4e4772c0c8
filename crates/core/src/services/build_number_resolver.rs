//! Resolve builds by their number

use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{Error, Result},
    interfaces::{Build, BuildResolver, Project},
};

/// Treats the identifier as the literal build number key
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildNumberResolver;

impl BuildNumberResolver {
    pub fn new() -> Self {
        Self
    }
}

impl BuildResolver for BuildNumberResolver {
    fn resolve(&self, project: &dyn Project, id: &str) -> Result<Arc<dyn Build>> {
        debug!("Looking up build number {} in {}", id, project.name());

        project
            .build_by_number(id)
            .ok_or_else(|| Error::build_not_found(project.name(), id))
    }
}
