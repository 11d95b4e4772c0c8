//! Project resolver backed by the host project registry

use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{Error, Result},
    interfaces::{Project, ProjectRegistry, ProjectResolver},
};

/// Resolves projects by fully-qualified name through an injected registry
pub struct RegistryProjectResolver {
    registry: Arc<dyn ProjectRegistry>,
}

impl RegistryProjectResolver {
    pub fn new(registry: Arc<dyn ProjectRegistry>) -> Self {
        Self { registry }
    }
}

impl ProjectResolver for RegistryProjectResolver {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Project>> {
        debug!("Resolving project: {}", name);

        match self.registry.lookup(name) {
            Ok(Some(project)) => Ok(project),
            Ok(None) => Err(Error::project_not_found(name)),
            Err(cause) => Err(Error::ProjectNotFound {
                name: name.to_string(),
                source: Some(Box::new(cause)),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{MemoryProject, MemoryRegistry};
    use std::error::Error as _;

    #[test]
    fn test_resolves_existing_project() {
        let registry = MemoryRegistry::new().with_project(MemoryProject::new("folder/app", vec![]));
        let resolver = RegistryProjectResolver::new(Arc::new(registry));

        let project = resolver.resolve("folder/app").unwrap();
        assert_eq!(project.full_name(), "folder/app");
    }

    #[test]
    fn test_missing_project() {
        let resolver = RegistryProjectResolver::new(Arc::new(MemoryRegistry::new()));

        match resolver.resolve("ghost") {
            Err(Error::ProjectNotFound { name, source }) => {
                assert_eq!(name, "ghost");
                assert!(source.is_none());
            }
            Err(other) => panic!("Unexpected error: {other}"),
            Ok(_) => panic!("Expected ProjectNotFound"),
        }
    }

    #[test]
    fn test_registry_failure_is_chained() {
        let registry = MemoryRegistry::new()
            .with_project(MemoryProject::new("app", vec![]))
            .failing("registry offline");
        let resolver = RegistryProjectResolver::new(Arc::new(registry));

        let err = resolver.resolve("app").err().expect("lookup should fail");
        assert!(matches!(err, Error::ProjectNotFound { ref name, .. } if name == "app"));
        let cause = err.source().expect("cause should be kept");
        assert!(cause.to_string().contains("registry offline"));
    }
}
