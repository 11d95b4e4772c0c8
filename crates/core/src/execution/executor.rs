//! Import pipeline: project lookup, build lookup, environment read, transfer

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    error::Result,
    interfaces::{BuildResolver, ContributionTarget, ProjectRegistry, ProjectResolver},
    services::{NamedBuildResolver, RegistryProjectResolver},
    types::EnvironmentMap,
};

use super::{ImportResult, ImportVarsConfiguration, expand};

/// Runs a single import. Holds only the injected resolvers, so one executor
/// can serve concurrent imports for different builds.
#[derive(Clone)]
pub struct ImportExecutor {
    project_resolver: Arc<dyn ProjectResolver>,
    build_resolver: Arc<dyn BuildResolver>,
}

impl ImportExecutor {
    pub fn new(
        project_resolver: Arc<dyn ProjectResolver>,
        build_resolver: Arc<dyn BuildResolver>,
    ) -> Self {
        Self {
            project_resolver,
            build_resolver,
        }
    }

    /// Executor with the default resolvers: registry lookup and
    /// name-then-number build resolution
    pub fn with_registry(registry: Arc<dyn ProjectRegistry>) -> Self {
        Self::new(
            Arc::new(RegistryProjectResolver::new(registry)),
            Arc::new(NamedBuildResolver::new()),
        )
    }

    pub fn project_resolver(&self) -> &Arc<dyn ProjectResolver> {
        &self.project_resolver
    }

    pub fn build_resolver(&self) -> &Arc<dyn BuildResolver> {
        &self.build_resolver
    }

    /// Import the other build's variables into `current_env`.
    ///
    /// Failures from the resolvers and the environment read are returned
    /// unchanged; nothing is retried.
    pub fn perform(
        &self,
        config: &ImportVarsConfiguration,
        current_env: &mut EnvironmentMap,
        current_build: &dyn ContributionTarget,
    ) -> Result<ImportResult> {
        let original_size = current_env.len();

        let project = self.project_resolver.resolve(&config.source_project_name)?;

        let build_id = expand(&config.source_build_id, current_env);
        debug!(
            "Build id '{}' expanded to '{}'",
            config.source_build_id, build_id
        );

        let other_build = self.build_resolver.resolve(project.as_ref(), &build_id)?;
        let other_env = other_build.read_environment()?;

        config
            .transfer_agent
            .transfer(&other_env, current_env, current_build);

        let result = ImportResult {
            project_name: config.source_project_name.clone(),
            build_id: config.source_build_id.clone(),
            net_variables_imported: current_env.len().saturating_sub(original_size),
        };
        info!(
            "Imported {} variables from build {} of project {}",
            result.net_variables_imported, result.build_id, result.project_name
        );
        Ok(result)
    }
}
