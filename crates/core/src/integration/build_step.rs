//! Build step that imports another build's variables into the running build

use std::error::Error as StdError;
use std::io::Write;
use std::sync::Arc;

use tracing::{error, warn};

use crate::{
    error::{Error, Result},
    execution::{ImportExecutor, ImportResult, ImportVarsConfiguration},
    interfaces::RunningBuild,
    transfer::{CopyContribution, TransferAgent},
    types::{BuildResult, EnvironmentMap},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Imported(ImportResult),
    Failed,
}

pub struct ImportBuildStep {
    project_name: String,
    build_id: String,
    transfer_agent: TransferAgent,
    executor: ImportExecutor,
}

impl ImportBuildStep {
    /// Fails with [`Error::InvalidTemplate`] when `var_name_template` does not
    /// contain the placeholder exactly once
    pub fn new(
        project_name: impl Into<String>,
        build_id: impl Into<String>,
        var_name_template: &str,
        executor: ImportExecutor,
    ) -> Result<Self> {
        Ok(Self::with_agent(
            project_name,
            build_id,
            TransferAgent::template(var_name_template)?,
            executor,
        ))
    }

    pub fn with_agent(
        project_name: impl Into<String>,
        build_id: impl Into<String>,
        transfer_agent: TransferAgent,
        executor: ImportExecutor,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            build_id: build_id.into(),
            transfer_agent,
            executor,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    pub fn var_name_template(&self) -> Option<&str> {
        self.transfer_agent.var_name_template().map(|t| t.as_str())
    }

    /// Run the import. Any failure marks `build` as failed and is written to
    /// `log`; nothing is returned to the caller but the outcome.
    pub fn perform<B: RunningBuild>(&self, build: &B, log: &mut dyn Write) -> StepOutcome {
        let config = ImportVarsConfiguration::new(
            self.project_name.clone(),
            self.build_id.clone(),
            self.transfer_agent.clone(),
        );

        let attempt = build
            .environment()
            .and_then(|env| self.import_into(&config, env, build));

        match attempt {
            Ok(result) => {
                writeln!(
                    log,
                    "Imported {} variables from build {} of project {}",
                    result.net_variables_imported, result.build_id, result.project_name
                )
                .ok();
                StepOutcome::Imported(result)
            }
            Err(e) if e.is_import_error() => {
                warn!("Import failed: {}", e);
                build.set_result(BuildResult::Failure);
                writeln!(log, "Failed to import variables: {e}").ok();
                StepOutcome::Failed
            }
            Err(e) => {
                error!("Failed to obtain environment: {:?}", e);
                build.set_result(BuildResult::Failure);
                writeln!(log, "Failed to obtain environment").ok();
                write_error_chain(log, &e);
                StepOutcome::Failed
            }
        }
    }
}

impl ImportBuildStep {
    /// A copy only changes the map it is given, so whatever it added or
    /// overwrote is handed back to `build` as a contribution
    fn import_into<B: RunningBuild>(
        &self,
        config: &ImportVarsConfiguration,
        mut env: EnvironmentMap,
        build: &B,
    ) -> Result<ImportResult> {
        let before = env.clone();
        let result = self.executor.perform(config, &mut env, build)?;

        if self.transfer_agent == TransferAgent::Copy {
            let copied: EnvironmentMap = env
                .into_iter()
                .filter(|(key, value)| before.get(key) != Some(value))
                .collect();
            if !copied.is_empty() {
                build.register_contribution(Arc::new(CopyContribution::new(copied)));
            }
        }

        Ok(result)
    }
}

fn write_error_chain(log: &mut dyn Write, err: &Error) {
    writeln!(log, "{err}").ok();
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(log, "Caused by: {cause}").ok();
        source = cause.source();
    }
}
