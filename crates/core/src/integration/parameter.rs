//! Parameter type that selects a build of another project and imports its
//! variables while the host assembles the environment

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::Result,
    execution::{ImportExecutor, ImportResult, ImportVarsConfiguration},
    interfaces::ContributionTarget,
    options::{BuildOption, BuildOptionFormatter, BuildOptionsProvider},
    transfer::TransferAgent,
    types::{BuildResult, EnvironmentMap},
};

/// Raw fields as submitted by the configuration form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterForm {
    pub name: String,
    pub description: String,
    pub project_name: String,
    pub filter_by_build_result: bool,
    pub build_result_filter: String,
    pub do_variable_import: bool,
    pub var_name_template: String,
}

pub struct OtherBuildParameterDefinition {
    name: String,
    description: String,
    project_name: String,
    result_filter: Option<BuildResult>,
    transfer_agent: Option<TransferAgent>,
    executor: ImportExecutor,
}

impl OtherBuildParameterDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        project_name: impl Into<String>,
        result_filter: Option<BuildResult>,
        transfer_agent: Option<TransferAgent>,
        executor: ImportExecutor,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            project_name: project_name.into(),
            result_filter,
            transfer_agent,
            executor,
        }
    }

    /// Build a definition from form fields.
    ///
    /// The result filter only applies when filtering is switched on. Variable
    /// import needs a valid template; an empty or invalid one disables the
    /// import instead of failing, so the other build's variables never land
    /// in the environment under their own names.
    pub fn from_form(form: &ParameterForm, executor: ImportExecutor) -> Result<Self> {
        let result_filter: Option<BuildResult> = if form.filter_by_build_result {
            Some(form.build_result_filter.parse()?)
        } else {
            None
        };

        let transfer_agent = if !form.do_variable_import {
            None
        } else {
            match TransferAgent::template(&form.var_name_template) {
                Ok(agent) => Some(agent),
                Err(e) => {
                    warn!("Variable import disabled for parameter {}: {}", form.name, e);
                    None
                }
            }
        };

        Ok(Self::new(
            form.name.clone(),
            form.description.clone(),
            form.project_name.clone(),
            result_filter,
            transfer_agent,
            executor,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn build_result_filter(&self) -> Option<BuildResult> {
        self.result_filter
    }

    pub fn is_filter_by_build_result(&self) -> bool {
        self.result_filter.is_some()
    }

    pub fn is_do_variable_import(&self) -> bool {
        self.transfer_agent.is_some()
    }

    pub fn var_name_template(&self) -> Option<&str> {
        self.transfer_agent
            .as_ref()
            .and_then(|agent| agent.var_name_template())
            .map(|t| t.as_str())
    }

    /// Value for a submitted `{"name": .., "value": ..}` object; `None` when
    /// either key is missing
    pub fn create_value(&self, submitted: &serde_json::Value) -> Option<OtherBuildParameterValue> {
        let name = submitted.get("name")?.as_str()?;
        let value = submitted.get("value")?.as_str()?;
        Some(self.value_for(name, value))
    }

    pub fn value_for(&self, name: &str, build_id: &str) -> OtherBuildParameterValue {
        OtherBuildParameterValue {
            name: name.to_string(),
            project_name: self.project_name.clone(),
            build_id: build_id.to_string(),
            transfer_agent: self.transfer_agent.clone(),
            executor: self.executor.clone(),
        }
    }

    /// Builds offered for selection. An unknown project offers nothing.
    pub fn build_options(&self, formatter: &dyn BuildOptionFormatter) -> Vec<BuildOption> {
        BuildOptionsProvider::new(self.result_filter, formatter).options_for_project_name(
            self.executor.project_resolver().as_ref(),
            &self.project_name,
        )
    }
}

/// Selected build of another project
pub struct OtherBuildParameterValue {
    name: String,
    project_name: String,
    build_id: String,
    transfer_agent: Option<TransferAgent>,
    executor: ImportExecutor,
}

impl OtherBuildParameterValue {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.build_id
    }

    pub fn configuration(&self) -> Option<ImportVarsConfiguration> {
        self.transfer_agent.as_ref().map(|agent| {
            ImportVarsConfiguration::new(
                self.project_name.clone(),
                self.build_id.clone(),
                agent.clone(),
            )
        })
    }

    /// Expose the parameter as `NAME=<build id>` and, when variable import is
    /// enabled, import the selected build's variables.
    pub fn build_environment(
        &self,
        build: &dyn ContributionTarget,
        env: &mut EnvironmentMap,
    ) -> Result<Option<ImportResult>> {
        env.insert(self.name.clone(), self.build_id.clone());

        let Some(config) = self.configuration() else {
            debug!("Parameter {} does not import variables", self.name);
            return Ok(None);
        };

        self.executor.perform(&config, env, build).map(Some)
    }
}
