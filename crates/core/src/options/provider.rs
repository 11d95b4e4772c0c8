use serde::Serialize;
use tracing::debug;

use crate::{
    interfaces::{Project, ProjectResolver},
    types::BuildResult,
};

use super::{BuildOptionFormatter, filter_builds};

/// One entry of a selection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOption {
    pub label: String,
    pub value: String,
}

impl BuildOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Selectable build results, in display order
pub fn result_options() -> Vec<BuildOption> {
    BuildResult::ALL
        .iter()
        .map(|result| BuildOption::new(result.as_str(), result.as_str()))
        .collect()
}

/// Lists a project's builds, optionally restricted to one result
pub struct BuildOptionsProvider<'a> {
    result: Option<BuildResult>,
    formatter: &'a dyn BuildOptionFormatter,
}

impl<'a> BuildOptionsProvider<'a> {
    pub fn new(result: Option<BuildResult>, formatter: &'a dyn BuildOptionFormatter) -> Self {
        Self { result, formatter }
    }

    /// Options valued by build number, in history order
    pub fn options_for_project(&self, project: &dyn Project) -> Vec<BuildOption> {
        filter_builds(project.builds(), self.result)
            .iter()
            .map(|build| {
                BuildOption::new(
                    self.formatter.format_build(build.as_ref()),
                    build.number().to_string(),
                )
            })
            .collect()
    }

    /// Like [`Self::options_for_project`], but a project that cannot be
    /// resolved yields no options
    pub fn options_for_project_name(
        &self,
        resolver: &dyn ProjectResolver,
        name: &str,
    ) -> Vec<BuildOption> {
        match resolver.resolve(name) {
            Ok(project) => self.options_for_project(project.as_ref()),
            Err(e) => {
                debug!("No build options for {}: {}", name, e);
                Vec::new()
            }
        }
    }
}
