//! Variable transfer strategies
//!
//! `Copy` writes the other build's variables straight into the current
//! environment. `TemplateContribute` renames every variable through a
//! [`VarNameTemplate`] and registers a deferred contribution on the current
//! build, so the host re-applies it whenever it rebuilds that environment.

pub mod contribution;
pub mod template;

pub use contribution::{CopyContribution, TemplateContribution};
pub use template::{PLACEHOLDER, VarNameTemplate, is_valid_template};

use std::sync::Arc;

use tracing::debug;

use crate::{error::Result, interfaces::ContributionTarget, types::EnvironmentMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferAgent {
    /// Verbatim copy, last write wins
    Copy,
    /// Templated names, applied at environment assembly time
    TemplateContribute(VarNameTemplate),
}

impl TransferAgent {
    /// Build a `TemplateContribute` agent, failing fast on an invalid template
    pub fn template(template: &str) -> Result<Self> {
        Ok(TransferAgent::TemplateContribute(VarNameTemplate::new(template)?))
    }

    pub fn var_name_template(&self) -> Option<&VarNameTemplate> {
        match self {
            TransferAgent::Copy => None,
            TransferAgent::TemplateContribute(template) => Some(template),
        }
    }

    /// First phase of the templated strategy: capture `source` for later application
    pub fn prepare(template: &VarNameTemplate, source: &EnvironmentMap) -> TemplateContribution {
        TemplateContribution::new(template.clone(), source.clone())
    }

    pub fn transfer(
        &self,
        source: &EnvironmentMap,
        target: &mut EnvironmentMap,
        target_build: &dyn ContributionTarget,
    ) {
        match self {
            TransferAgent::Copy => {
                debug!("Copying {} variables", source.len());
                for (key, value) in source {
                    target.insert(key.clone(), value.clone());
                }
            }
            TransferAgent::TemplateContribute(template) => {
                debug!(
                    "Registering contribution of {} variables as {}",
                    source.len(),
                    template
                );
                target_build.register_contribution(Arc::new(Self::prepare(template, source)));
            }
        }
    }
}
