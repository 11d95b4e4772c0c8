//! In-memory host
//!
//! Plain values behind `Arc`, used by tests and by embedders that already
//! hold their build data in memory.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{
    error::{Error, Result},
    interfaces::{
        Build, ContributionTarget, EnvironmentContribution, Project, ProjectRegistry, RunningBuild,
    },
    types::{BuildResult, EnvironmentMap},
};

#[derive(Debug, Clone)]
enum ReadFailure {
    Io(String),
    Interrupted,
}

#[derive(Debug)]
pub struct MemoryBuild {
    number: u64,
    display_name: Option<String>,
    result: Mutex<Option<BuildResult>>,
    timestamp: DateTime<Utc>,
    environment: EnvironmentMap,
    read_failure: Option<ReadFailure>,
    contributions: Mutex<Vec<Arc<dyn EnvironmentContribution>>>,
}

impl MemoryBuild {
    pub fn new(number: u64) -> Self {
        Self {
            number,
            display_name: Some(format!("#{number}")),
            result: Mutex::new(None),
            timestamp: DateTime::UNIX_EPOCH,
            environment: EnvironmentMap::new(),
            read_failure: None,
            contributions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_display_name(mut self, name: Option<&str>) -> Self {
        self.display_name = name.map(str::to_string);
        self
    }

    pub fn with_result(mut self, result: BuildResult) -> Self {
        *self
            .result
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(result);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.environment.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every environment read fail with an I/O error
    pub fn failing_reads(mut self, message: &str) -> Self {
        self.read_failure = Some(ReadFailure::Io(message.to_string()));
        self
    }

    /// Make every environment read report cancellation
    pub fn interrupted_reads(mut self) -> Self {
        self.read_failure = Some(ReadFailure::Interrupted);
        self
    }

    pub fn contributions(&self) -> Vec<Arc<dyn EnvironmentContribution>> {
        self.contributions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply every registered contribution on top of `base`
    pub fn assemble_environment(&self, base: &EnvironmentMap) -> EnvironmentMap {
        let mut env = base.clone();
        for contribution in self.contributions() {
            contribution.apply(&mut env);
        }
        env
    }
}

impl Build for MemoryBuild {
    fn number(&self) -> u64 {
        self.number
    }

    fn display_name(&self) -> Option<String> {
        self.display_name.clone()
    }

    fn result(&self) -> Option<BuildResult> {
        *self
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn read_environment(&self) -> Result<EnvironmentMap> {
        match &self.read_failure {
            None => Ok(self.environment.clone()),
            Some(ReadFailure::Io(message)) => {
                Err(Error::EnvironmentRead(io::Error::other(message.clone())))
            }
            Some(ReadFailure::Interrupted) => Err(Error::Interrupted),
        }
    }
}

impl ContributionTarget for MemoryBuild {
    fn register_contribution(&self, contribution: Arc<dyn EnvironmentContribution>) {
        self.contributions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(contribution);
    }
}

impl RunningBuild for MemoryBuild {
    fn environment(&self) -> Result<EnvironmentMap> {
        self.read_environment().map(|recorded| self.assemble_environment(&recorded))
    }

    fn set_result(&self, result: BuildResult) {
        *self
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(result);
    }
}

#[derive(Debug)]
pub struct MemoryProject {
    name: String,
    builds: Vec<Arc<MemoryBuild>>,
}

impl MemoryProject {
    /// `builds` are kept in the given order, which is the history order
    pub fn new(name: &str, builds: Vec<MemoryBuild>) -> Self {
        Self {
            name: name.to_string(),
            builds: builds.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn memory_builds(&self) -> &[Arc<MemoryBuild>] {
        &self.builds
    }
}

impl Project for MemoryProject {
    fn name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn full_name(&self) -> &str {
        &self.name
    }

    fn builds(&self) -> Vec<Arc<dyn Build>> {
        self.builds
            .iter()
            .map(|build| build.clone() as Arc<dyn Build>)
            .collect()
    }

    fn build_by_number(&self, id: &str) -> Option<Arc<dyn Build>> {
        let number: u64 = id.trim().parse().ok()?;
        self.builds
            .iter()
            .find(|build| build.number == number)
            .map(|build| build.clone() as Arc<dyn Build>)
    }
}

#[derive(Debug, Default)]
pub struct MemoryRegistry {
    projects: HashMap<String, Arc<MemoryProject>>,
    lookup_failure: Option<String>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: MemoryProject) -> Self {
        self.projects
            .insert(project.full_name().to_string(), Arc::new(project));
        self
    }

    /// Make every lookup fail as if the registry itself were unavailable
    pub fn failing(mut self, message: &str) -> Self {
        self.lookup_failure = Some(message.to_string());
        self
    }

    pub fn project(&self, full_name: &str) -> Option<Arc<MemoryProject>> {
        self.projects.get(full_name).cloned()
    }
}

impl ProjectRegistry for MemoryRegistry {
    fn lookup(&self, full_name: &str) -> Result<Option<Arc<dyn Project>>> {
        if let Some(message) = &self.lookup_failure {
            return Err(Error::IoError(io::Error::other(message.clone())));
        }

        Ok(self
            .projects
            .get(full_name)
            .map(|project| project.clone() as Arc<dyn Project>))
    }
}
