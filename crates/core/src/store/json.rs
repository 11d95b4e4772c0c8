//! JSON file host
//!
//! A project with full name `team/app` lives in `<root>/team/app/`, and each
//! of its builds is a record at `<root>/team/app/builds/<number>.json`.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    interfaces::{
        Build, ContributionTarget, EnvironmentContribution, Project, ProjectRegistry, RunningBuild,
    },
    types::{BuildResult, EnvironmentMap},
};

const BUILDS_DIR: &str = "builds";

/// On-disk form of a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JsonBuildRecord {
    pub number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<BuildResult>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub environment: EnvironmentMap,
}

impl JsonBuildRecord {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let record = serde_json::from_str(&contents)?;
        Ok(record)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

fn read_failure(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::Interrupted {
        Error::Interrupted
    } else {
        Error::EnvironmentRead(e)
    }
}

#[derive(Debug)]
pub struct JsonBuild {
    record: JsonBuildRecord,
    path: PathBuf,
    result_override: Mutex<Option<BuildResult>>,
    contributions: Mutex<Vec<Arc<dyn EnvironmentContribution>>>,
}

impl JsonBuild {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            record: JsonBuildRecord::load_from_file(path)?,
            path: path.to_path_buf(),
            result_override: Mutex::new(None),
            contributions: Mutex::new(Vec::new()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &JsonBuildRecord {
        &self.record
    }

    /// Apply every registered contribution on top of `base`
    pub fn assemble_environment(&self, base: &EnvironmentMap) -> EnvironmentMap {
        let mut env = base.clone();
        let contributions = self
            .contributions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for contribution in contributions.iter() {
            contribution.apply(&mut env);
        }
        env
    }

    /// Persist `environment` as this build's recorded environment, along
    /// with any result set while the build was open
    pub fn save(&self, environment: EnvironmentMap) -> Result<()> {
        let record = JsonBuildRecord {
            environment,
            result: self.result(),
            ..self.record.clone()
        };
        record.save_to_file(&self.path)?;
        debug!("Saved build record {}", self.path.display());
        Ok(())
    }
}

impl Build for JsonBuild {
    fn number(&self) -> u64 {
        self.record.number
    }

    fn display_name(&self) -> Option<String> {
        self.record.display_name.clone()
    }

    fn result(&self) -> Option<BuildResult> {
        let overridden = *self
            .result_override
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        overridden.or(self.record.result)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.record.timestamp
    }

    fn read_environment(&self) -> Result<EnvironmentMap> {
        let contents = std::fs::read_to_string(&self.path).map_err(read_failure)?;
        let record: JsonBuildRecord = serde_json::from_str(&contents)
            .map_err(|e| Error::EnvironmentRead(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        Ok(record.environment)
    }
}

impl ContributionTarget for JsonBuild {
    fn register_contribution(&self, contribution: Arc<dyn EnvironmentContribution>) {
        self.contributions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(contribution);
    }
}

impl RunningBuild for JsonBuild {
    fn environment(&self) -> Result<EnvironmentMap> {
        self.read_environment().map(|recorded| self.assemble_environment(&recorded))
    }

    fn set_result(&self, result: BuildResult) {
        *self
            .result_override
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(result);
    }
}

#[derive(Debug, Clone)]
pub struct JsonProject {
    full_name: String,
    dir: PathBuf,
}

impl JsonProject {
    fn builds_dir(&self) -> PathBuf {
        self.dir.join(BUILDS_DIR)
    }

    fn build_path(&self, number: u64) -> PathBuf {
        self.builds_dir().join(format!("{number}.json"))
    }
}

impl Project for JsonProject {
    fn name(&self) -> &str {
        self.full_name.rsplit('/').next().unwrap_or(&self.full_name)
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn builds(&self) -> Vec<Arc<dyn Build>> {
        let entries = match std::fs::read_dir(self.builds_dir()) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot list builds of {}: {}", self.full_name, e);
                return Vec::new();
            }
        };

        let mut builds: Vec<JsonBuild> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| match JsonBuild::open(&path) {
                Ok(build) => Some(build),
                Err(e) => {
                    warn!("Skipping unreadable build record {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        builds.sort_by(|a, b| b.number().cmp(&a.number()));
        builds
            .into_iter()
            .map(|build| Arc::new(build) as Arc<dyn Build>)
            .collect()
    }

    fn build_by_number(&self, id: &str) -> Option<Arc<dyn Build>> {
        let number: u64 = id.trim().parse().ok()?;
        let path = self.build_path(number);
        if !path.is_file() {
            return None;
        }

        match JsonBuild::open(&path) {
            Ok(build) => Some(Arc::new(build)),
            Err(e) => {
                warn!("Unreadable build record {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Project registry over a directory tree of build records
#[derive(Debug, Clone)]
pub struct JsonRegistry {
    root: PathBuf,
}

impl JsonRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn project_dir(&self, full_name: &str) -> Option<PathBuf> {
        let relative = Path::new(full_name);
        let plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if full_name.is_empty() || !plain {
            return None;
        }
        Some(self.root.join(relative))
    }

    pub fn project(&self, full_name: &str) -> Option<JsonProject> {
        let dir = self.project_dir(full_name)?;
        if !dir.join(BUILDS_DIR).is_dir() {
            return None;
        }
        Some(JsonProject {
            full_name: full_name.to_string(),
            dir,
        })
    }

    /// Open one build for use as the target of an import
    pub fn open_build(&self, full_name: &str, number: u64) -> Result<JsonBuild> {
        let project = self
            .project(full_name)
            .ok_or_else(|| Error::project_not_found(full_name))?;
        let path = project.build_path(number);
        if !path.is_file() {
            return Err(Error::build_not_found(project.name(), number.to_string()));
        }
        JsonBuild::open(&path)
    }

    /// Write a build record, creating the project if needed
    pub fn write_build(&self, full_name: &str, record: &JsonBuildRecord) -> Result<PathBuf> {
        let dir = self.project_dir(full_name).ok_or_else(|| {
            Error::ConfigError(format!("Invalid project name: {full_name}"))
        })?;
        let path = dir.join(BUILDS_DIR).join(format!("{}.json", record.number));
        record.save_to_file(&path)?;
        Ok(path)
    }

    /// Full names of every project in the store, sorted
    pub fn project_names(&self) -> Result<Vec<String>> {
        self.ensure_root()?;

        let mut names: Vec<String> = WalkDir::new(&self.root)
            .min_depth(2)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_dir() && entry.file_name() == BUILDS_DIR)
            .filter_map(|entry| {
                let project_dir = entry.path().parent()?;
                let relative = project_dir.strip_prefix(&self.root).ok()?;
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                Some(parts.join("/"))
            })
            .collect();

        names.sort();
        Ok(names)
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(Error::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("store root {} does not exist", self.root.display()),
            )))
        }
    }
}

impl ProjectRegistry for JsonRegistry {
    fn lookup(&self, full_name: &str) -> Result<Option<Arc<dyn Project>>> {
        self.ensure_root()?;
        Ok(self
            .project(full_name)
            .map(|project| Arc::new(project) as Arc<dyn Project>))
    }
}
