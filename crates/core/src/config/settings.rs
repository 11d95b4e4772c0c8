use crate::{
    error::{Error, Result},
    options::DefaultBuildFormatter,
    transfer::VarNameTemplate,
    types::BuildResult,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `store_root`
pub const STORE_ENV_VAR: &str = "BUILDVARS_STORE";

pub const CONFIG_FILE_NAMES: [&str; 2] = [".buildvars.json", "buildvars.json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Directory holding the JSON build records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_root: Option<PathBuf>,

    /// Default template for imported variable names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_name_template: Option<String>,

    /// Default result filter when listing builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_filter: Option<String>,

    /// chrono format used for build start times
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl Config {
    /// Configuration written by `buildvars init`
    pub fn starter() -> Self {
        Self {
            store_root: Some(PathBuf::from("builds")),
            var_name_template: Some("OTHER_BUILD_%s".to_string()),
            result_filter: None,
            date_format: Some(crate::options::DEFAULT_DATE_FORMAT.to_string()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Store location: `env_override` wins, then `store_root`; relative paths
    /// are taken from `base`
    pub fn resolve_store_root(&self, env_override: Option<&str>, base: &Path) -> Option<PathBuf> {
        let root = env_override
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.store_root.clone())?;

        if root.is_absolute() {
            Some(root)
        } else {
            Some(base.join(root))
        }
    }

    pub fn parsed_result_filter(&self) -> Result<Option<BuildResult>> {
        self.result_filter
            .as_deref()
            .map(str::parse::<BuildResult>)
            .transpose()
    }

    pub fn parsed_var_name_template(&self) -> Result<Option<VarNameTemplate>> {
        self.var_name_template
            .as_deref()
            .map(|template| VarNameTemplate::new(template))
            .transpose()
    }

    pub fn formatter(&self) -> DefaultBuildFormatter {
        match &self.date_format {
            Some(format) => DefaultBuildFormatter::with_date_format(format.clone()),
            None => DefaultBuildFormatter::new(),
        }
    }
}
