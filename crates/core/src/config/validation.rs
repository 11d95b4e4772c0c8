//! Configuration validation for ensuring configs are valid before saving

use crate::{
    config::Config,
    error::{Error, Result},
    options::is_valid_date_format,
};

/// Trait for validating configurations
pub trait ConfigValidator {
    fn validate(&self, config: &Config) -> Result<()>;
}

/// Checks every field that is parsed later on
pub struct MainConfigValidator;

impl ConfigValidator for MainConfigValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        config.parsed_var_name_template()?;
        config.parsed_result_filter()?;

        if let Some(format) = &config.date_format {
            if !is_valid_date_format(format) {
                return Err(Error::ConfigError(format!("Invalid date format: {format}")));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Validate this configuration
    pub fn validate(&self) -> Result<()> {
        MainConfigValidator.validate(self)
    }

    /// Save with validation
    pub fn save_validated(&self, path: &std::path::Path) -> Result<()> {
        self.validate()?;
        self.save_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_starter_config_is_valid() {
        assert!(Config::starter().validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_fields() {
        let template = Config {
            var_name_template: Some("%s_%s".to_string()),
            ..Default::default()
        };
        assert!(matches!(template.validate(), Err(Error::InvalidTemplate(_))));

        let result = Config {
            result_filter: Some("MAYBE".to_string()),
            ..Default::default()
        };
        assert!(matches!(result.validate(), Err(Error::UnknownResult(_))));

        let date = Config {
            date_format: Some("%Q".to_string()),
            ..Default::default()
        };
        assert!(matches!(date.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_save_validated_writes_nothing_on_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".buildvars.json");
        let config = Config {
            var_name_template: Some("NOPE".to_string()),
            ..Default::default()
        };

        assert!(config.save_validated(&path).is_err());
        assert!(!path.exists());
    }
}
