use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

use crate::interfaces::Build;

/// `yyyy-MM-dd HH:mm:ss z`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Whether `format` is a usable chrono `strftime` pattern
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Label shown for a build in a selection list
pub trait BuildOptionFormatter: Send + Sync {
    fn format_build(&self, build: &dyn Build) -> String;
}

/// Formats builds as `<display name> - <result> (<start time>)`
#[derive(Debug, Clone)]
pub struct DefaultBuildFormatter {
    date_format: String,
}

impl DefaultBuildFormatter {
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    /// `date_format` uses chrono `strftime` syntax
    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Default for DefaultBuildFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildOptionFormatter for DefaultBuildFormatter {
    fn format_build(&self, build: &dyn Build) -> String {
        let result = build
            .result()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "NO RESULT".to_string());

        let timestamp = build.timestamp();
        let mut started = String::new();
        if write!(started, "{}", timestamp.format(&self.date_format)).is_err() {
            started = timestamp.to_rfc3339();
        }

        format!(
            "{} - {} ({})",
            build.display_name().unwrap_or_default(),
            result,
            started
        )
    }
}
