use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Placeholder replaced by the source variable name
pub const PLACEHOLDER: &str = "%s";

/// True iff `template` contains the placeholder exactly once
pub fn is_valid_template(template: &str) -> bool {
    template.matches(PLACEHOLDER).count() == 1
}

/// Rewrites a source variable name into a namespaced target name, e.g.
/// `OTHER_BUILD_%s` turns `FOO` into `OTHER_BUILD_FOO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VarNameTemplate(String);

impl VarNameTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !is_valid_template(&template) {
            return Err(Error::InvalidTemplate(template));
        }
        Ok(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn apply(&self, name: &str) -> String {
        self.0.replacen(PLACEHOLDER, name, 1)
    }
}

impl fmt::Display for VarNameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VarNameTemplate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VarNameTemplate> for String {
    fn from(template: VarNameTemplate) -> Self {
        template.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_validity() {
        assert!(!is_valid_template("SFJKSDJFKLAJO3UMO"));
        assert!(!is_valid_template(""));
        assert!(is_valid_template("OTHER_BUILD_%s"));
        assert!(is_valid_template("%s"));
        assert!(!is_valid_template("%s_%s"));
        assert!(!is_valid_template("%s%s"));
        assert!(!is_valid_template("A%sB%sC%s"));
    }

    #[test]
    fn test_new_rejects_invalid_template() {
        let err = VarNameTemplate::new("SFJKSDJFKLAJO3UMO").unwrap_err();
        assert_eq!(err.to_string(), "Var name template SFJKSDJFKLAJO3UMO is invalid");
    }

    #[test]
    fn test_apply() {
        let template = VarNameTemplate::new("VAR NAME TEMPLATE %s").unwrap();
        assert_eq!(template.apply("ONE"), "VAR NAME TEMPLATE ONE");
        assert_eq!(template.as_str(), "VAR NAME TEMPLATE %s");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: VarNameTemplate = serde_json::from_str("\"NS_%s\"").unwrap();
        assert_eq!(ok.apply("FOO"), "NS_FOO");
        assert!(serde_json::from_str::<VarNameTemplate>("\"NS\"").is_err());
    }
}
