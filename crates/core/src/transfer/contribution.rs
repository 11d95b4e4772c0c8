use crate::{
    interfaces::EnvironmentContribution,
    types::EnvironmentMap,
};

use super::VarNameTemplate;

/// Captured snapshot of another build's environment, written under templated
/// names each time the host assembles the target environment
#[derive(Debug, Clone)]
pub struct TemplateContribution {
    template: VarNameTemplate,
    variables: EnvironmentMap,
}

impl TemplateContribution {
    pub fn new(template: VarNameTemplate, variables: EnvironmentMap) -> Self {
        Self {
            template,
            variables,
        }
    }

    pub fn template(&self) -> &VarNameTemplate {
        &self.template
    }

    pub fn variables(&self) -> &EnvironmentMap {
        &self.variables
    }
}

impl EnvironmentContribution for TemplateContribution {
    fn apply(&self, env: &mut EnvironmentMap) {
        for (key, value) in &self.variables {
            env.insert(self.template.apply(key), value.clone());
        }
    }
}

/// Variables written under their own names, for a copy whose result has to
/// outlive the map it was made into
#[derive(Debug, Clone)]
pub struct CopyContribution {
    variables: EnvironmentMap,
}

impl CopyContribution {
    pub fn new(variables: EnvironmentMap) -> Self {
        Self { variables }
    }

    pub fn variables(&self) -> &EnvironmentMap {
        &self.variables
    }
}

impl EnvironmentContribution for CopyContribution {
    fn apply(&self, env: &mut EnvironmentMap) {
        env.extend(
            self.variables
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_renames_every_key() {
        let mut source = EnvironmentMap::new();
        source.insert("ONE".to_string(), "one".to_string());
        source.insert("TWO".to_string(), "2".to_string());

        let contribution =
            TemplateContribution::new(VarNameTemplate::new("VAR NAME TEMPLATE %s").unwrap(), source);

        let mut env = EnvironmentMap::new();
        env.insert("EXISTING".to_string(), "kept".to_string());
        contribution.apply(&mut env);

        assert_eq!(env.get("VAR NAME TEMPLATE ONE").map(String::as_str), Some("one"));
        assert_eq!(env.get("VAR NAME TEMPLATE TWO").map(String::as_str), Some("2"));
        assert_eq!(env.get("EXISTING").map(String::as_str), Some("kept"));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_apply_is_repeatable() {
        let mut source = EnvironmentMap::new();
        source.insert("FOO".to_string(), "bar".to_string());
        let contribution = TemplateContribution::new(VarNameTemplate::new("NS_%s").unwrap(), source);

        let mut first = EnvironmentMap::new();
        contribution.apply(&mut first);
        let mut second = EnvironmentMap::new();
        contribution.apply(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_copy_contribution_overwrites() {
        let copied = EnvironmentMap::from([("PATH".to_string(), "/other".to_string())]);
        let mut env = EnvironmentMap::from([
            ("PATH".to_string(), "/usr/bin".to_string()),
            ("HOME".to_string(), "/root".to_string()),
        ]);

        CopyContribution::new(copied).apply(&mut env);

        assert_eq!(env.get("PATH").map(String::as_str), Some("/other"));
        assert_eq!(env.get("HOME").map(String::as_str), Some("/root"));
    }
}
