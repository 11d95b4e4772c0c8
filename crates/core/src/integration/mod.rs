//! Host extension points: the import build step and the build selector
//! parameter

pub mod build_step;
pub mod parameter;

pub use build_step::{ImportBuildStep, StepOutcome};
pub use parameter::{OtherBuildParameterDefinition, OtherBuildParameterValue, ParameterForm};

use crate::transfer::is_valid_template;

pub const TEMPLATE_FIELD_ERROR: &str =
    "Variable name template must contain one instance of '%s' for string population";

/// Validate the template field of a configuration form. An empty field is
/// accepted.
pub fn check_var_name_template(value: &str) -> std::result::Result<(), &'static str> {
    if value.is_empty() || is_valid_template(value) {
        Ok(())
    } else {
        Err(TEMPLATE_FIELD_ERROR)
    }
}
