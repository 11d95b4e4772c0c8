use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::types::EnvironmentMap;

static VARIABLE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z0-9_.]+)\}|([A-Za-z0-9_]+))")
        .expect("variable reference pattern is valid")
});

/// Substitute `$NAME` and `${NAME}` references with values from `env`.
///
/// References to names missing from `env` are left as written.
pub fn expand(input: &str, env: &EnvironmentMap) -> String {
    if !input.contains('$') {
        return input.to_string();
    }

    VARIABLE_REFERENCE
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match env.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
