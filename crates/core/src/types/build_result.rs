use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a finished build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildResult {
    Success,
    Failure,
    Unstable,
    Aborted,
    NotBuilt,
}

impl BuildResult {
    /// Every result, in the order they are offered for selection
    pub const ALL: [BuildResult; 5] = [
        BuildResult::Success,
        BuildResult::Failure,
        BuildResult::Unstable,
        BuildResult::Aborted,
        BuildResult::NotBuilt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildResult::Success => "SUCCESS",
            BuildResult::Failure => "FAILURE",
            BuildResult::Unstable => "UNSTABLE",
            BuildResult::Aborted => "ABORTED",
            BuildResult::NotBuilt => "NOT_BUILT",
        }
    }
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        BuildResult::ALL
            .into_iter()
            .find(|result| result.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownResult(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for result in BuildResult::ALL {
            assert_eq!(result.to_string().parse::<BuildResult>().unwrap(), result);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("not_built".parse::<BuildResult>().unwrap(), BuildResult::NotBuilt);
        assert_eq!(" Unstable ".parse::<BuildResult>().unwrap(), BuildResult::Unstable);
    }

    #[test]
    fn test_unknown_result() {
        let err = "GREEN".parse::<BuildResult>().unwrap_err();
        assert!(matches!(err, Error::UnknownResult(ref s) if s == "GREEN"));
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&BuildResult::NotBuilt).unwrap();
        assert_eq!(json, "\"NOT_BUILT\"");
        let parsed: BuildResult = serde_json::from_str("\"ABORTED\"").unwrap();
        assert_eq!(parsed, BuildResult::Aborted);
    }
}
