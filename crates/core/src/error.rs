use std::io;

/// Boxed cause chained onto a lookup failure
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while importing variables from another build
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find project with name: {name}")]
    ProjectNotFound {
        name: String,
        #[source]
        source: Option<BoxedCause>,
    },

    #[error("Could not find a build with id {id} in project {project}")]
    BuildNotFound { project: String, id: String },

    #[error("Failed to read build environment: {0}")]
    EnvironmentRead(#[source] io::Error),

    #[error("Operation was interrupted")]
    Interrupted,

    #[error("Var name template {0} is invalid")]
    InvalidTemplate(String),

    #[error("Unknown build result: {0}")]
    UnknownResult(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Error::ProjectNotFound {
            name: name.into(),
            source: None,
        }
    }

    pub fn build_not_found(project: impl Into<String>, id: impl Into<String>) -> Self {
        Error::BuildNotFound {
            project: project.into(),
            id: id.into(),
        }
    }

    /// Whether this is a failure to locate the other project or build, as
    /// opposed to a failure while talking to the host.
    pub fn is_import_error(&self) -> bool {
        matches!(
            self,
            Error::ProjectNotFound { .. } | Error::BuildNotFound { .. }
        )
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Interrupted)
    }
}

/// Result type alias for buildvars operations
pub type Result<T> = std::result::Result<T, Error>;
