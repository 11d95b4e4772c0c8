//! Host collaborator interface
//!
//! The CI server owns projects, builds and their environments. The import
//! pipeline only ever talks to the host through these traits, so any host
//! (a real server, the JSON store, an in-memory fixture) can drive it.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    error::Result,
    types::{BuildResult, EnvironmentMap},
};

/// One execution record of a project
pub trait Build: Send + Sync {
    /// Build number, unique within the project
    fn number(&self) -> u64;

    /// Human readable name; hosts may leave it unset
    fn display_name(&self) -> Option<String>;

    /// Outcome, or `None` while the build has not finished
    fn result(&self) -> Option<BuildResult>;

    /// When the build was started
    fn timestamp(&self) -> DateTime<Utc>;

    /// Read the environment snapshot of this build.
    ///
    /// May block on host I/O. Cancellation must surface as
    /// [`crate::Error::Interrupted`], other failures as
    /// [`crate::Error::EnvironmentRead`].
    fn read_environment(&self) -> Result<EnvironmentMap>;
}

/// A named, addressable container of builds
pub trait Project: Send + Sync {
    /// Short project name
    fn name(&self) -> &str;

    /// Fully-qualified name (including any folders)
    fn full_name(&self) -> &str {
        self.name()
    }

    /// Build history in host order (most recent first)
    fn builds(&self) -> Vec<Arc<dyn Build>>;

    /// Look a build up by its number key
    fn build_by_number(&self, id: &str) -> Option<Arc<dyn Build>>;
}

/// Registry of every project known to the host
pub trait ProjectRegistry: Send + Sync {
    /// Find a project by its fully-qualified name.
    ///
    /// `Ok(None)` means no such project; `Err` means the lookup itself failed.
    fn lookup(&self, full_name: &str) -> Result<Option<Arc<dyn Project>>>;
}

/// Deferred change to a build environment, applied by the host every time it
/// assembles that environment
pub trait EnvironmentContribution: Send + Sync + fmt::Debug {
    fn apply(&self, env: &mut EnvironmentMap);
}

/// The currently running build, as far as the import pipeline needs it
pub trait ContributionTarget: Send + Sync {
    /// Register a contribution to be applied whenever the host assembles the
    /// environment of this build.
    ///
    /// Contributions accumulate: every import adds one, applied in
    /// registration order, so a later one wins on shared keys. Nothing is
    /// replaced, unlike a host that keeps a single contributing action per
    /// build and drops all but the last import.
    fn register_contribution(&self, contribution: Arc<dyn EnvironmentContribution>);
}

/// A build that is executing right now and hosts an import build step
pub trait RunningBuild: ContributionTarget {
    /// The environment as currently assembled by the host, with every
    /// registered contribution applied
    fn environment(&self) -> Result<EnvironmentMap>;

    /// Override the outcome of the build
    fn set_result(&self, result: BuildResult);
}
