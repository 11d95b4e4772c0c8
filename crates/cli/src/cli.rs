use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    CommandContext, builds_command, check_template_command, import_command, init_command,
    projects_command, results_command, step_command,
};

#[derive(Parser, Debug)]
#[command(name = "buildvars")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug         Enable debug logging\n    BUILDVARS_STORE=DIR    Build record store (overridden by --store)"
)]
pub struct Cli {
    /// Directory holding the JSON build records
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import the variables of another build into a build record
    #[command(visible_alias = "i")]
    Import {
        /// Project to import from (full name, e.g. team/app)
        #[arg(short, long)]
        project: String,

        /// Build display name or number; may reference the target's variables (${NAME})
        #[arg(short, long)]
        build: String,

        /// Target build as PROJECT#NUMBER
        #[arg(long)]
        into: String,

        /// Rename imported variables through a template containing one %s
        #[arg(short, long, conflicts_with = "copy")]
        template: Option<String>,

        /// Copy variable names verbatim, ignoring any configured template
        #[arg(long)]
        copy: bool,

        /// Write the resulting environment back to the target record
        #[arg(long)]
        save: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the import build step against a target build record
    Step {
        /// Project to import from
        #[arg(short, long)]
        project: String,

        /// Build display name or number
        #[arg(short, long)]
        build: String,

        /// Target build as PROJECT#NUMBER
        #[arg(long)]
        into: String,

        /// Variable name template (defaults to the configured one)
        #[arg(short, long)]
        template: Option<String>,
    },
    /// List the builds of a project, optionally filtered by result
    #[command(visible_alias = "b")]
    Builds {
        /// Project full name
        #[arg(short, long)]
        project: String,

        /// Only show builds with this result (SUCCESS, FAILURE, ...)
        #[arg(short, long)]
        result: Option<String>,

        /// Show every build even when a result filter is configured
        #[arg(long, conflicts_with = "result")]
        all: bool,
    },
    /// List the build results that can be filtered on
    Results,
    /// List the projects in the store
    Projects,
    /// Check that a variable name template contains exactly one %s
    CheckTemplate {
        template: String,
    },
    /// Create a .buildvars.json configuration
    Init {
        /// Directory to write the configuration into
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let store = self.store;
        match self.command {
            Commands::Import {
                project,
                build,
                into,
                template,
                copy,
                save,
                json,
            } => import_command(
                &CommandContext::load(store)?,
                &project,
                &build,
                &into,
                template.as_deref(),
                copy,
                save,
                json,
            ),
            Commands::Step {
                project,
                build,
                into,
                template,
            } => step_command(
                &CommandContext::load(store)?,
                &project,
                &build,
                &into,
                template.as_deref(),
            ),
            Commands::Builds {
                project,
                result,
                all,
            } => builds_command(
                &CommandContext::load(store)?,
                &project,
                result.as_deref(),
                all,
            ),
            Commands::Projects => projects_command(&CommandContext::load(store)?),
            Commands::Results => results_command(),
            Commands::CheckTemplate { template } => check_template_command(&template),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_conflicts_with_copy() {
        let parsed = Cli::try_parse_from([
            "buildvars", "import", "-p", "up", "-b", "1", "--into", "app#2", "--copy", "-t",
            "X_%s",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_store_flag() {
        let cli =
            Cli::try_parse_from(["buildvars", "builds", "-p", "up", "--store", "/tmp/s"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s")));
        assert!(matches!(cli.command, Commands::Builds { all: false, .. }));
    }
}
