use anyhow::{Context, Result, bail};
use buildvars_core::{ImportBuildStep, StepOutcome, interfaces::RunningBuild};
use std::io;

use super::{CommandContext, import::transfer_agent};
use crate::utils::parse_build_ref;

/// Run the build step against a stored build and persist what it did: the
/// assembled environment on success, the FAILURE result otherwise
pub fn step_command(
    context: &CommandContext,
    project: &str,
    build: &str,
    into: &str,
    template: Option<&str>,
) -> Result<()> {
    let (target_project, target_number) = parse_build_ref(into)?;
    let target = context
        .registry
        .open_build(&target_project, target_number)
        .with_context(|| format!("Failed to open target build {into}"))?;

    let step = ImportBuildStep::with_agent(
        project,
        build,
        transfer_agent(context, template, false)?,
        context.executor(),
    );

    let mut log = io::stdout().lock();
    match step.perform(&target, &mut log) {
        StepOutcome::Imported(_) => {
            target.save(target.environment()?)?;
            Ok(())
        }
        StepOutcome::Failed => {
            target.save(target.environment()?)?;
            bail!("Build step failed; {into} marked as FAILURE");
        }
    }
}
