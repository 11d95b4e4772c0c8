use anyhow::{Context, Result};
use buildvars_core::{BuildResult, options::BuildOptionsProvider};

use super::CommandContext;
use crate::display::print_options;

pub fn builds_command(
    context: &CommandContext,
    project: &str,
    result: Option<&str>,
    all: bool,
) -> Result<()> {
    let filter = match result {
        Some(result) => Some(result.parse::<BuildResult>()?),
        None if all => None,
        None => context
            .config
            .parsed_result_filter()
            .context("Invalid result_filter in config")?,
    };

    let formatter = context.config.formatter();
    let provider = BuildOptionsProvider::new(filter, &formatter);
    let executor = context.executor();
    let options = provider.options_for_project_name(&**executor.project_resolver(), project);

    if options.is_empty() {
        eprintln!("No builds found for {project}");
        return Ok(());
    }

    print_options(&options);
    Ok(())
}
