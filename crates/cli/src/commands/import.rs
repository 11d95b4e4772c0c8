use anyhow::{Context, Result};
use buildvars_core::{
    BuildResult, ImportVarsConfiguration, TransferAgent,
    interfaces::RunningBuild,
};
use tracing::{info, warn};

use super::CommandContext;
use crate::{display::print_environment, utils::parse_build_ref};

/// Pick the transfer strategy: `--copy` wins, then `--template`, then the
/// configured template, and plain copy otherwise
pub fn transfer_agent(
    context: &CommandContext,
    template: Option<&str>,
    copy: bool,
) -> Result<TransferAgent> {
    if copy {
        return Ok(TransferAgent::Copy);
    }

    if let Some(template) = template {
        return Ok(TransferAgent::template(template)?);
    }

    let configured = context
        .config
        .parsed_var_name_template()
        .context("Invalid var_name_template in config")?;
    Ok(configured.map_or(TransferAgent::Copy, TransferAgent::TemplateContribute))
}

#[allow(clippy::too_many_arguments)]
pub fn import_command(
    context: &CommandContext,
    project: &str,
    build: &str,
    into: &str,
    template: Option<&str>,
    copy: bool,
    save: bool,
    json: bool,
) -> Result<()> {
    let (target_project, target_number) = parse_build_ref(into)?;
    let target = context
        .registry
        .open_build(&target_project, target_number)
        .with_context(|| format!("Failed to open target build {into}"))?;

    let agent = transfer_agent(context, template, copy)?;
    let config = ImportVarsConfiguration::new(project, build, agent);
    let mut env = target.environment()?;

    let result = match context.executor().perform(&config, &mut env, &target) {
        Ok(result) => result,
        Err(e) => {
            if save {
                warn!("Marking {} as failed", into);
                target.set_result(BuildResult::Failure);
                target.save(env)?;
            }
            return Err(e).context("Failed to import variables");
        }
    };

    let env = target.assemble_environment(&env);
    info!(
        "Imported {} variables into {}",
        result.net_variables_imported, into
    );

    if save {
        target.save(env.clone())?;
        info!("Saved {}", target.path().display());
    }

    if json {
        let output = serde_json::json!({
            "result": result,
            "environment": env,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!(
            "✅ Imported {} variables from build {} of project {}",
            result.net_variables_imported, result.build_id, result.project_name
        );
        print_environment(&env);
    }

    Ok(())
}
