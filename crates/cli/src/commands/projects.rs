use anyhow::{Context, Result};

use super::CommandContext;

pub fn projects_command(context: &CommandContext) -> Result<()> {
    let names = context.registry.project_names().with_context(|| {
        format!(
            "Failed to list projects in {}",
            context.registry.root().display()
        )
    })?;

    for name in names {
        println!("{name}");
    }
    Ok(())
}
