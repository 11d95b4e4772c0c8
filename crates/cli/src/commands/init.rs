use anyhow::{Context, Result};
use buildvars_core::{Config, config::CONFIG_FILE_NAMES};
use std::{env, fs, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let config = Config::starter();
    config
        .save_validated(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());

    if let Some(store_root) = &config.store_root {
        let store = project_root.join(store_root);
        fs::create_dir_all(&store)
            .with_context(|| format!("Failed to create store at {}", store.display()))?;
    }

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Build records go in <store>/<project>/builds/<number>.json");
    Ok(())
}
