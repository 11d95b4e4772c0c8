use anyhow::{Context, Result, bail};
use buildvars_core::{
    Config, ImportExecutor,
    config::STORE_ENV_VAR,
    store::JsonRegistry,
};
use std::{env, path::PathBuf, sync::Arc};
use tracing::debug;

/// Everything a store-backed command needs: the loaded configuration and the
/// registry over the build record directory
pub struct CommandContext {
    pub config: Config,
    pub registry: Arc<JsonRegistry>,
}

impl CommandContext {
    /// Load the nearest configuration file and locate the store.
    ///
    /// The store root comes from `--store`, then `BUILDVARS_STORE`, then the
    /// configuration's `store_root`.
    pub fn load(store: Option<PathBuf>) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;

        let (config, base) = match Config::find_config_file(&cwd) {
            Some(path) => {
                debug!("Using config {}", path.display());
                let config = Config::load_from_file(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                let base = path.parent().map(PathBuf::from).unwrap_or_else(|| cwd.clone());
                (config, base)
            }
            None => (Config::default(), cwd.clone()),
        };

        let root = match store {
            Some(store) if store.is_absolute() => store,
            Some(store) => cwd.join(store),
            None => {
                let env_override = env::var(STORE_ENV_VAR).ok();
                match config.resolve_store_root(env_override.as_deref(), &base) {
                    Some(root) => root,
                    None => bail!(
                        "No build store configured. Pass --store, set {STORE_ENV_VAR}, or run `buildvars init`"
                    ),
                }
            }
        };
        debug!("Build store at {}", root.display());

        Ok(Self {
            config,
            registry: Arc::new(JsonRegistry::new(root)),
        })
    }

    pub fn executor(&self) -> ImportExecutor {
        ImportExecutor::with_registry(self.registry.clone())
    }
}
