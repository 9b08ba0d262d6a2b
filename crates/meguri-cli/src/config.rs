use anyhow::{Context, Result};
use meguri_core::config::LayeredConfig;
use std::path::Path;

/// Build the layered configuration for a CLI invocation:
/// defaults, then the optional config file, then the environment.
/// Per-command flags apply on top with CLI precedence.
pub fn load(config_path: Option<&Path>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path {
        config = config
            .load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
    }

    Ok(config.load_from_env())
}
