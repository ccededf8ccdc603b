//! Subcommand implementations.

pub mod batch;
pub mod catalog;
pub mod config;
pub mod process;

use std::path::Path;

use tracing::debug;

use thslip_core::SlipConfig;

/// Load the config file given with `--config`, else the user config file
/// if one exists, else the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SlipConfig> {
    let config = if let Some(path) = config_path {
        SlipConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e))?
    } else {
        let default_path = config::default_config_path();
        if default_path.exists() {
            debug!("Using config file {}", default_path.display());
            SlipConfig::from_file(&default_path)?
        } else {
            SlipConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}
