use anyhow::{Context, Result};
use maternevo_sim::simulation::Configuration;
use std::fs;
use std::path::Path;

/// Read and validate a JSON configuration.
pub fn load_config(path: &Path) -> Result<Configuration> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    let config: Configuration = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Default configuration as pretty JSON.
pub fn example_config() -> Result<String> {
    serde_json::to_string_pretty(&Configuration::default())
        .context("Failed to serialize configuration")
}
