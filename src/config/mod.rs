mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

use crate::images::ImageProbe;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./ytmeta.toml",
        "~/.config/ytmeta/config.toml",
        "/etc/ytmeta/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    for (extractor, canonical) in &config.extractors.mappings {
        if extractor.trim().is_empty() {
            anyhow::bail!("Extractor mapping has an empty extractor name");
        }
        if canonical.trim().is_empty() {
            anyhow::bail!("Extractor '{}' maps to an empty provider key", extractor);
        }
    }

    for key in &config.extractors.playlist_id_keys {
        if key.trim().is_empty() {
            anyhow::bail!("playlist_id_keys contains an empty provider key");
        }
    }

    for ext in &config.images.extensions {
        if ext.trim_start_matches('.').trim().is_empty() {
            anyhow::bail!("images.extensions contains an empty extension");
        }
    }

    if !config.images.extensions.is_empty()
        && config.image_probe().supported_input_formats().is_empty()
    {
        tracing::warn!(
            "None of the configured image extensions {:?} can be decoded",
            config.images.extensions
        );
    }

    Ok(())
}
