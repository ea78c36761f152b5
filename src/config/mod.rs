mod types;

pub use types::*;

use anyhow::{Context, Result};
use homerow_common::paths::is_video_file;
use std::path::Path;

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
        "./homerow.toml",
        "~/.config/homerow/config.toml",
        "/etc/homerow/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::info!("Loading config from {:?}", path);
            return load_config(path);
        }
    }

    let config = Config::default();
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let route = config.media.route.as_str();
    if !route.starts_with('/') {
        anyhow::bail!("Media route must start with '/': {:?}", route);
    }
    if route.trim_end_matches('/').is_empty() {
        anyhow::bail!("Media route cannot be the root path");
    }

    if config.media.chunk_size == 0 {
        anyhow::bail!("Media chunk size cannot be 0");
    }

    // The producer may still be rendering; a missing file is a 404 per request.
    if !config.media.path.exists() {
        tracing::warn!("Media file does not exist yet: {:?}", config.media.path);
    }

    if config.media.content_type.is_none() && !is_video_file(&config.media.path) {
        tracing::warn!(
            "Unrecognized media extension for {:?}; serving as {}",
            config.media.path,
            config.media.resolved_content_type()
        );
    }

    Ok(())
}
