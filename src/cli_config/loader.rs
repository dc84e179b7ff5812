//! Discovery and loading of the project-local `.assistant-swap.toml`.

use std::path::Path;

use super::SwapConfig;

const CONFIG_FILENAME: &str = ".assistant-swap.toml";

/// Load config from the working directory, or return defaults.
pub(crate) fn load_swap_config() -> SwapConfig {
    load_from(Path::new(CONFIG_FILENAME))
}

/// Load config from `path`. Missing, unreadable and malformed files all
/// fall back to defaults; only the last two are worth a warning.
pub(crate) fn load_from(path: &Path) -> SwapConfig {
    if !path.is_file() {
        return SwapConfig::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded swap config");
                config
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse swap config, using defaults");
                SwapConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read swap config, using defaults");
            SwapConfig::default()
        }
    }
}
