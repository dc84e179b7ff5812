//! Path configuration for the CLI.
//!
//! Only the input and output locations can be configured. The legacy rule
//! table and the assistant fragment are fixed.

pub(crate) mod loader;

pub(crate) use loader::load_swap_config;

use std::path::PathBuf;

use serde::Deserialize;

/// Contents of `.assistant-swap.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct SwapConfig {
    /// Page to read. Default: `index.html`.
    pub input: Option<PathBuf>,

    /// Page to write. Default: `index_clean.html`.
    pub output: Option<PathBuf>,
}

impl SwapConfig {
    /// Pick the paths for this run: flag or env first, then this file, then defaults.
    pub(crate) fn resolve(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> (PathBuf, PathBuf) {
        let input = input
            .or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(assistant_swap::DEFAULT_INPUT));
        let output = output
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(assistant_swap::DEFAULT_OUTPUT));
        (input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let (input, output) = SwapConfig::default().resolve(None, None);
        assert_eq!(input, PathBuf::from("index.html"));
        assert_eq!(output, PathBuf::from("index_clean.html"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = SwapConfig {
            input: Some(PathBuf::from("site/home.html")),
            output: None,
        };
        let (input, output) = config.resolve(None, None);
        assert_eq!(input, PathBuf::from("site/home.html"));
        assert_eq!(output, PathBuf::from("index_clean.html"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = SwapConfig {
            input: Some(PathBuf::from("site/home.html")),
            output: Some(PathBuf::from("site/home_clean.html")),
        };
        let (input, output) =
            config.resolve(Some(PathBuf::from("a.html")), Some(PathBuf::from("b.html")));
        assert_eq!(input, PathBuf::from("a.html"));
        assert_eq!(output, PathBuf::from("b.html"));
    }
}
