use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Session settings resolved from the configuration file and command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Whether the site is printed after every accepted command.
    pub(crate) show_site_after_command: bool,
    /// Destination of the JSON session summary, if one was requested.
    pub(crate) summary_json: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_site_after_command: true,
            summary_json: None,
        }
    }
}

impl Settings {
    /// Layers command-line overrides on top of an optional configuration file.
    pub(crate) fn resolve(
        file: Option<ConfigFile>,
        quiet_map: bool,
        summary_json: Option<PathBuf>,
    ) -> Self {
        let mut settings = Self::default();
        if let Some(file) = file {
            settings.show_site_after_command = file.show_site_after_command;
            settings.summary_json = file.summary_json;
        }
        if quiet_map {
            settings.show_site_after_command = false;
        }
        if summary_json.is_some() {
            settings.summary_json = summary_json;
        }
        settings
    }
}

/// Contents of a TOML session configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    version: u32,
    #[serde(default = "show_site_by_default")]
    show_site_after_command: bool,
    #[serde(default)]
    summary_json: Option<PathBuf>,
}

fn show_site_by_default() -> bool {
    true
}

impl ConfigFile {
    /// Reads and validates the configuration file at the provided path.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid configuration at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).context("failed to parse configuration toml contents")?;
        if config.version != SUPPORTED_CONFIG_VERSION {
            bail!(
                "unsupported configuration version {}; expected {}",
                config.version,
                SUPPORTED_CONFIG_VERSION
            );
        }
        Ok(config)
    }
}
