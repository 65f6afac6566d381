//! Settings for gitify.
//!
//! This module resolves the settings file path, expands shell variables like
//! `~` in it, and loads the optional YAML settings file. Every field has a
//! default, so a missing file is not an error.

use std::fs::File;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.gitify/config.yml";

/// Default git executable
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Default repository directory that commands run in
pub const DEFAULT_REPO_PATH: &str = ".";

/// Default character limit for the commit message field
pub const DEFAULT_COMMIT_MESSAGE_LIMIT: usize = 100;

/// A terminal colour, given as exactly one of `rgb`, `ansi` or `name`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

impl ColorDefinition {
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Some((r, g, b)),
            ansi: None,
            name: None,
        }
    }
}

/// Colours used by the view. Passed explicitly to the view rather than held
/// in global state.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    /// Colour of the last command output
    pub output: ColorDefinition,
    /// Colour of the selected menu entry
    pub highlight: ColorDefinition,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            output: ColorDefinition::rgb(0xcd, 0xd6, 0xf4),
            highlight: ColorDefinition::rgb(0xfa, 0xb3, 0x87),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub git_binary: String,
    pub repo_path: String,
    pub commit_message_limit: usize,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git_binary: DEFAULT_GIT_BINARY.to_string(),
            repo_path: DEFAULT_REPO_PATH.to_string(),
            commit_message_limit: DEFAULT_COMMIT_MESSAGE_LIMIT,
            theme: Theme::default(),
        }
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use gitify_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads settings from the YAML file at `path`.
///
/// Returns the defaults when the file does not exist. The repository path is
/// tilde-expanded.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid
/// settings YAML.
pub fn load_settings(path: &str) -> Result<Settings> {
    if !Path::exists(Path::new(path)) {
        debug!("No settings file at `{path}`, using defaults");
        return Ok(Settings::default());
    }

    let reader = File::open(path)
        .map_err(|e| Error::io_error("settings".to_string(), path.to_string(), e))?;

    let mut settings: Settings = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            path.to_string(),
            e,
        )
    })?;

    settings.repo_path = shellexpand::tilde(&settings.repo_path).to_string();

    Ok(settings)
}
