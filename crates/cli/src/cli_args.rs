//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Every flag overrides the matching field of the settings file.

use clap::Parser;
use gitify_core::config::Settings;

/// Command-line arguments for the gitify menu.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use gitify_cli::cli_args::Args;
///
/// let args = Args::parse_from(["gitify", "--repo-path", "/srv/project"]);
/// assert_eq!(args.repo_path, Some("/srv/project".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.gitify/config.yml`. A missing file
    /// means default settings.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Repository directory that git commands run in.
    ///
    /// Overrides `repo_path` from the settings file.
    #[arg(long, short = 'r')]
    pub repo_path: Option<String>,

    /// The git executable to run.
    ///
    /// Overrides `git_binary` from the settings file.
    #[arg(long)]
    pub git_binary: Option<String>,
}

impl Args {
    /// Applies command-line overrides on top of loaded settings.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(repo_path) = &self.repo_path {
            settings.repo_path = repo_path.clone();
        }

        if let Some(git_binary) = &self.git_binary {
            settings.git_binary = git_binary.clone();
        }

        settings
    }
}
