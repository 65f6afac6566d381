use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::Settings;

/// Substrings that mark git output as a failure.
pub const FAILURE_MARKERS: [&str; 2] = ["error", "fatal"];

/// The outcome of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Standard output followed by standard error.
    pub output: String,
    /// Set when git could not be launched or exited unsuccessfully.
    pub invocation_error: Option<String>,
}

impl CommandResult {
    #[must_use]
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            invocation_error: None,
        }
    }

    #[must_use]
    pub fn failed(invocation_error: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            invocation_error: Some(invocation_error.into()),
        }
    }

    /// Whether git itself reported a problem through its exit status or could
    /// not be launched at all.
    #[must_use]
    pub fn invocation_failed(&self) -> bool {
        self.invocation_error.is_some()
    }

    /// The text shown to the user. Invocation errors are prefixed with
    /// `Error:` followed by the captured output.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.invocation_error {
            Some(error) => format!("Error: {error}\n{}", self.output),
            None => self.output.clone(),
        }
    }

    /// Classifies the result by its text: any marker substring in the
    /// displayed text counts as failure, regardless of exit status.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.invocation_failed() || contains_failure_marker(&self.display_text())
    }
}

/// Case-sensitive check for any of the [`FAILURE_MARKERS`].
#[must_use]
pub fn contains_failure_marker(text: &str) -> bool {
    FAILURE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Runs git with an argument vector.
pub trait GitRunner {
    fn run(&mut self, args: &[String]) -> CommandResult;

    /// Runs git and returns the text to show the user.
    fn execute(&mut self, args: &[String]) -> String {
        self.run(args).display_text()
    }
}

/// Spawns the real git executable in a repository directory.
#[derive(Debug, Clone)]
pub struct GitCommand {
    binary: String,
    repo_path: PathBuf,
}

impl GitCommand {
    pub fn new(binary: impl Into<String>, repo_path: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            repo_path: repo_path.into(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.git_binary.clone(), settings.repo_path.clone())
    }
}

impl GitRunner for GitCommand {
    fn run(&mut self, args: &[String]) -> CommandResult {
        debug!("Running `{} {}`", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.repo_path)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not launch `{}`: {e}", self.binary);
                return CommandResult::failed(e.to_string(), "");
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            CommandResult::success(text)
        } else {
            warn!("`{} {}` exited with {}", self.binary, args.join(" "), output.status);
            CommandResult::failed(output.status.to_string(), text)
        }
    }
}
