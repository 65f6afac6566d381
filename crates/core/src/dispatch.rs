//! Turns a menu selection into git invocations.
//!
//! Each action is a short pipeline: optionally collect input through a form,
//! derive the git arguments, then run git and turn the result into the text
//! shown under the menu. A cancelled form yields `None` so the view keeps
//! whatever it was showing before.

use log::{info, warn};

use crate::actions::MenuAction;
use crate::config::DEFAULT_COMMIT_MESSAGE_LIMIT;
use crate::error::Result;
use crate::execution::{CommandResult, GitRunner};
use crate::form::{
    run_form, ConfirmField, FormOutcome, FormSpec, FieldPrompter, MultiSelectField,
    MultiSelection, SelectField, SelectOption, TextField,
};
use crate::status::fetch_changed_files;

/// Text returned for a label that names no action.
pub const UNKNOWN_ACTION: &str = "Unknown action.";

/// Branch merged by the "Merge Branch" action.
pub const MERGE_TARGET: &str = "main";

fn remote_name_not_empty(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("remote name cannot be empty".to_string());
    }
    Ok(())
}

fn remote_url_not_empty(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("remote URL cannot be empty".to_string());
    }
    Ok(())
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

pub struct Dispatcher<R: GitRunner> {
    runner: R,
    commit_message_limit: usize,
}

impl<R: GitRunner> Dispatcher<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            commit_message_limit: DEFAULT_COMMIT_MESSAGE_LIMIT,
        }
    }

    #[must_use]
    pub fn with_commit_message_limit(mut self, commit_message_limit: usize) -> Self {
        self.commit_message_limit = commit_message_limit;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Dispatches the action with the given menu label.
    ///
    /// Unrecognized labels return [`UNKNOWN_ACTION`] without running anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompter fails.
    pub fn dispatch_label<P: FieldPrompter + ?Sized>(
        &mut self,
        label: &str,
        prompter: &mut P,
    ) -> Result<Option<String>> {
        match MenuAction::from_label(label) {
            Some(action) => self.dispatch(action, prompter),
            None => {
                warn!("Unknown action `{label}`");
                Ok(Some(UNKNOWN_ACTION.to_string()))
            }
        }
    }

    /// Runs one action to completion.
    ///
    /// Returns the text to display, or `None` when the user cancelled a form
    /// and the previous output should stay on screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompter fails. Git failures are never errors;
    /// they are part of the returned text.
    pub fn dispatch<P: FieldPrompter + ?Sized>(
        &mut self,
        action: MenuAction,
        prompter: &mut P,
    ) -> Result<Option<String>> {
        info!("Dispatching `{action}`");

        let output = match action {
            MenuAction::InitializeRepository => Some(self.git(&["init"])),
            MenuAction::AddRemote => self.add_remote(prompter)?,
            MenuAction::StageChanges => self.stage_changes(prompter)?,
            MenuAction::CommitChanges => self.commit_changes(prompter)?,
            MenuAction::PushToRemote => self.push_to_remote(prompter)?,
            MenuAction::PullFromRemote => Some(self.git(&["pull"])),
            MenuAction::ShowStatus => Some(self.git(&["status"])),
            MenuAction::ShowBranch => Some(self.git(&["branch"])),
            MenuAction::ShowLog => Some(self.git(&["log", "--oneline"])),
            MenuAction::MergeBranch => Some(self.git(&["merge", MERGE_TARGET])),
            MenuAction::ViewDiff => Some(self.git(&["diff"])),
        };

        if output.is_none() {
            info!("`{action}` cancelled");
        }

        Ok(output)
    }

    fn run(&mut self, args: &[&str]) -> CommandResult {
        self.runner.run(&to_args(args))
    }

    fn git(&mut self, args: &[&str]) -> String {
        self.runner.execute(&to_args(args))
    }

    fn add_remote<P: FieldPrompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Option<String>> {
        let form = FormSpec::new()
            .text(
                TextField::new("name", "Remote Name")
                    .placeholder("origin")
                    .validator(remote_name_not_empty),
            )
            .text(
                TextField::new("url", "Remote URL")
                    .placeholder("https://github.com/username/repo.git")
                    .validator(remote_url_not_empty),
            );

        let FormOutcome::Completed(values) = run_form(prompter, &form)? else {
            return Ok(None);
        };

        let name = values.text("name");
        let url = values.text("url");

        // Guard only: both validators already reject empty values
        if name.is_empty() || url.is_empty() {
            return Ok(Some("Remote name and URL cannot be empty.".to_string()));
        }

        let added = self.run(&["remote", "add", name, url]);
        if added.is_failure() {
            warn!("Adding remote `{name}` failed");
            return Ok(Some(format!(
                "Failed to add remote: {}",
                added.display_text()
            )));
        }

        let remotes = self.git(&["remote", "-v"]);

        Ok(Some(format!(
            "Remote added successfully: {name} -> {url}\n\nAll remotes:\n{remotes}"
        )))
    }

    fn stage_changes<P: FieldPrompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Option<String>> {
        let Some(files) = fetch_changed_files(&mut self.runner) else {
            return Ok(Some("Unable to fetch status.".to_string()));
        };

        if files.is_empty() {
            return Ok(Some("No unstaged changes found.".to_string()));
        }

        let options = files.iter().map(SelectOption::plain).collect();
        let form = FormSpec::new().multi_select(
            MultiSelectField::new("files", "Select files to stage", options).with_bulk_options(),
        );

        let FormOutcome::Completed(values) = run_form(prompter, &form)? else {
            return Ok(None);
        };

        let paths = match values.selection("files") {
            Some(MultiSelection::Cleared) => return Ok(Some("No files staged.".to_string())),
            Some(MultiSelection::All(paths) | MultiSelection::Picked(paths)) if !paths.is_empty() => {
                paths
            }
            _ => return Ok(Some("No files selected.".to_string())),
        };

        let mut args = vec!["add".to_string()];
        args.extend(paths.iter().cloned());

        info!("Staging {} file(s)", paths.len());
        Ok(Some(self.runner.execute(&args)))
    }

    fn commit_changes<P: FieldPrompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Option<String>> {
        let form = FormSpec::new()
            .text(TextField::new("message", "Commit Message").char_limit(self.commit_message_limit));

        let FormOutcome::Completed(values) = run_form(prompter, &form)? else {
            return Ok(None);
        };

        let message = values.text("message").to_string();
        Ok(Some(self.git(&["commit", "-am", message.as_str()])))
    }

    fn push_to_remote<P: FieldPrompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Option<String>> {
        let branch_query = self.run(&["rev-parse", "--abbrev-ref", "HEAD"]);
        let current_branch = branch_query.output.trim().to_string();

        if branch_query.invocation_failed() || current_branch.is_empty() {
            let detail = branch_query.display_text();
            let detail = if detail.trim().is_empty() {
                "no branch name returned"
            } else {
                detail.trim_end()
            };
            warn!("Could not resolve current branch");
            return Ok(Some(format!("Failed to determine current branch: {detail}")));
        }

        let remote_query = self.run(&["remote"]);
        if remote_query.invocation_failed() {
            return Ok(Some(format!(
                "Failed to list remotes: {}",
                remote_query.display_text()
            )));
        }

        let remotes: Vec<SelectOption> = remote_query
            .output
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(SelectOption::plain)
            .collect();

        if remotes.is_empty() {
            return Ok(Some("No remotes configured. Add a remote first.".to_string()));
        }

        let form = FormSpec::new()
            .select(SelectField::new("remote", "Remote", remotes))
            .text(
                TextField::new("branch", "Branch")
                    .placeholder(current_branch.clone())
                    .default_value(current_branch.clone()),
            )
            .confirm(ConfirmField::new("upstream", "Set upstream tracking?", true));

        let FormOutcome::Completed(values) = run_form(prompter, &form)? else {
            return Ok(None);
        };

        let remote = values.choice("remote").unwrap_or_default().to_string();
        let branch = match values.text("branch") {
            "" => current_branch,
            branch => branch.to_string(),
        };

        let mut args = vec!["push"];
        if values.confirmed("upstream") {
            args.push("-u");
        }
        args.push(&remote);
        args.push(&branch);

        let pushed = self.run(&args);
        if pushed.is_failure() {
            warn!("Push to `{remote}` failed");
            return Ok(Some(format!("Failed to push: {}", pushed.display_text())));
        }

        Ok(Some(format!(
            "Pushed {branch} to {remote}\n\n{}",
            pushed.display_text()
        )))
    }
}
