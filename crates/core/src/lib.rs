//! Gitify Core Library
//!
//! This crate provides the core of gitify, a menu-driven terminal front-end
//! for a fixed set of git operations. It contains everything that does not
//! touch the terminal.
//!
//! # Key Features
//!
//! - **Command Execution**: Run git with an argument vector and capture its output
//! - **Status Parsing**: Turn `git status --porcelain` into a list of changed paths
//! - **Forms**: Ordered, validated input fields with explicit cancellation
//! - **Action Dispatch**: Map a menu entry to forms, git invocations and result text
//! - **Settings**: Optional YAML settings file with sensible defaults
//!
//! # Examples
//!
//! Dispatching an action that needs no input:
//!
//! ```no_run
//! use gitify_core::actions::MenuAction;
//! use gitify_core::dispatch::Dispatcher;
//! use gitify_core::execution::GitCommand;
//! # use gitify_core::form::*;
//! # struct NoPrompts;
//! # impl FieldPrompter for NoPrompts {
//! #     fn prompt_text(&mut self, _: &TextField, _: Option<(&str, &str)>) -> gitify_core::error::Result<Prompted<String>> { Ok(Prompted::Cancelled) }
//! #     fn prompt_select(&mut self, _: &SelectField) -> gitify_core::error::Result<Prompted<String>> { Ok(Prompted::Cancelled) }
//! #     fn prompt_multi_select(&mut self, _: &MultiSelectField) -> gitify_core::error::Result<Prompted<Vec<String>>> { Ok(Prompted::Cancelled) }
//! #     fn prompt_confirm(&mut self, _: &ConfirmField) -> gitify_core::error::Result<Prompted<bool>> { Ok(Prompted::Cancelled) }
//! # }
//!
//! let mut dispatcher = Dispatcher::new(GitCommand::new("git", "."));
//! let log = dispatcher.dispatch(MenuAction::ShowLog, &mut NoPrompts)?;
//! println!("{}", log.unwrap_or_default());
//! # Ok::<(), gitify_core::error::Error>(())
//! ```

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod form;
pub mod status;
