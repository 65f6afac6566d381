//! Gitify CLI Library
//!
//! This crate provides the terminal interface for gitify: a menu of git
//! operations, the forms that collect input for them, and the display of
//! each command's result.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu`]: The interactive menu, key handling and form prompts
//!
//! Everything that does not touch the terminal lives in `gitify_core`.
//!
//! # Examples
//!
//! ```bash
//! # Manage the repository in the current directory
//! gitify
//!
//! # Manage another repository
//! gitify --repo-path ~/code/project
//!
//! # Use a specific settings file
//! gitify -c ~/dotfiles/gitify.yml
//! ```

pub mod cli_args;
pub mod menu;
