//! Interactive menu and form prompts.
//!
//! This module provides the terminal user interface for gitify: the action
//! menu, the last command output, and the prompts used to fill in forms.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter to run the selected action
//! - Space to toggle files and '/' to filter them when staging
//! - Escape to cancel a form
//! - 'q' or Ctrl-C to quit

// Export public items from submodules
pub mod colors;
pub mod input;
pub mod prompts;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use colors::Palette;
pub use prompts::TerminalPrompter;
pub use types::{KeyOutcome, MenuCommand, MenuState};
pub use ui::run_menu;

/// Prefix of the entry under the cursor
pub const SELECTED_MARKER: &str = "➡ ";
