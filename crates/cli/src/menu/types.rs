//! Type definitions for the menu and form prompts.
//!
//! This module defines the state the view owns: the menu cursor and the last
//! output, plus the outcome of feeding a key to a prompt.

use gitify_core::actions::MenuAction;

/// Direction to move the menu cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// What the menu loop should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Nothing to do beyond redrawing
    Stay,
    /// Run the action under the cursor
    Dispatch(MenuAction),
    Quit,
}

/// The result of feeding one key to a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome<T> {
    /// Keep reading keys
    Continue,
    Submit(T),
    Cancel,
}

/// State owned by the menu view.
///
/// `output` has a single writer: the text the dispatcher returns for the
/// last completed action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Index into [`MenuAction::ALL`]
    pub selected_index: usize,
    pub output: String,
}

impl MenuState {
    #[must_use]
    pub fn selected_action(&self) -> MenuAction {
        MenuAction::ALL[self.selected_index.min(MenuAction::ALL.len() - 1)]
    }

    /// Moves the cursor, stopping at the first and last entries.
    pub fn move_selection(&mut self, direction: CycleDirection) {
        match direction {
            CycleDirection::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            CycleDirection::Down => {
                if self.selected_index + 1 < MenuAction::ALL.len() {
                    self.selected_index += 1;
                }
            }
        }
    }

    /// Replaces the output with the dispatcher's text. `None` means the
    /// action was cancelled, so the previous output stays.
    pub fn apply_output(&mut self, output: Option<String>) {
        if let Some(output) = output {
            self.output = output;
        }
    }
}
