use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::types::{CycleDirection, KeyOutcome, MenuCommand, MenuState};

fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handles a key press on the main menu.
pub fn handle_menu_key(state: &mut MenuState, key_event: KeyEvent) -> MenuCommand {
    if is_interrupt(&key_event) {
        return MenuCommand::Quit;
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_selection(CycleDirection::Up);
            MenuCommand::Stay
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_selection(CycleDirection::Down);
            MenuCommand::Stay
        }
        KeyCode::Enter => MenuCommand::Dispatch(state.selected_action()),
        KeyCode::Char('q') => MenuCommand::Quit,
        _ => MenuCommand::Stay,
    }
}

/// A single-line text editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub char_limit: Option<usize>,
}

impl TextInput {
    #[must_use]
    pub fn new(initial: &str, char_limit: Option<usize>) -> Self {
        Self {
            value: initial.to_string(),
            char_limit,
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> KeyOutcome<String> {
        if is_interrupt(&key_event) {
            return KeyOutcome::Cancel;
        }

        match key_event.code {
            KeyCode::Enter => KeyOutcome::Submit(self.value.clone()),
            KeyCode::Esc => KeyOutcome::Cancel,
            KeyCode::Backspace => {
                self.value.pop();
                KeyOutcome::Continue
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                let at_limit = self
                    .char_limit
                    .is_some_and(|limit| self.value.chars().count() >= limit);
                if !at_limit {
                    self.value.push(c);
                }
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        }
    }
}

/// A cursor over a fixed list where exactly one entry is picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectInput {
    pub cursor: usize,
    pub len: usize,
}

impl SelectInput {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    /// Submits the index of the picked entry.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> KeyOutcome<usize> {
        if is_interrupt(&key_event) {
            return KeyOutcome::Cancel;
        }

        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                KeyOutcome::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.len {
                    self.cursor += 1;
                }
                KeyOutcome::Continue
            }
            KeyCode::Enter if self.len > 0 => KeyOutcome::Submit(self.cursor),
            KeyCode::Esc => KeyOutcome::Cancel,
            _ => KeyOutcome::Continue,
        }
    }
}

/// A checklist with optional fuzzy filtering of the visible entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSelectInput {
    pub labels: Vec<String>,
    pub checked: Vec<bool>,
    /// Position within [`MultiSelectInput::visible`]
    pub cursor: usize,
    pub is_filtering: bool,
    pub filter_text: String,
    /// Indexes into `labels` that match the filter, in label order
    pub visible: Vec<usize>,
}

impl MultiSelectInput {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let count = labels.len();
        Self {
            labels,
            checked: vec![false; count],
            cursor: 0,
            is_filtering: false,
            filter_text: String::new(),
            visible: (0..count).collect(),
        }
    }

    /// Indexes of every checked entry, filtered out or not.
    #[must_use]
    pub fn checked_indexes(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(i, checked)| checked.then_some(i))
            .collect()
    }

    /// Submits the checked indexes.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> KeyOutcome<Vec<usize>> {
        if is_interrupt(&key_event) {
            return KeyOutcome::Cancel;
        }

        match key_event.code {
            KeyCode::Enter => return KeyOutcome::Submit(self.checked_indexes()),
            KeyCode::Up => self.move_cursor(CycleDirection::Up),
            KeyCode::Down => self.move_cursor(CycleDirection::Down),
            KeyCode::Esc if self.is_filtering => {
                self.is_filtering = false;
                self.filter_text.clear();
                self.refilter();
            }
            KeyCode::Esc => return KeyOutcome::Cancel,
            KeyCode::Backspace if self.is_filtering => {
                self.filter_text.pop();
                self.refilter();
            }
            // Space toggles in filter mode too, so a filtered entry can be checked
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Char(c) if self.is_filtering => {
                self.filter_text.push(c);
                self.refilter();
            }
            KeyCode::Char('/') => self.is_filtering = true,
            KeyCode::Char('k') => self.move_cursor(CycleDirection::Up),
            KeyCode::Char('j') => self.move_cursor(CycleDirection::Down),
            _ => {}
        }

        KeyOutcome::Continue
    }

    fn move_cursor(&mut self, direction: CycleDirection) {
        match direction {
            CycleDirection::Up => self.cursor = self.cursor.saturating_sub(1),
            CycleDirection::Down => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                }
            }
        }
    }

    fn toggle_current(&mut self) {
        if let Some(&index) = self.visible.get(self.cursor) {
            self.checked[index] = !self.checked[index];
        }
    }

    fn refilter(&mut self) {
        let matcher = SkimMatcherV2::default();

        self.visible = self
            .labels
            .iter()
            .enumerate()
            .filter(|(_, label)| {
                self.filter_text.is_empty()
                    || matcher.fuzzy_match(label, &self.filter_text).is_some()
            })
            .map(|(i, _)| i)
            .collect();

        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }
}

/// A yes/no question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmInput {
    pub value: bool,
}

impl ConfirmInput {
    #[must_use]
    pub fn new(default: bool) -> Self {
        Self { value: default }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> KeyOutcome<bool> {
        if is_interrupt(&key_event) {
            return KeyOutcome::Cancel;
        }

        match key_event.code {
            KeyCode::Char('y' | 'Y') => KeyOutcome::Submit(true),
            KeyCode::Char('n' | 'N') => KeyOutcome::Submit(false),
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.value = !self.value;
                KeyOutcome::Continue
            }
            KeyCode::Enter => KeyOutcome::Submit(self.value),
            KeyCode::Esc => KeyOutcome::Cancel,
            _ => KeyOutcome::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_c() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_menu_enter_dispatches_selected() {
        let mut state = MenuState::default();
        handle_menu_key(&mut state, key(KeyCode::Down));
        handle_menu_key(&mut state, key(KeyCode::Char('j')));

        let command = handle_menu_key(&mut state, key(KeyCode::Enter));
        assert_eq!(
            command,
            MenuCommand::Dispatch(gitify_core::actions::MenuAction::StageChanges)
        );
    }

    #[test]
    fn test_menu_quit_keys() {
        let mut state = MenuState::default();
        assert_eq!(handle_menu_key(&mut state, key(KeyCode::Char('q'))), MenuCommand::Quit);
        assert_eq!(handle_menu_key(&mut state, ctrl_c()), MenuCommand::Quit);
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::new("", None);
        for c in "orig".chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), KeyOutcome::Continue);
        }
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Char('n')));

        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            KeyOutcome::Submit("orin".to_string())
        );
    }

    #[test]
    fn test_text_input_respects_limit() {
        let mut input = TextInput::new("", Some(3));
        for c in "abcdef".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value, "abc");
    }

    #[test]
    fn test_text_input_cancel() {
        let mut input = TextInput::new("draft", None);
        assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
        assert_eq!(input.handle_key(ctrl_c()), KeyOutcome::Cancel);
    }

    #[test]
    fn test_select_input_clamps_and_submits() {
        let mut input = SelectInput::new(2);
        input.handle_key(key(KeyCode::Up));
        assert_eq!(input.cursor, 0);

        input.handle_key(key(KeyCode::Down));
        input.handle_key(key(KeyCode::Down));
        assert_eq!(input.cursor, 1);

        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(1));
    }

    #[test]
    fn test_select_input_empty_cannot_submit() {
        let mut input = SelectInput::new(0);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyOutcome::Continue);
        assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
    }

    #[test]
    fn test_multi_select_toggle_and_submit() {
        let mut input = MultiSelectInput::new(vec![
            "Select all".to_string(),
            "Deselect all".to_string(),
            "a.txt".to_string(),
        ]);

        input.handle_key(key(KeyCode::Down));
        input.handle_key(key(KeyCode::Down));
        input.handle_key(key(KeyCode::Char(' ')));
        input.handle_key(key(KeyCode::Up));
        input.handle_key(key(KeyCode::Up));
        input.handle_key(key(KeyCode::Char(' ')));
        // Toggling twice unchecks
        input.handle_key(key(KeyCode::Down));
        input.handle_key(key(KeyCode::Char(' ')));
        input.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            KeyOutcome::Submit(vec![0, 2])
        );
    }

    #[test]
    fn test_multi_select_filtering() {
        let mut input = MultiSelectInput::new(vec![
            "src/main.rs".to_string(),
            "README.md".to_string(),
            "src/lib.rs".to_string(),
        ]);

        input.handle_key(key(KeyCode::Char('/')));
        assert!(input.is_filtering);
        for c in "lib".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.visible, vec![2]);

        input.handle_key(key(KeyCode::Esc));
        assert!(!input.is_filtering);
        assert_eq!(input.visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_multi_select_checks_survive_filter() {
        let mut input = MultiSelectInput::new(vec!["one".to_string(), "two".to_string()]);
        input.handle_key(key(KeyCode::Char(' ')));

        input.handle_key(key(KeyCode::Char('/')));
        input.handle_key(key(KeyCode::Char('t')));
        input.handle_key(key(KeyCode::Char('w')));

        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(vec![0]));
    }

    #[test]
    fn test_multi_select_space_toggles_while_filtering() {
        let mut input = MultiSelectInput::new(vec![
            "Select all".to_string(),
            "Deselect all".to_string(),
            "README.md".to_string(),
            "src/new.rs".to_string(),
        ]);

        input.handle_key(key(KeyCode::Char('/')));
        for c in "new".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.visible, vec![3]);

        input.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(input.filter_text, "new");
        assert_eq!(input.visible, vec![3]);
        assert!(input.is_filtering);

        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(vec![3]));
    }

    #[test]
    fn test_multi_select_escape_cancels_when_not_filtering() {
        let mut input = MultiSelectInput::new(vec!["one".to_string()]);
        assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
    }

    #[test]
    fn test_confirm_input() {
        let mut input = ConfirmInput::new(true);
        input.handle_key(key(KeyCode::Left));
        assert!(!input.value);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(false));

        assert_eq!(input.handle_key(key(KeyCode::Char('y'))), KeyOutcome::Submit(true));
        assert_eq!(input.handle_key(key(KeyCode::Char('n'))), KeyOutcome::Submit(false));
        assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
    }
}
