//! Drives whole actions with key presses.
//!
//! A prompter built on the same key handlers as the terminal prompter feeds
//! scripted key events into each field, so these tests cover the path from
//! key press to git invocation without a real terminal.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gitify_cli::menu::input::{
    handle_menu_key, ConfirmInput, MultiSelectInput, SelectInput, TextInput,
};
use gitify_cli::menu::{KeyOutcome, MenuCommand, MenuState};
use gitify_core::dispatch::Dispatcher;
use gitify_core::error::Result;
use gitify_core::execution::{CommandResult, GitRunner};
use gitify_core::form::{
    ConfirmField, FieldPrompter, MultiSelectField, Prompted, SelectField, TextField,
};

struct KeyScript {
    keys: VecDeque<KeyEvent>,
}

impl KeyScript {
    fn new(keys: Vec<KeyEvent>) -> Self {
        Self { keys: keys.into() }
    }

    fn next_key(&mut self) -> KeyEvent {
        // Running out of keys behaves like pressing escape
        self.keys
            .pop_front()
            .unwrap_or_else(|| key(KeyCode::Esc))
    }
}

impl FieldPrompter for KeyScript {
    fn prompt_text(
        &mut self,
        field: &TextField,
        previous: Option<(&str, &str)>,
    ) -> Result<Prompted<String>> {
        let initial = previous.map(|(value, _)| value).unwrap_or_default();
        let mut input = TextInput::new(initial, field.char_limit);
        loop {
            match input.handle_key(self.next_key()) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(value) => return Ok(Prompted::Value(value)),
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn prompt_select(&mut self, field: &SelectField) -> Result<Prompted<String>> {
        let mut input = SelectInput::new(field.options.len());
        loop {
            match input.handle_key(self.next_key()) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(i) => return Ok(Prompted::Value(field.options[i].value.clone())),
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn prompt_multi_select(&mut self, field: &MultiSelectField) -> Result<Prompted<Vec<String>>> {
        let labels = field.options.iter().map(|o| o.label.clone()).collect();
        let mut input = MultiSelectInput::new(labels);
        loop {
            match input.handle_key(self.next_key()) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(indexes) => {
                    return Ok(Prompted::Value(
                        indexes
                            .into_iter()
                            .map(|i| field.options[i].value.clone())
                            .collect(),
                    ))
                }
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn prompt_confirm(&mut self, field: &ConfirmField) -> Result<Prompted<bool>> {
        let mut input = ConfirmInput::new(field.default);
        loop {
            match input.handle_key(self.next_key()) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(value) => return Ok(Prompted::Value(value)),
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }
}

#[derive(Default)]
struct FakeGit {
    calls: Vec<String>,
}

impl GitRunner for FakeGit {
    fn run(&mut self, args: &[String]) -> CommandResult {
        let joined = args.join(" ");
        self.calls.push(joined.clone());
        match joined.as_str() {
            "status --porcelain" => CommandResult::success(" M README.md\n?? src/new.rs\n"),
            "rev-parse --abbrev-ref HEAD" => CommandResult::success("main\n"),
            "remote" => CommandResult::success("origin\n"),
            _ => CommandResult::success(""),
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// Moves the menu cursor to `index` and presses enter.
fn select_menu_entry(state: &mut MenuState, index: usize) -> MenuCommand {
    for _ in 0..index {
        handle_menu_key(state, key(KeyCode::Down));
    }
    handle_menu_key(state, key(KeyCode::Enter))
}

fn run_entry(index: usize, keys: Vec<KeyEvent>) -> (MenuState, Vec<String>) {
    let mut state = MenuState {
        selected_index: 0,
        output: "previous output".to_string(),
    };
    let MenuCommand::Dispatch(action) = select_menu_entry(&mut state, index) else {
        panic!("Expected a dispatch");
    };

    let mut dispatcher = Dispatcher::new(FakeGit::default());
    let output = dispatcher.dispatch(action, &mut KeyScript::new(keys)).unwrap();
    state.apply_output(output);

    (state, dispatcher.runner().calls.clone())
}

#[test]
fn test_add_remote_by_typing() {
    let mut keys = typed("origin");
    keys.push(key(KeyCode::Enter));
    keys.extend(typed("https://example.com/repo.git"));
    keys.push(key(KeyCode::Enter));

    let (state, calls) = run_entry(1, keys);

    assert_eq!(
        calls,
        vec!["remote add origin https://example.com/repo.git", "remote -v"]
    );
    assert!(state
        .output
        .starts_with("Remote added successfully: origin -> https://example.com/repo.git"));
}

#[test]
fn test_escape_in_second_field_keeps_output() {
    let mut keys = typed("origin");
    keys.push(key(KeyCode::Enter));
    keys.push(key(KeyCode::Esc));

    let (state, calls) = run_entry(1, keys);

    assert!(calls.is_empty());
    assert_eq!(state.output, "previous output");
}

#[test]
fn test_stage_second_file_with_space() {
    // Options: Select all, Deselect all, README.md, src/new.rs
    let keys = vec![
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Char(' ')),
        key(KeyCode::Enter),
    ];

    let (_, calls) = run_entry(2, keys);

    assert_eq!(calls, vec!["status --porcelain", "add src/new.rs"]);
}

#[test]
fn test_stage_select_all_after_leaving_filter() {
    let mut keys = vec![key(KeyCode::Char('/'))];
    keys.extend(typed("select"));
    keys.push(key(KeyCode::Esc));
    keys.push(key(KeyCode::Char(' ')));
    keys.push(key(KeyCode::Enter));

    let (_, calls) = run_entry(2, keys);

    assert_eq!(calls, vec!["status --porcelain", "add README.md src/new.rs"]);
}

#[test]
fn test_stage_file_found_by_filter() {
    let mut keys = vec![key(KeyCode::Char('/'))];
    keys.extend(typed("new"));
    keys.push(key(KeyCode::Char(' ')));
    keys.push(key(KeyCode::Enter));

    let (_, calls) = run_entry(2, keys);

    assert_eq!(calls, vec!["status --porcelain", "add src/new.rs"]);
}

#[test]
fn test_commit_message_typed() {
    let mut keys = typed("Update readme");
    keys.push(key(KeyCode::Enter));

    let (_, calls) = run_entry(3, keys);

    assert_eq!(calls, vec!["commit -am Update readme"]);
}

#[test]
fn test_push_accepting_defaults() {
    // Pick the only remote, keep the current branch, decline upstream
    let keys = vec![
        key(KeyCode::Enter),
        key(KeyCode::Enter),
        key(KeyCode::Char('n')),
    ];

    let (state, calls) = run_entry(4, keys);

    assert_eq!(calls.last().unwrap(), "push origin main");
    assert_eq!(state.output, "Pushed main to origin\n\n");
}

#[test]
fn test_push_with_upstream_by_default() {
    let keys = vec![key(KeyCode::Enter), key(KeyCode::Enter), key(KeyCode::Enter)];

    let (_, calls) = run_entry(4, keys);

    assert_eq!(calls.last().unwrap(), "push -u origin main");
}
