//! Terminal implementation of [`FieldPrompter`].
//!
//! Every prompt redraws the whole screen on each key press. Key handling
//! lives in [`super::input`]; this module only draws and reads events.

use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use gitify_core::error::Result;
use gitify_core::form::{
    ConfirmField, FieldPrompter, MultiSelectField, Prompted, SelectField, TextField,
};
use itertools::Itertools;
use log::debug;

use super::colors::Palette;
use super::input::{ConfirmInput, MultiSelectInput, SelectInput, TextInput};
use super::types::KeyOutcome;
use super::SELECTED_MARKER;

/// Rows taken by the title, filter line and help line around a list.
const LIST_CHROME_ROWS: u16 = 4;

/// Draws prompts in the current (raw mode, alternate) screen.
pub struct TerminalPrompter {
    palette: Palette,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

fn read_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                return Ok(key_event);
            }
        }
    }
}

fn begin_frame(title: &str) -> Result<Stdout> {
    let mut stdout = stdout();
    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        cursor::MoveToNextLine(2)
    )?;
    Ok(stdout)
}

fn print_colored(stdout: &mut Stdout, text: &str, color: Color) -> Result<()> {
    queue!(
        stdout,
        SetForegroundColor(color),
        Print(text),
        SetForegroundColor(Color::Reset),
        cursor::MoveToNextLine(1)
    )?;
    Ok(())
}

/// Formats `(key, action)` pairs as a single help line.
fn help_line(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(key, action)| format!("{key}: {action}"))
        .join("   ")
}

fn finish_frame(mut stdout: Stdout, help: &[(&str, &str)]) -> Result<()> {
    queue!(stdout, cursor::MoveToNextLine(1))?;
    print_colored(&mut stdout, &help_line(help), Color::DarkGrey)?;
    stdout.flush()?;
    Ok(())
}

/// First row to show so that `cursor` stays inside `rows` visible rows.
fn scroll_offset(cursor: usize, rows: usize) -> usize {
    cursor.saturating_sub(rows.saturating_sub(1))
}

fn list_rows() -> Result<usize> {
    let (_, height) = terminal::size()?;
    Ok(height.saturating_sub(LIST_CHROME_ROWS).max(1) as usize)
}

impl TerminalPrompter {
    fn draw_text(&self, field: &TextField, input: &TextInput, error: Option<&str>) -> Result<()> {
        let mut stdout = begin_frame(&field.title)?;

        queue!(stdout, Print("> "))?;
        if input.value.is_empty() {
            let placeholder = field.placeholder.as_deref().unwrap_or_default();
            queue!(
                stdout,
                SetAttribute(Attribute::Dim),
                Print(placeholder),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(stdout, Print(&input.value))?;
        }
        queue!(stdout, cursor::MoveToNextLine(1))?;

        if let Some(limit) = input.char_limit {
            let count = format!("{}/{limit}", input.value.chars().count());
            print_colored(&mut stdout, &count, Color::DarkGrey)?;
        }

        if let Some(error) = error {
            print_colored(&mut stdout, &format!("* {error}"), Color::Red)?;
        }

        finish_frame(stdout, &[("enter", "submit"), ("esc", "cancel")])
    }

    fn draw_select(&self, field: &SelectField, input: &SelectInput) -> Result<()> {
        let mut stdout = begin_frame(&field.title)?;
        let rows = list_rows()?;
        let offset = scroll_offset(input.cursor, rows);

        for (i, option) in field.options.iter().enumerate().skip(offset).take(rows) {
            if i == input.cursor {
                print_colored(
                    &mut stdout,
                    &format!("{SELECTED_MARKER}{}", option.label),
                    self.palette.highlight,
                )?;
            } else {
                print_colored(&mut stdout, &format!("  {}", option.label), Color::Reset)?;
            }
        }

        finish_frame(
            stdout,
            &[("↑/↓", "move"), ("enter", "select"), ("esc", "cancel")],
        )
    }

    fn draw_multi_select(&self, field: &MultiSelectField, input: &MultiSelectInput) -> Result<()> {
        let mut stdout = begin_frame(&field.title)?;
        let rows = list_rows()?;
        let offset = scroll_offset(input.cursor, rows);

        if input.visible.is_empty() {
            print_colored(&mut stdout, "No matching files!", Color::Red)?;
        }

        for (position, &index) in input.visible.iter().enumerate().skip(offset).take(rows) {
            let check = if input.checked[index] { "[x]" } else { "[ ]" };
            let line = format!("{check} {}", input.labels[index]);

            if position == input.cursor {
                print_colored(
                    &mut stdout,
                    &format!("{SELECTED_MARKER}{line}"),
                    self.palette.highlight,
                )?;
            } else {
                print_colored(&mut stdout, &format!("  {line}"), Color::Reset)?;
            }
        }

        if input.is_filtering {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                Print(format!("Filter: {}", input.filter_text)),
                SetAttribute(Attribute::Reset),
                cursor::MoveToNextLine(1)
            )?;
        }

        let help: &[(&str, &str)] = if input.is_filtering {
            &[("<esc>", "Stop Filtering"), ("space", "toggle"), ("enter", "submit")]
        } else {
            &[
                ("space", "toggle"),
                ("/", "filter"),
                ("enter", "submit"),
                ("esc", "cancel"),
            ]
        };
        finish_frame(stdout, help)
    }

    fn draw_confirm(&self, field: &ConfirmField, input: &ConfirmInput) -> Result<()> {
        let mut stdout = begin_frame(&field.title)?;

        for (label, value) in [("Yes", true), ("No", false)] {
            if input.value == value {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Bold),
                    SetForegroundColor(self.palette.highlight),
                    Print(format!("[{label}]")),
                    SetForegroundColor(Color::Reset),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(stdout, Print(format!(" {label} ")))?;
            }
            queue!(stdout, Print("   "))?;
        }
        queue!(stdout, cursor::MoveToNextLine(1))?;

        finish_frame(
            stdout,
            &[
                ("y/n", "answer"),
                ("←/→", "toggle"),
                ("enter", "submit"),
                ("esc", "cancel"),
            ],
        )
    }
}

impl FieldPrompter for TerminalPrompter {
    fn prompt_text(
        &mut self,
        field: &TextField,
        previous: Option<(&str, &str)>,
    ) -> Result<Prompted<String>> {
        let (initial, error) = match previous {
            Some((value, message)) => (value, Some(message)),
            None => ("", None),
        };
        let mut input = TextInput::new(initial, field.char_limit);

        loop {
            self.draw_text(field, &input, error)?;
            match input.handle_key(read_key()?) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(value) => return Ok(Prompted::Value(value)),
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn prompt_select(&mut self, field: &SelectField) -> Result<Prompted<String>> {
        let mut input = SelectInput::new(field.options.len());

        loop {
            self.draw_select(field, &input)?;
            match input.handle_key(read_key()?) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(index) => {
                    return Ok(Prompted::Value(field.options[index].value.clone()));
                }
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn prompt_multi_select(&mut self, field: &MultiSelectField) -> Result<Prompted<Vec<String>>> {
        let labels = field.options.iter().map(|o| o.label.clone()).collect();
        let mut input = MultiSelectInput::new(labels);

        loop {
            self.draw_multi_select(field, &input)?;
            match input.handle_key(read_key()?) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(indexes) => {
                    debug!("{} option(s) checked in `{}`", indexes.len(), field.key);
                    let values = indexes
                        .into_iter()
                        .map(|i| field.options[i].value.clone())
                        .collect();
                    return Ok(Prompted::Value(values));
                }
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn prompt_confirm(&mut self, field: &ConfirmField) -> Result<Prompted<bool>> {
        let mut input = ConfirmInput::new(field.default);

        loop {
            self.draw_confirm(field, &input)?;
            match input.handle_key(read_key()?) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(value) => return Ok(Prompted::Value(value)),
                KeyOutcome::Cancel => return Ok(Prompted::Cancelled),
            }
        }
    }
}
