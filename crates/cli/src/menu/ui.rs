use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, terminal, ExecutableCommand};
use gitify_core::actions::MenuAction;
use gitify_core::dispatch::Dispatcher;
use gitify_core::error::Result;
use gitify_core::execution::GitRunner;
use log::info;

use super::colors::Palette;
use super::input::handle_menu_key;
use super::prompts::TerminalPrompter;
use super::types::{MenuCommand, MenuState};
use super::SELECTED_MARKER;

const HEADER: &str = "Gitify - Manage Git Repos";
const FOOTER: &str = "Press 'q' to exit.";

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Lines of output that fit below the menu, leaving room for the footer.
///
/// When the output is longer, the last row says how many lines were cut.
fn visible_output_lines(output: &str, terminal_height: u16) -> Vec<String> {
    // Header, blank line, menu entries, blank line before output, blank line before footer, footer
    let used_rows = MenuAction::ALL.len() + 5;
    let available = (terminal_height as usize).saturating_sub(used_rows);

    let lines: Vec<&str> = output.lines().collect();
    if lines.len() <= available {
        return lines.into_iter().map(ToString::to_string).collect();
    }
    if available == 0 {
        return Vec::new();
    }

    let shown = available - 1;
    let mut visible: Vec<String> = lines[..shown].iter().map(ToString::to_string).collect();
    visible.push(format!("… ({} more lines)", lines.len() - shown));
    visible
}

fn print_line(stdout: &mut Stdout, text: &str, color: Color) -> Result<()> {
    queue!(
        stdout,
        SetForegroundColor(color),
        Print(text),
        SetForegroundColor(Color::Reset),
        cursor::MoveToNextLine(1)
    )?;
    Ok(())
}

fn redraw_ui(state: &MenuState, palette: &Palette) -> Result<()> {
    let mut stdout = stdout();
    let (_, height) = terminal::size()?;

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(HEADER),
        SetAttribute(Attribute::Reset),
        cursor::MoveToNextLine(2)
    )?;

    for (i, action) in MenuAction::ALL.iter().enumerate() {
        if i == state.selected_index {
            print_line(
                &mut stdout,
                &format!("{SELECTED_MARKER}{action}"),
                palette.highlight,
            )?;
        } else {
            print_line(&mut stdout, &format!("  {action}"), Color::Reset)?;
        }
    }

    queue!(stdout, cursor::MoveToNextLine(1))?;
    for line in visible_output_lines(&state.output, height) {
        print_line(&mut stdout, &line, palette.output)?;
    }

    queue!(stdout, cursor::MoveToNextLine(1), Print(FOOTER))?;
    stdout.flush()?;
    Ok(())
}

/// Runs the menu until the user quits.
///
/// Each selection is handed to the dispatcher; forms are drawn on the same
/// screen while it runs. A cancelled form leaves the previous output shown.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read or written.
pub fn run_menu<R: GitRunner>(dispatcher: &mut Dispatcher<R>, palette: Palette) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let mut state = MenuState::default();
    let mut prompter = TerminalPrompter::new(palette);

    loop {
        redraw_ui(&state, &palette)?;

        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match handle_menu_key(&mut state, key_event) {
            MenuCommand::Stay => {}
            MenuCommand::Dispatch(action) => {
                let output = dispatcher.dispatch(action, &mut prompter)?;
                state.apply_output(output);
            }
            MenuCommand::Quit => {
                info!("Quitting");
                return Ok(());
            }
        }
    }
}
