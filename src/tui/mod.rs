use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

mod handler;
mod state;
mod view;

use crate::db::Store;
use handler::handle_tui_key;
use state::TuiState;
use view::draw_tui;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

const TUI_POLL_MS: u64 = 200;

pub(crate) fn run_tui(store: &Store) -> Result<()> {
    let items = store.list_all().context("failed to read notes")?;
    let mut terminal = setup_terminal()?;
    let mut state = TuiState::new(items);
    info!("event=tui_start module=tui status=ok items={}", state.items.len());

    let result = run_tui_loop(&mut terminal, store, &mut state);
    let restored = restore_terminal(&mut terminal);
    if let Err(err) = &result {
        error!("event=tui_stop module=tui status=error error={:#}", err);
    } else {
        info!("event=tui_stop module=tui status=ok");
    }
    prefer_loop_error(result, restored)
}

/// A restore failure is reported only when the loop itself succeeded.
fn prefer_loop_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    result.and(restored)
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    enter_alternate_screen().inspect_err(|_| {
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            Err(err.into())
        }
    }
}

/// Runs every restore step even when an earlier one fails.
fn restore_terminal(terminal: &mut Term) -> Result<()> {
    let left_screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let raw_off = disable_raw_mode();
    let cursor_shown = terminal.show_cursor();
    left_screen?;
    raw_off?;
    cursor_shown?;
    Ok(())
}

fn run_tui_loop(terminal: &mut Term, store: &Store, state: &mut TuiState) -> Result<()> {
    loop {
        if state.take_redraw() {
            terminal.draw(|frame| draw_tui(frame, state))?;
        }
        if !poll_event()? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if handle_tui_key(store, state, key)? {
                    break;
                }
            }
            Event::Resize(_, _) => state.request_redraw(),
            _ => {}
        }
    }
    Ok(())
}

fn poll_event() -> Result<bool> {
    Ok(event::poll(Duration::from_millis(TUI_POLL_MS))?)
}
