use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use super::state::{Focus, TuiState};
use crate::{db::Store, domain::item::NewItem};

#[derive(Clone, Copy, Debug)]
enum Action {
    Quit,
    ToggleFocus,
    SubmitInput,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    Backspace,
    Delete,
    InsertChar(char),
}

/// Applies one key press. Returns `true` when the UI should exit.
pub(crate) fn handle_tui_key(store: &Store, state: &mut TuiState, key: KeyEvent) -> Result<bool> {
    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }
    let Some(action) = key_to_action(&key, state.focus) else {
        return Ok(false);
    };
    let quit = apply_action(store, state, action)?;
    if !quit {
        state.request_redraw();
    }
    Ok(quit)
}

fn key_to_action(key: &KeyEvent, focus: Focus) -> Option<Action> {
    let code = key.code;
    let modifiers = key.modifiers;

    if matches!(
        (code, modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _)
    ) {
        return Some(Action::Quit);
    }

    if matches!(focus, Focus::List) && matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(Action::Quit);
    }

    match code {
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Enter => Some(Action::SubmitInput),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Home => Some(Action::MoveHome),
        KeyCode::End => Some(Action::MoveEnd),
        KeyCode::Char('k') if matches!(focus, Focus::List) => Some(Action::MoveUp),
        KeyCode::Char('j') if matches!(focus, Focus::List) => Some(Action::MoveDown),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Char(ch)
            if matches!(focus, Focus::Input) && !modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Action::InsertChar(ch))
        }
        _ => None,
    }
}

fn apply_action(store: &Store, state: &mut TuiState, action: Action) -> Result<bool> {
    match (action, state.focus) {
        (Action::Quit, _) => return Ok(true),
        (Action::ToggleFocus, _) => state.toggle_focus(),
        (Action::SubmitInput, Focus::Input) => submit_input(store, state)?,
        (Action::MoveUp, Focus::List) => state.select_previous(),
        (Action::MoveDown, Focus::List) => state.select_next(),
        (Action::MoveHome, Focus::List) => state.select_first(),
        (Action::MoveEnd, Focus::List) => state.select_last(),
        (Action::MoveLeft, Focus::Input) => state.input.move_left(),
        (Action::MoveRight, Focus::Input) => state.input.move_right(),
        (Action::MoveHome, Focus::Input) => state.input.move_home(),
        (Action::MoveEnd, Focus::Input) => state.input.move_end(),
        (Action::Backspace, Focus::Input) => state.input.backspace(),
        (Action::Delete, Focus::Input) => state.input.delete_char(),
        (Action::InsertChar(ch), Focus::Input) => state.input.insert_char(ch),
        _ => {}
    }
    Ok(false)
}

/// Saves the input as a new item, then reloads the list. Empty input is
/// ignored without feedback.
fn submit_input(store: &Store, state: &mut TuiState) -> Result<()> {
    if state.input.is_empty() {
        debug!("event=submit module=tui status=skipped reason=empty_input");
        return Ok(());
    }
    store
        .append(&NewItem::new(state.input.text()))
        .context("failed to save note")?;
    state.input.clear();
    refresh_items(store, state)
}

fn refresh_items(store: &Store, state: &mut TuiState) -> Result<()> {
    let items = store.list_all().context("failed to reload notes")?;
    state.set_items(items);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("jot.db")).unwrap();
        (dir, store)
    }

    fn press(store: &Store, state: &mut TuiState, code: KeyCode) -> bool {
        handle_tui_key(store, state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(store: &Store, state: &mut TuiState, text: &str) {
        for ch in text.chars() {
            press(store, state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn enter_saves_clears_and_refreshes() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(Vec::new());

        type_text(&store, &mut state, "hello");
        assert!(!press(&store, &mut state, KeyCode::Enter));

        assert!(state.input.is_empty());
        assert_eq!(state.items, vec!["hello".to_string()]);
        assert_eq!(state.selected, Some(0));
        assert_eq!(store.list_all().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn newest_submission_is_listed_first() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(Vec::new());

        for text in ["first", "second", "third"] {
            type_text(&store, &mut state, text);
            press(&store, &mut state, KeyCode::Enter);
        }

        assert_eq!(state.items, vec!["third", "second", "first"]);
    }

    #[test]
    fn empty_submission_changes_nothing() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(Vec::new());

        press(&store, &mut state, KeyCode::Enter);

        assert!(state.items.is_empty());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn whitespace_only_input_is_still_saved() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(Vec::new());

        type_text(&store, &mut state, "  ");
        press(&store, &mut state, KeyCode::Enter);

        assert_eq!(store.list_all().unwrap(), vec!["  ".to_string()]);
    }

    #[test]
    fn list_focus_navigates_and_ignores_typing() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(vec!["b".into(), "a".into()]);

        press(&store, &mut state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::List);
        press(&store, &mut state, KeyCode::Char('j'));
        assert_eq!(state.selected, Some(1));
        press(&store, &mut state, KeyCode::Char('k'));
        assert_eq!(state.selected, Some(0));
        press(&store, &mut state, KeyCode::Char('x'));
        press(&store, &mut state, KeyCode::Enter);

        assert!(state.input.is_empty());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn quit_keys() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(Vec::new());

        assert!(!press(&store, &mut state, KeyCode::Char('q')));
        assert_eq!(state.input.text(), "q");
        assert!(press(&store, &mut state, KeyCode::Esc));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_tui_key(&store, &mut state, ctrl_c).unwrap());

        state.toggle_focus();
        assert!(press(&store, &mut state, KeyCode::Char('q')));
    }

    #[test]
    fn handled_keys_request_a_redraw() {
        let (_dir, store) = temp_store();
        let mut state = TuiState::new(Vec::new());
        state.take_redraw();

        press(&store, &mut state, KeyCode::Char('a'));
        assert!(state.take_redraw());

        press(&store, &mut state, KeyCode::F(5));
        assert!(!state.take_redraw());
    }
}
