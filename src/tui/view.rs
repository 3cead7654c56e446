use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{Focus, TuiState};
use crate::format;

const TITLE: &str = "Saved Notes";
const INPUT_TITLE: &str = "Type something to save";
const EMPTY_LIST_TEXT: &str = "No notes yet";
const HELP_TEXT: &str = "Enter save  Tab switch  Up/Down scroll  Esc quit";

pub(crate) fn draw_tui(frame: &mut Frame<'_>, state: &TuiState) {
    let layout = split_layout(frame.area());

    draw_title(frame, layout.title_area);
    draw_input(frame, state, layout.input_area);
    draw_list(frame, state, layout.list_area);
    draw_help(frame, layout.help_area);
}

fn draw_title(frame: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(Line::from(TITLE))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn draw_input(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let input_widget = Paragraph::new(state.input.text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(INPUT_TITLE)
                .border_style(focus_style(state.focus, Focus::Input)),
        )
        .scroll((0, state.input.scroll_offset(area)));
    frame.render_widget(input_widget, area);
    if matches!(state.focus, Focus::Input) {
        frame.set_cursor_position(state.input.cursor_position(area));
    }
}

fn draw_list(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(state))
        .border_style(focus_style(state.focus, Focus::List));

    if state.items.is_empty() {
        let placeholder = Paragraph::new(Line::from(EMPTY_LIST_TEXT))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let list_items: Vec<ListItem> = state
        .items
        .iter()
        .map(|text| ListItem::new(format::single_line(text)))
        .collect();
    let list_widget = List::new(list_items)
        .block(block)
        .highlight_symbol("")
        .highlight_style(focus_style(state.focus, Focus::List));
    let mut list_state = ListState::default();
    list_state.select(state.selected);
    frame.render_stateful_widget(list_widget, area, &mut list_state);
}

fn draw_help(frame: &mut Frame<'_>, area: Rect) {
    let help = Paragraph::new(Line::from(HELP_TEXT)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn list_title(state: &TuiState) -> String {
    let active_label = if matches!(state.focus, Focus::List) {
        " [active]"
    } else {
        ""
    };
    format!("Notes ({}){}", state.items.len(), active_label)
}

fn focus_style(current: Focus, target: Focus) -> Style {
    if current == target {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

struct LayoutAreas {
    title_area: Rect,
    input_area: Rect,
    list_area: Rect,
    help_area: Rect,
}

fn split_layout(area: Rect) -> LayoutAreas {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    LayoutAreas {
        title_area: areas[0],
        input_area: areas[1],
        list_area: areas[2],
        help_area: areas[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &TuiState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| draw_tui(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(60)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn draws_title_input_and_items_newest_first() {
        let mut state = TuiState::new(vec!["second".into(), "first".into()]);
        state.input.insert_char('h');
        state.input.insert_char('i');
        let rows = render(&state);

        assert!(rows[0].starts_with(TITLE));
        assert!(screen_contains(&rows, INPUT_TITLE));
        assert!(screen_contains(&rows, "│hi"));
        assert!(screen_contains(&rows, "Notes (2)"));

        let second_row = rows.iter().position(|row| row.contains("second")).unwrap();
        let first_row = rows.iter().position(|row| row.contains("first")).unwrap();
        assert!(second_row < first_row);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let rows = render(&TuiState::new(Vec::new()));
        assert!(screen_contains(&rows, "Notes (0)"));
        assert!(screen_contains(&rows, EMPTY_LIST_TEXT));
        assert!(screen_contains(&rows, HELP_TEXT));
    }

    #[test]
    fn multiline_items_render_on_one_row() {
        let rows = render(&TuiState::new(vec!["line one\nline two".into()]));
        assert!(screen_contains(&rows, "line one line two"));
    }

    #[test]
    fn active_list_is_labelled() {
        let mut state = TuiState::new(vec!["x".into()]);
        state.toggle_focus();
        assert!(screen_contains(&render(&state), "Notes (1) [active]"));
    }
}
