use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    List,
}

pub(crate) struct TuiState {
    pub(crate) input: InputState,
    pub(crate) items: Vec<String>,
    pub(crate) focus: Focus,
    pub(crate) selected: Option<usize>,
    redraw: bool,
}

impl TuiState {
    pub(crate) fn new(items: Vec<String>) -> Self {
        let mut state = Self {
            input: InputState::new(),
            items: Vec::new(),
            focus: Focus::Input,
            selected: None,
            redraw: true,
        };
        state.set_items(items);
        state
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    /// Replaces the displayed list and moves the selection back to the newest item.
    pub(crate) fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = self.first_index();
        self.request_redraw();
    }

    pub(crate) fn select_previous(&mut self) {
        let Some(current) = self.selected else {
            self.selected = self.first_index();
            return;
        };
        self.selected = Some(current.saturating_sub(1));
    }

    pub(crate) fn select_next(&mut self) {
        let Some(current) = self.selected else {
            self.selected = self.first_index();
            return;
        };
        let max_index = self.items.len().saturating_sub(1);
        self.selected = Some((current + 1).min(max_index));
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = self.first_index();
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.items.len().checked_sub(1);
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Returns whether a redraw was requested, clearing the request.
    pub(crate) fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    fn first_index(&self) -> Option<usize> {
        if self.items.is_empty() { None } else { Some(0) }
    }
}

/// Single-line text field. `cursor` counts chars, not bytes.
pub(crate) struct InputState {
    value: String,
    cursor: usize,
}

impl InputState {
    fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.value
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        let byte_index = byte_index_at_char(&self.value, self.cursor);
        self.value.insert(byte_index, ch);
        self.cursor += 1;
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub(crate) fn delete_char(&mut self) {
        if self.cursor < self.len() {
            self.remove_at_cursor();
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Columns to scroll so the cursor stays inside a bordered box of `area`.
    pub(crate) fn scroll_offset(&self, area: Rect) -> u16 {
        clamp_to_u16(self.scroll_cols(area))
    }

    pub(crate) fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = width_up_to_char(&self.value, self.cursor);
        let visible_col = clamp_to_u16(col - self.scroll_cols(area));
        (area.x + visible_col + 1, area.y + 1)
    }

    fn scroll_cols(&self, area: Rect) -> usize {
        let content_width = area.width.saturating_sub(2).max(1) as usize;
        let col = width_up_to_char(&self.value, self.cursor);
        col.saturating_sub(content_width - 1)
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn remove_at_cursor(&mut self) {
        let remove_at = byte_index_at_char(&self.value, self.cursor);
        if let Some(ch) = self.value[remove_at..].chars().next() {
            self.value
                .replace_range(remove_at..remove_at + ch.len_utf8(), "");
        }
    }
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

fn clamp_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn width_up_to_char(value: &str, char_index: usize) -> usize {
    value
        .chars()
        .take(char_index)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}
