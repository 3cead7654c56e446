use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders `<id>  <text>` on one line, cut to `max_width` display columns.
pub(crate) fn format_item_line(label: &str, text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let prefix = format!("{}  ", label);
    let prefix_width = UnicodeWidthStr::width(prefix.as_str());
    if max_width <= prefix_width {
        return truncate_with_ellipsis(label, max_width);
    }

    let text_width = max_width.saturating_sub(prefix_width);
    let truncated = truncate_with_ellipsis(&single_line(text), text_width);
    format!("{}{}", prefix, truncated)
}

/// Collapses line breaks, tabs and runs of whitespace into single spaces.
pub(crate) fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_with_ellipsis(value: &str, max_width: usize) -> String {
    let value_width = UnicodeWidthStr::width(value);
    if value_width <= max_width {
        return value.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut current_width = 0;
    let mut result = String::new();
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if current_width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_left_alone() {
        assert_eq!(format_item_line("7", "buy milk", 40), "7  buy milk");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let line = format_item_line("12", "a fairly long note about nothing", 16);
        assert_eq!(line, "12  a fairly ...");
        assert_eq!(UnicodeWidthStr::width(line.as_str()), 16);
    }

    #[test]
    fn wide_characters_count_double() {
        let line = format_item_line("1", "漢字漢字漢字", 10);
        assert_eq!(line, "1  漢字...");
    }

    #[test]
    fn narrow_width_keeps_only_the_label() {
        assert_eq!(format_item_line("12345", "text", 4), "1...");
        assert_eq!(format_item_line("1", "text", 0), "");
        assert_eq!(format_item_line("123", "text", 2), "..");
    }

    #[test]
    fn multiline_text_is_flattened() {
        assert_eq!(single_line("first\nsecond\t third\r\n"), "first second third");
    }
}
