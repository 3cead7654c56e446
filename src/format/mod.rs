mod text;

pub(crate) use text::{format_item_line, single_line};
