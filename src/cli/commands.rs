use anyhow::{Context, Result};
use crossterm::terminal;
use log::info;

use crate::{
    app::AppContext,
    cli::args::{Cli, Command},
    domain::item::NewItem,
    format, tui,
};

pub(crate) fn dispatch(app: &AppContext, cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::List) => list_items(app),
        Some(Command::Version) => {
            println!("jot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Add { content }) => add_item(app, &content),
        None => match cli.content {
            Some(content) => add_item(app, &content),
            None => tui::run_tui(app.store()),
        },
    }
}

fn add_item(app: &AppContext, content: &str) -> Result<()> {
    if content.is_empty() {
        info!("event=item_append module=cli status=skipped reason=empty_input");
        return Ok(());
    }
    app.store()
        .append(&NewItem::new(content))
        .context("failed to save note")
}

fn list_items(app: &AppContext) -> Result<()> {
    let items = app.store().list_items().context("failed to read notes")?;
    let terminal_width = terminal::size()
        .map(|(width, _)| width as usize)
        .unwrap_or(80);
    for item in items {
        let line = format::format_item_line(&item.id.to_string(), &item.text, terminal_width);
        println!("{}", line);
    }

    Ok(())
}
