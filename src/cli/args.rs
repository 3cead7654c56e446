use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jot")]
#[command(
    about = "Keep a running list of short notes",
    version,
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// Note to save; opens the interactive list when omitted
    pub(crate) content: Option<String>,

    /// Database file to use instead of ~/.jot/jot.db
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) db: Option<PathBuf>,

    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    pub(crate) log_level: String,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub(crate) version: Option<bool>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Save a note
    Add { content: String },
    /// Print every note, newest first
    #[command(alias = "ls")]
    List,
    Version,
}
