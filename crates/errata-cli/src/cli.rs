use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "errata")]
#[command(about = "Explain console errors in plain language and keep a debugging checklist")]
#[command(version)]
pub struct Cli {
    /// Directory holding the checklist, history and last input
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explain an error message and add it to the history. Reads stdin when no text is given.
    Translate { text: Vec<String> },

    /// Show the quick tip for an error message
    Suggest { text: Vec<String> },

    /// Read lines from stdin and print a tip once input goes quiet
    Watch,

    /// Work with the debugging checklist
    Checklist {
        #[command(subcommand)]
        action: ChecklistCommand,
    },

    /// Work with the recent-error history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Show or clear the saved input
    Input {
        #[command(subcommand)]
        action: InputCommand,
    },

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChecklistCommand {
    /// Print the checklist and progress
    List {
        /// Only show items containing this text (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,
    },
    /// Append a custom item
    Add { label: Vec<String> },
    /// Tick or untick item N (1-based)
    Toggle { number: usize },
    /// Remove item N (1-based)
    Delete { number: usize },
    /// Untick every item
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Print recent errors, newest first
    List,
    /// Show entry N (1 = newest) and restore it as the current input
    Show { number: usize },
    /// Delete all history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum InputCommand {
    Show,
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective config and where it was read from
    Show,
    /// Write a default config file if none exists
    Init,
}
