use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itask")]
#[command(about = "A small, persistent todo-list manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "ITASK_HOME")]
    pub home: Option<PathBuf>,

    /// Verbose logging to stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos
    #[command(alias = "ls")]
    List {
        /// Hide completed todos
        #[arg(long, conflicts_with = "show_completed")]
        hide_completed: bool,

        /// Show completed todos
        #[arg(long)]
        show_completed: bool,
    },

    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Text of the todo (more than 3 characters)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Replace a todo's text (opens the editor if no text is given)
    #[command(alias = "e")]
    Edit {
        /// Index in the visible list, or id prefix
        selector: String,

        /// New text
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// Toggle one or more todos between active and completed
    #[command(visible_alias = "x", alias = "toggle")]
    Done {
        /// Indexes or id prefixes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "rm")]
    Delete {
        /// Indexes or id prefixes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Interactive session
    Shell,

    /// Print the path of the todo storage file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, show-completed, notification-ttl)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
