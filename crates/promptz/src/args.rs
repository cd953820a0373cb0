use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptz")]
#[command(about = "A fast prompt library for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List prompts (the default command)
    #[command(alias = "ls")]
    List {
        /// Search term; every word must match some field
        #[arg(short, long)]
        search: Option<String>,

        /// Only show prompts of these types
        #[arg(short = 't', long = "type")]
        kinds: Vec<String>,

        /// Only show prompts in these categories
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,
    },

    /// Create a new prompt
    #[command(alias = "n")]
    Create {
        /// Title of the prompt
        title: String,

        /// The prompt text
        content: String,

        /// Type (primary facet), e.g. work, writing
        #[arg(long = "type")]
        kind: Option<String>,

        /// Category (secondary facet)
        #[arg(long)]
        category: Option<String>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Show the full content of one or more prompts
    #[command(alias = "v")]
    Show {
        /// List positions of the prompts (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Edit a prompt; omitted flags keep the current value
    #[command(alias = "e")]
    Edit {
        /// List position of the prompt
        position: usize,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Comma-separated tags (replaces the current tags)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Pin one or more prompts to the front of the list
    #[command(alias = "p")]
    Pin {
        /// List positions of the prompts (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Delete one or more prompts
    #[command(alias = "rm")]
    Delete {
        /// List positions of the prompts (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Remove every prompt matching the selected type and/or category
    Remove {
        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Delete all prompts
    Clear {
        /// Required; clearing is not undoable
        #[arg(long)]
        force: bool,
    },

    /// Import prompts from a CSV file
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Export all prompts to a dated CSV file
    Export {
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show collection totals
    Stats,

    /// List the distinct prompt types
    Types,

    /// List the distinct categories, optionally scoped to types
    Categories {
        #[arg(short = 't', long = "type")]
        kinds: Vec<String>,
    },
}
