use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional JSON file overriding output limits
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a task list to a table
    Apply {
        /// Table snapshot (JSON)
        #[arg(long)]
        table: PathBuf,

        /// Task list (JSON array or {"tasks": [...]})
        #[arg(long)]
        tasks: PathBuf,

        /// Where to write the modified table
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of change records to echo back
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show which cells a task list would change, without writing
    Preview {
        /// Table snapshot (JSON)
        #[arg(long)]
        table: PathBuf,

        /// Task list (JSON array or {"tasks": [...]})
        #[arg(long)]
        tasks: PathBuf,

        /// Number of diff records to echo back
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Replace a pattern across every cell of a table
    ReplaceAll {
        /// Table snapshot (JSON)
        #[arg(long)]
        table: PathBuf,

        /// Regular expression to search for
        #[arg(long)]
        pattern: String,

        /// Replacement text, `$1` style group references allowed
        #[arg(long)]
        replacement: String,

        /// Where to write the modified table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the cell labels a target covers
    Resolve {
        /// Table snapshot (JSON)
        #[arg(long)]
        table: PathBuf,

        /// Target string, e.g. "range A1:B2"
        #[arg(long)]
        target: String,
    },

    /// Print one page of rows
    Page {
        /// Table snapshot (JSON)
        #[arg(long)]
        table: PathBuf,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,
    },
}
