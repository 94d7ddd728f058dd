use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "File-backed catalog manager for a small book collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the backing file (defaults to the platform data dir)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record to the catalog
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Year of publication
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },

    /// Delete a record by id
    #[command(alias = "rm")]
    Delete {
        /// Identifier of the record
        id: u64,
    },

    /// Search records by field
    #[command(alias = "s")]
    Search {
        /// Field to match: title, author or year
        field: String,

        /// Case-insensitive substring to look for
        query: String,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Change a record's status
    Status {
        /// Identifier of the record
        id: u64,

        /// New status: available or checked-out
        status: String,
    },
}
