use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(about = "Library catalog and lending tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding catalog.json and config.json (defaults to the
    /// user data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the catalog
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        genre: String,
        isbn: String,
    },

    /// Remove an item permanently
    #[command(alias = "rm")]
    Remove {
        /// Item id
        id: String,
    },

    /// Lend an item to a borrower
    #[command(alias = "l")]
    Lend {
        /// Item id
        id: String,
        /// Borrower name
        borrower: String,
        /// Loan duration in calendar days (default from config, normally 14)
        #[arg(short = 'n', long)]
        days: Option<i64>,
    },

    /// Return a lent item, charging any overdue fine
    #[command(alias = "r")]
    Return {
        /// Item id
        id: String,
    },

    /// Search title, author and genre for a term
    #[command(alias = "s")]
    Search { term: String },

    /// List items of one genre
    #[command(alias = "g")]
    Genre { genre: String },

    /// Show currently-overdue loans and their fines
    Overdue,

    /// Print the catalog summary report
    Report,

    /// List the whole catalog
    #[command(alias = "ls")]
    List,
}
