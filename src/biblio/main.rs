use biblio::api::BiblioApi;
use biblio::config::BiblioConfig;
use biblio::error::{BiblioError, Result};
use biblio::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_items, print_messages, print_overdue, print_report};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            genre,
            isbn,
        }) => {
            let result = api.add_item(title, author, genre, isbn)?;
            print_messages(&result.messages);
        }
        Some(Commands::Remove { id }) => {
            let result = api.remove_item(&parse_id(&id)?)?;
            print_messages(&result.messages);
        }
        Some(Commands::Lend { id, borrower, days }) => {
            let result = api.lend(&parse_id(&id)?, borrower, days)?;
            print_messages(&result.messages);
        }
        Some(Commands::Return { id }) => {
            let result = api.return_item(&parse_id(&id)?)?;
            print_messages(&result.messages);
        }
        Some(Commands::Search { term }) => {
            let result = api.search(&term)?;
            print_items(&result.listed_items);
        }
        Some(Commands::Genre { genre }) => {
            let result = api.by_genre(&genre)?;
            print_items(&result.listed_items);
        }
        Some(Commands::Overdue) => {
            let result = api.overdue()?;
            print_overdue(&result.overdue_items);
        }
        Some(Commands::Report) => {
            let result = api.report()?;
            if let Some(report) = &result.report {
                print_report(report);
            }
        }
        Some(Commands::List) | None => {
            let result = api.list()?;
            print_items(&result.listed_items);
        }
    }
    Ok(())
}

fn init_api(cli: &Cli) -> Result<BiblioApi<FileStore>> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let config = BiblioConfig::load(&dir)?;
    Ok(BiblioApi::new(FileStore::new(dir), config))
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "biblio", "biblio")
        .ok_or_else(|| BiblioError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn parse_id(input: &str) -> Result<Uuid> {
    Uuid::parse_str(input).map_err(|_| BiblioError::Api(format!("Not a valid item id: {input}")))
}
