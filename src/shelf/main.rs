use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use shelf::catalog::{Catalog, LoadReport, SearchField};
use shelf::error::{Result, ShelfError};
use shelf::model::Status;
use shelf::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(backing_file(&cli)?);
    let (mut catalog, report) = Catalog::open(store)?;

    if report == LoadReport::Corrupt {
        eprintln!(
            "{}",
            "Warning: the backing file is corrupt; starting with an empty catalog".yellow()
        );
    }

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => handle_add(&mut catalog, title, author, year),
        Some(Commands::Delete { id }) => handle_delete(&mut catalog, id),
        Some(Commands::Search { field, query }) => handle_search(&catalog, &field, &query),
        Some(Commands::List) => handle_list(&catalog),
        Some(Commands::Status { id, status }) => handle_status(&mut catalog, id, &status),
        None => handle_list(&catalog),
    }
}

fn backing_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }
    let proj_dirs = ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Store("Could not determine the data directory".to_string()))?;
    Ok(proj_dirs.data_dir().join("data.json"))
}

fn handle_add(
    catalog: &mut Catalog<FileStore>,
    title: String,
    author: String,
    year: i32,
) -> Result<()> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ShelfError::Input("Title must not be empty".to_string()));
    }

    // Advisory only: duplicates are allowed, the operator just gets told.
    if catalog.has_title(&title) {
        println!(
            "{}",
            format!("Note: a record titled '{}' already exists", title).yellow()
        );
    }

    let record = catalog.add(title, author, year)?;
    println!(
        "{}",
        format!("Added '{}' with id {}", record.title, record.id).green()
    );
    print::print_record(&record);
    Ok(())
}

fn handle_delete(catalog: &mut Catalog<FileStore>, id: u64) -> Result<()> {
    let removed = catalog.delete(id)?;
    println!(
        "{}",
        format!("Deleted record {}: {}", removed.id, removed.title).green()
    );
    Ok(())
}

fn handle_search(catalog: &Catalog<FileStore>, field: &str, query: &str) -> Result<()> {
    let field: SearchField = field.parse()?;
    let matches = catalog.search(query, field);
    if matches.is_empty() {
        println!("No records match '{}' in {}.", query, field);
        return Ok(());
    }
    print::print_record_refs(&matches);
    Ok(())
}

fn handle_list(catalog: &Catalog<FileStore>) -> Result<()> {
    print::print_records(catalog.records());
    Ok(())
}

fn handle_status(catalog: &mut Catalog<FileStore>, id: u64, status: &str) -> Result<()> {
    let status: Status = status.parse()?;
    let record = catalog.set_status(id, status)?;
    println!(
        "{}",
        format!("Record {} is now {}", record.id, record.status).green()
    );
    Ok(())
}
