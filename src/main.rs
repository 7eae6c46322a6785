use std::path::PathBuf;

use clap::Parser;
use lumbung::{storage::storage_manager::StorageManager, types::error::DatabaseError};

#[derive(Parser)]
#[command(name = "lumbung", about = "Page-based storage manager demo driver")]
struct Args {
    /// Path to the database file
    #[arg(default_value = "lumbung.db")]
    path: PathBuf,
}

fn run(args: &Args) -> Result<(), DatabaseError> {
    let mut storage = StorageManager::open(&args.path)?;
    println!(
        "Database file '{}' opened successfully.",
        args.path.display()
    );
    println!("Current page count: {}", storage.page_count());

    let page_number = storage.allocate_page()?;
    println!("Allocated fresh page number: {}", page_number);
    println!("New page count after allocation: {}", storage.page_count());

    storage.close()?;
    println!("Database closed.");
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
