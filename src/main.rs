mod cli;
mod error;
mod generate;
mod measurement;
mod store;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { documents_db, seed } => match command::seed(documents_db, seed).await {
            Ok(count) => println!("Seeded {} documents", count),
            Err(e) => fail(e),
        },
        Commands::Migrate {
            documents_db,
            measurements_db,
        } => match command::migrate(documents_db, measurements_db).await {
            Ok(summary) => println!(
                "Migration complete: {} rows written, {} documents skipped",
                summary.written, summary.skipped
            ),
            Err(e) => fail(e),
        },
    }

    Ok(())
}

fn fail(e: Error) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
