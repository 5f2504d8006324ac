//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{command, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate synthetic measurement documents and load them into the document store
    Seed {
        /// Document store database file
        #[arg(long, env = "MITTARI_DOCUMENTS_DB")]
        documents_db: Option<PathBuf>,

        /// Seed for the random generator, for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Copy measurements out of the document store into the `mittaukset` table
    Migrate {
        /// Document store database file
        #[arg(long, env = "MITTARI_DOCUMENTS_DB")]
        documents_db: Option<PathBuf>,

        /// Measurement database file
        #[arg(long, env = "MITTARI_MEASUREMENTS_DB")]
        measurements_db: Option<PathBuf>,
    },
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos:>6}/{len:6} {msg}")
            .unwrap()
            .progress_chars("##-"),
    )
}
