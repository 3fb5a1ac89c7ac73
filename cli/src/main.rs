//! Octolane CLI
//!
//! Batch-hashes files of concatenated 64-byte records.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{hash_record_files, Algorithm};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "octolane")]
#[command(about = "Batch hashing of fixed-length 64-byte records", long_about = None)]
#[command(version)]
struct Cli {
    /// Record files to hash (each file is a concatenation of 64-byte records)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Hashing algorithm to use
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    algo: Algorithm,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    hash_record_files(&cli.files, cli.algo)
}
