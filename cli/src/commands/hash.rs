//! Hash Command
//!
//! Reads each file as a concatenation of 64-byte records and prints one hex
//! digest per processed record. The library's batch contract applies: the
//! SHA-256 engine only consumes complete groups of 8 records (and only the
//! first 52 bytes of each), BLAKE2s consumes every record in full.

use anyhow::{Context, Result};
use clap::ValueEnum;
use octolane::{DIGEST_SIZE, LANE_COUNT, RECORD_SIZE};
use std::path::{Path, PathBuf};

/// Selectable batch hash algorithm.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Algorithm {
    /// Octa-lane SHA-256 over bytes [0, 52) of each record
    Sha256,
    /// BLAKE2s-256 over the full 64-byte record
    Blake2s,
}

/// Hash record files and print digests in record order.
pub fn hash_record_files(files: &[PathBuf], algo: Algorithm) -> Result<()> {
    for path in files {
        hash_one_file(path, algo)?;
    }
    Ok(())
}

fn hash_one_file(path: &Path, algo: Algorithm) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;

    let count = bytes.len() / RECORD_SIZE;
    if !bytes.len().is_multiple_of(RECORD_SIZE) {
        eprintln!(
            "warning: {}: {} trailing bytes ignored (records are {RECORD_SIZE} bytes)",
            path.display(),
            bytes.len() % RECORD_SIZE
        );
    }

    let mut digests = vec![0u8; count * DIGEST_SIZE];
    let processed = match algo {
        Algorithm::Sha256 => {
            octolane::sha256_batch_52b(&bytes, &mut digests, count);
            let full_groups = count / LANE_COUNT * LANE_COUNT;
            if full_groups < count {
                eprintln!(
                    "warning: {}: {} records beyond the last full group of {LANE_COUNT} skipped",
                    path.display(),
                    count - full_groups
                );
            }
            full_groups
        }
        Algorithm::Blake2s => {
            octolane::blake2s_batch_64b(&bytes, &mut digests, count);
            count
        }
    };

    for i in 0..processed {
        println!(
            "{}  {}#{i}",
            hex::encode(&digests[i * DIGEST_SIZE..(i + 1) * DIGEST_SIZE]),
            path.display()
        );
    }
    Ok(())
}
