//! CLI Commands

mod hash;

pub use hash::{hash_record_files, Algorithm};
