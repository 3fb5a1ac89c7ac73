#![cfg_attr(not(feature = "std"), no_std)]

//! # Octolane
//!
//! Batch hashing of fixed-length records, trading generality for throughput.
//! Every message must be exactly the size of one compression-function block:
//! 52 meaningful bytes for the octa-lane SHA-256 engine (stored in 64-byte
//! records), 64 bytes for the BLAKE2s front. The SHA-256 engine processes 8
//! messages per invocation in structure-of-arrays layout with no
//! data-dependent control flow.

//! # Usage
//! ```rust
//! // 16 records of 64 bytes; bytes [0, 52) of each record are hashed
//! let records = vec![0u8; 16 * 64];
//! let mut digests = vec![0u8; 16 * 32];
//!
//! octolane::sha256_batch_52b(&records, &mut digests, 16);
//!
//! let mut expected = [0u8; 32];
//! expected.copy_from_slice(&digests[..32]);
//! assert!(octolane::verify_digest(&expected, &expected));
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod batch;
mod engine;
// Re-export internal kernels for benchmarking/testing, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only

// =============================================================================
// EXPORTS
// =============================================================================

pub use batch::{blake2s_batch_64b, sha256_batch_52b, verify_digest};
pub use kernels::constants::{DIGEST_SIZE, LANE_COUNT, MESSAGE_LEN, RECORD_SIZE};
pub use kernels::sha256::compress_52b;
