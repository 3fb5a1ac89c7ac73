//! Public API Layer
//!
//! Batch drivers over concatenated fixed-size records, message-major order:
//! 64 bytes of input per record, 32 bytes of digest per record, output order
//! matching input order.

use crate::engine::batch::for_each_record_pair;
use crate::kernels::constants::{
    DIGEST_SIZE, GROUP_INPUT_SIZE, GROUP_OUTPUT_SIZE, LANE_COUNT, RECORD_SIZE,
};
use crate::kernels::sha256;
use blake2::{Blake2s256, Digest};
use subtle::ConstantTimeEq;

// =============================================================================
// SHA-256 BATCH DRIVER
// =============================================================================

/// Hash `count` 64-byte records with octa-lane SHA-256, 52 meaningful bytes
/// per record.
///
/// Processes `floor(count / 8)` complete groups of 8: for each processed
/// record `i`, bytes `[0, 52)` of `records[64i..]` are hashed (bytes
/// `[52, 64)` are ignored) and the digest written to `digests[32i..32i+32]`.
/// The trailing `count % 8` records are deliberately left unprocessed and
/// their digest regions untouched; the caller owns count alignment. This
/// mirrors the throughput-first contract of the engine: no length or
/// divisibility validation at runtime.
///
/// # Panics
/// If `records` is shorter than `floor(count/8) * 512` bytes or `digests`
/// shorter than `floor(count/8) * 256` bytes.
///
/// # Example
/// ```rust
/// let records = [0u8; 64 * 8];
/// let mut digests = [0u8; 32 * 8];
/// octolane::sha256_batch_52b(&records, &mut digests, 8);
/// // identical messages, identical digests
/// assert_eq!(digests[..32], digests[32..64]);
/// ```
pub fn sha256_batch_52b(records: &[u8], digests: &mut [u8], count: usize) {
    let groups = count / LANE_COUNT;
    for_each_record_pair(
        &records[..groups * GROUP_INPUT_SIZE],
        &mut digests[..groups * GROUP_OUTPUT_SIZE],
        sha256::compress_52b,
    );
}

// =============================================================================
// BLAKE2S BATCH DRIVER
// =============================================================================

/// Hash `count` full 64-byte records with BLAKE2s-256, one digest per record.
///
/// Thin multi-buffer front over the RFC 7693 primitive: every record is an
/// independent unkeyed `Blake2s256` evaluation, so all `count` records are
/// processed (no group alignment requirement) and may run on independent
/// workers. Output order matches input order.
///
/// # Panics
/// If `records` is shorter than `count * 64` bytes or `digests` shorter than
/// `count * 32` bytes.
pub fn blake2s_batch_64b(records: &[u8], digests: &mut [u8], count: usize) {
    for_each_record_pair(
        &records[..count * RECORD_SIZE],
        &mut digests[..count * DIGEST_SIZE],
        |record: &[u8; RECORD_SIZE], digest: &mut [u8; DIGEST_SIZE]| {
            let mut hasher = Blake2s256::new();
            hasher.update(record);
            digest.copy_from_slice(&hasher.finalize());
        },
    );
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Compare two digests in constant time (timing attack resistant).
#[must_use]
pub fn verify_digest(computed: &[u8; DIGEST_SIZE], expected: &[u8; DIGEST_SIZE]) -> bool {
    computed.ct_eq(expected).into()
}
