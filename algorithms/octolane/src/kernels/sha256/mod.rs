//! Octa-lane SHA-256 compression kernel for 52-byte messages.
//!
//! Processes 8 messages per call in structure-of-arrays layout. The
//! hard-wired padding assumes every message is exactly 52 meaningful bytes,
//! so the whole hash collapses to a single evaluation of the compression
//! function: load + endian-normalize + transpose, inject the fixed padding
//! words, expand the 64-word schedule, run 64 rounds, feed forward into the
//! IV, and undo the layout transform on the way out.
//!
//! Every loop has a fixed trip count and no branch inspects message data,
//! so execution time is independent of input values.

use crate::kernels::constants::{
    DIGEST_SIZE, GROUP_INPUT_SIZE, GROUP_OUTPUT_SIZE, IV, K, LANE_COUNT, PAD_52B, RECORD_SIZE,
    SCHEDULE_LEN,
};

pub(crate) mod lanes;
pub(crate) mod transpose;

use lanes::W32x8;
use transpose::transpose8;

// =============================================================================
// ROUND PRIMITIVES
// =============================================================================

/// Schedule sigma0: `rotr(x,7) ^ rotr(x,18) ^ shr(x,3)`.
#[inline]
fn small_sigma0(x: W32x8) -> W32x8 {
    x.rotr(7).xor(x.rotr(18)).xor(x.shr(3))
}

/// Schedule sigma1: `rotr(x,17) ^ rotr(x,19) ^ shr(x,10)`.
#[inline]
fn small_sigma1(x: W32x8) -> W32x8 {
    x.rotr(17).xor(x.rotr(19)).xor(x.shr(10))
}

/// Round Sigma0: `rotr(a,2) ^ rotr(a,13) ^ rotr(a,22)`.
#[inline]
fn big_sigma0(a: W32x8) -> W32x8 {
    a.rotr(2).xor(a.rotr(13)).xor(a.rotr(22))
}

/// Round Sigma1: `rotr(e,6) ^ rotr(e,11) ^ rotr(e,25)`.
#[inline]
fn big_sigma1(e: W32x8) -> W32x8 {
    e.rotr(6).xor(e.rotr(11)).xor(e.rotr(25))
}

/// Choose: `(e & f) ^ (!e & g)`, rewritten branch-free as `((f ^ g) & e) ^ g`.
#[inline]
fn ch(e: W32x8, f: W32x8, g: W32x8) -> W32x8 {
    f.xor(g).and(e).xor(g)
}

/// Majority: `(a & b) ^ (a & c) ^ (b & c)`, rewritten as `((a ^ c) & b) ^ (a & c)`.
#[inline]
fn maj(a: W32x8, b: W32x8, c: W32x8) -> W32x8 {
    a.xor(c).and(b).xor(a.and(c))
}

// =============================================================================
// GROUP COMPRESSION
// =============================================================================

/// Compress one group of 8 records into 8 digests.
///
/// `group` holds 8 consecutive 64-byte records; only bytes `[0, 52)` of each
/// record contribute to its digest, bytes `[52, 64)` are displaced by the
/// fixed padding and never read. `digests` receives 8 consecutive 32-byte
/// digests in record order.
///
/// No message-length validation is performed: a record whose true message
/// length is not 52 bytes yields a wrong (but well-defined) digest. Buffer
/// geometry is enforced by the array types instead of runtime checks.
pub fn compress_52b(group: &[u8; GROUP_INPUT_SIZE], digests: &mut [u8; GROUP_OUTPUT_SIZE]) {
    let mut w = [W32x8::ZERO; SCHEDULE_LEN];

    // Message-major load: row m is 8 consecutive words of record m, in
    // native order. Normalize to big-endian, then transpose each half into
    // lane-major schedule words.
    let mut lo = [W32x8::ZERO; LANE_COUNT];
    let mut hi = [W32x8::ZERO; LANE_COUNT];
    for (m, (lo_row, hi_row)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
        let record = &group[m * RECORD_SIZE..(m + 1) * RECORD_SIZE];
        *lo_row = W32x8::load_le(&record[..32]).swap_bytes();
        *hi_row = W32x8::load_le(&record[32..]).swap_bytes();
    }
    transpose8(&mut lo);
    transpose8(&mut hi);
    w[..8].copy_from_slice(&lo);
    w[8..16].copy_from_slice(&hi);

    // Words 13..15 are determined by the padding for 416-bit inputs:
    // whatever the records carried there is discarded.
    w[13] = W32x8::splat(PAD_52B[0]);
    w[14] = W32x8::splat(PAD_52B[1]);
    w[15] = W32x8::splat(PAD_52B[2]);

    // Schedule expansion, all 8 lanes per step.
    for i in 16..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = IV.map(W32x8::splat);

    // One round per schedule word, 64 in total.
    for (&wi, &ki) in w.iter().zip(K.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(W32x8::splat(ki))
            .wrapping_add(wi);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // Feed forward into the initial hash values.
    let mut state = [a, b, c, d, e, f, g, h];
    for (word, iv) in state.iter_mut().zip(IV) {
        *word = word.wrapping_add(W32x8::splat(iv));
    }

    // Back to message-major order and big-endian output bytes.
    transpose8(&mut state);
    for (m, row) in state.iter().enumerate() {
        row.swap_bytes()
            .store_le(&mut digests[m * DIGEST_SIZE..(m + 1) * DIGEST_SIZE]);
    }
}
