//! 8x8 layout transpose over 32-bit elements.
//!
//! Converts between message-major rows (8 consecutive words of one message)
//! and lane-major vectors (word `i` of all 8 messages), replacing the
//! hardware shuffle/permute sequence with an explicit, well-specified element
//! permutation. Pure bit movement, no arithmetic, and its own inverse.
//!
//! A 64-byte record holds 16 words but a vector holds only 8 lanes, so the
//! kernel applies this twice per side: once for words 0-7, once for 8-15.

use super::lanes::W32x8;

/// Transpose an 8x8 matrix of 32-bit words in place.
///
/// On input, `rows[m].w[i]` is word `i` of message `m`; on output,
/// `rows[i].w[m]` is word `i` of message `m`. Applying it twice reproduces
/// the input bit-for-bit.
#[inline]
pub fn transpose8(rows: &mut [W32x8; 8]) {
    for i in 0..8 {
        for j in (i + 1)..8 {
            let upper = rows[i].w[j];
            rows[i].w[j] = rows[j].w[i];
            rows[j].w[i] = upper;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
