//! Portable 8-lane vector of 32-bit words.
//!
//! Structure-of-arrays stand-in for a 256-bit hardware register: slot `i`
//! belongs to message `i` of the current group. Every operation applies the
//! identical instruction sequence to all lanes with no data-dependent branch,
//! which is what keeps the surrounding compression kernel constant-time.

/// Eight `u32` lanes, one per message in a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct W32x8 {
    /// Lane values, message-indexed.
    pub w: [u32; 8],
}

impl W32x8 {
    /// All-zero vector.
    pub const ZERO: Self = Self { w: [0; 8] };

    /// Broadcast a single scalar into all 8 lanes.
    #[inline]
    #[must_use]
    pub const fn splat(x: u32) -> Self {
        Self { w: [x; 8] }
    }

    /// Load 8 consecutive little-endian words from a 32-byte row.
    ///
    /// Native storage order; pair with [`Self::swap_bytes`] to obtain the
    /// big-endian word values SHA-256 operates on.
    #[inline]
    #[must_use]
    pub fn load_le(row: &[u8]) -> Self {
        debug_assert!(row.len() >= 32);
        let mut w = [0u32; 8];
        for (lane, bytes) in w.iter_mut().zip(row.chunks_exact(4)) {
            *lane = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self { w }
    }

    /// Store the 8 lanes as consecutive little-endian words into a 32-byte row.
    #[inline]
    pub fn store_le(self, row: &mut [u8]) {
        debug_assert!(row.len() >= 32);
        for (bytes, lane) in row.chunks_exact_mut(4).zip(self.w) {
            bytes.copy_from_slice(&lane.to_le_bytes());
        }
    }

    /// Lane-wise addition modulo 2^32.
    #[inline]
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self {
            w: core::array::from_fn(|i| self.w[i].wrapping_add(rhs.w[i])),
        }
    }

    /// Lane-wise exclusive or.
    #[inline]
    #[must_use]
    pub fn xor(self, rhs: Self) -> Self {
        Self {
            w: core::array::from_fn(|i| self.w[i] ^ rhs.w[i]),
        }
    }

    /// Lane-wise bitwise and.
    #[inline]
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        Self {
            w: core::array::from_fn(|i| self.w[i] & rhs.w[i]),
        }
    }

    /// Lane-wise 32-bit circular right rotation.
    #[inline]
    #[must_use]
    pub fn rotr(self, n: u32) -> Self {
        Self {
            w: self.w.map(|x| x.rotate_right(n)),
        }
    }

    /// Lane-wise logical right shift.
    #[inline]
    #[must_use]
    pub fn shr(self, n: u32) -> Self {
        Self {
            w: self.w.map(|x| x >> n),
        }
    }

    /// Reverse the byte order of every lane independently.
    ///
    /// This is the endian normalizer: native little-endian storage in,
    /// big-endian word values out (and back — it is its own inverse). No
    /// cross-lane interaction.
    #[inline]
    #[must_use]
    pub fn swap_bytes(self) -> Self {
        Self {
            w: self.w.map(u32::swap_bytes),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::W32x8;

    #[test]
    fn swap_bytes_is_self_inverse() {
        let v = W32x8 {
            w: [0x0102_0304, 0xdead_beef, 0, u32::MAX, 1, 2, 3, 0x8000_0001],
        };
        assert_eq!(v.swap_bytes().swap_bytes(), v);
        assert_eq!(v.swap_bytes().w[0], 0x0403_0201);
    }

    #[test]
    fn load_store_roundtrip() {
        let mut row = [0u8; 32];
        for (i, b) in row.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut out = [0u8; 32];
        W32x8::load_le(&row).store_le(&mut out);
        assert_eq!(row, out);
    }

    #[test]
    fn load_be_matches_per_word_load() {
        let mut row = [0u8; 32];
        for (i, b) in row.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let v = W32x8::load_le(&row).swap_bytes();
        for (i, lane) in v.w.iter().enumerate() {
            let expect =
                u32::from_be_bytes([row[4 * i], row[4 * i + 1], row[4 * i + 2], row[4 * i + 3]]);
            assert_eq!(*lane, expect, "lane {i}");
        }
    }

    #[test]
    fn wrapping_add_wraps_per_lane() {
        let a = W32x8::splat(u32::MAX);
        let b = W32x8 {
            w: [1, 2, 3, 4, 5, 6, 7, 8],
        };
        let sum = a.wrapping_add(b);
        assert_eq!(sum.w, [0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
