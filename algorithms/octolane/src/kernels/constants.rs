//! Octolane Kernel Constants
//!
//! SHA-256 constants follow FIPS 180-4: the initial hash values are the
//! fractional parts of the square roots of the first 8 primes, the round
//! constants the fractional parts of the cube roots of the first 64 primes.
//! In the octa-lane kernel every constant is broadcast identically into all
//! 8 lanes, so the tables here hold one scalar per word.

// =============================================================================
// STRUCTURAL SIZES
// =============================================================================

/// Number of messages processed per kernel invocation.
pub const LANE_COUNT: usize = 8;

/// Width of one input record in bytes. Only the first [`MESSAGE_LEN`] bytes
/// are load-bearing for the SHA-256 engine; BLAKE2s consumes the full record.
pub const RECORD_SIZE: usize = 64;

/// True message length assumed by the hard-wired SHA-256 padding, in bytes.
pub const MESSAGE_LEN: usize = 52;

/// Digest size in bytes (256-bit output for both algorithms).
pub const DIGEST_SIZE: usize = 32;

/// Input bytes consumed per 8-message group.
pub const GROUP_INPUT_SIZE: usize = LANE_COUNT * RECORD_SIZE;

/// Output bytes produced per 8-message group.
pub const GROUP_OUTPUT_SIZE: usize = LANE_COUNT * DIGEST_SIZE;

/// Words in the expanded message schedule, one consumed per compression round.
pub const SCHEDULE_LEN: usize = 64;

// =============================================================================
// SHA-256 INITIAL HASH VALUES
// =============================================================================

/// Initial hash values H0..H7.
pub const IV: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

// =============================================================================
// SHA-256 ROUND CONSTANTS
// =============================================================================

/// Round constants K0..K63.
#[rustfmt::skip]
pub const K: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5,
    0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3,
    0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc,
    0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7,
    0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13,
    0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3,
    0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5,
    0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208,
    0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

// =============================================================================
// FIXED PADDING
// =============================================================================

/// Schedule words 13..15 for a message whose true length is exactly
/// [`MESSAGE_LEN`] bytes (416 bits): the mandatory 1-bit plus zero fill,
/// the high half of the 64-bit length field, and the length itself
/// (416 = `0x1A0`). A table load replaces any data-dependent padding
/// computation; any other true length is unsupported.
pub const PAD_52B: [u32; 3] = [0x8000_0000, 0x0000_0000, 0x0000_01a0];
