//! Hash kernels.
//!
//! `sha256` holds the octa-lane compression engine; `constants` the shared
//! read-only tables. Public for test and benchmark use only.

pub mod constants;
pub mod sha256;
