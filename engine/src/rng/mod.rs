//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. All randomness in the simulator goes through this module.

mod xorshift;

pub use xorshift::PegRng;
