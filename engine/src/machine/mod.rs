//! Machine - the quincunx state machine
//!
//! Owns the triangular board state and implements the advance-step,
//! truncation, and repeat/reset operations.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{BeanMachine, MachineError};
