//! Domain models for the quincunx simulator

pub mod bean;
pub mod event;

// Re-exports
pub use bean::Bean;
pub use event::{Event, EventLog};
