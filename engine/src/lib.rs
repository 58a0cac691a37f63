//! Quincunx Core - Rust Simulation Engine
//!
//! Discrete-time simulation of a quincunx (Galton board / bean counter):
//! beans fall through rows of pegs, each peg deflecting a bean left or
//! right, and pile up in slots at the bottom.
//!
//! # Architecture
//!
//! - **machine**: The simulation state machine (queues, rows, slots)
//! - **models**: Domain types (Bean, event log)
//! - **policy**: Per-peg decision policies (luck, skill, fixed)
//! - **rng**: Deterministic random number generation
//! - **report**: Text renderings and run summaries
//!
//! # Critical Invariants
//!
//! 1. Bean count is conserved across every step and every repeat
//! 2. An in-flight bean at row y sits at a column in [0, y]
//! 3. All randomness is deterministic (seeded RNG)

// Module declarations
pub mod machine;
pub mod models;
pub mod policy;
pub mod report;
pub mod rng;

// Re-exports for convenience
pub use machine::{BeanMachine, MachineError};
pub use models::{Bean, Event, EventLog};
pub use policy::{build_beans, FixedPolicy, LuckPolicy, Mode, PegPolicy, SkillPolicy};
pub use report::{board_string, slot_string, RunSummary};
pub use rng::PegRng;
