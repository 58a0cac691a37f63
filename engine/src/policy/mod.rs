//! Bean decision policies
//!
//! Every time an in-flight bean passes a peg it must decide whether to
//! stay at its current column or deflect toward column + 1. That decision
//! is the only thing the machine delegates: it asks the bean's policy for
//! a single bit and applies the pure [`next_column`] transition itself.
//!
//! # Policy Interface
//!
//! All policies implement the `PegPolicy` trait:
//!
//! ```rust
//! use quincunx_core::policy::PegPolicy;
//!
//! #[derive(Debug)]
//! struct ZigZag {
//!     next: bool,
//! }
//!
//! impl PegPolicy for ZigZag {
//!     fn decide(&mut self) -> bool {
//!         self.next = !self.next;
//!         !self.next
//!     }
//!
//!     fn on_reset(&mut self) {
//!         self.next = false;
//!     }
//! }
//! ```
//!
//! # Available policies
//!
//! 1. **Luck**: each bean draws from its own seeded random stream
//! 2. **Skill**: each bean has a fixed skill level drawn once from a
//!    shared stream, then follows the same path on every run
//! 3. **Fixed**: always-deflect / always-stay, for tests and scenarios
//!
//! Populations are assembled with [`build_beans`], which seeds every
//! policy from one master generator so a whole run is reproducible from
//! a single seed.

mod fixed;
mod luck;
mod skill;

pub use fixed::FixedPolicy;
pub use luck::LuckPolicy;
pub use skill::SkillPolicy;

use serde::{Deserialize, Serialize};

use crate::models::Bean;
use crate::rng::PegRng;

/// Per-peg decision capability of a bean
///
/// `decide` yields the deflection bit for the peg the bean is currently
/// passing; `on_reset` restores whatever per-run state the policy keeps
/// so a recycled bean (via `reset`/`repeat`) is well-defined.
///
/// Policies are `Send` so independently seeded machines can be driven
/// from worker threads for Monte Carlo batches.
pub trait PegPolicy: Send + std::fmt::Debug {
    /// Decide the next peg outcome: `true` deflects toward column + 1,
    /// `false` stays at the current column.
    fn decide(&mut self) -> bool;

    /// Restore per-run path state before the bean is dropped again.
    ///
    /// Random policies keep streaming (a re-dropped bean takes a fresh
    /// path); deterministic policies rewind so every run is identical.
    fn on_reset(&mut self);
}

/// Pure column transition for a single peg.
///
/// The decision bit is injected, which keeps the transition trivially
/// replayable: `next_column(c, true) == c + 1`, `next_column(c, false) == c`.
pub fn next_column(column: usize, deflect: bool) -> usize {
    if deflect {
        column + 1
    } else {
        column
    }
}

/// Decision mode for a bean population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Every bean draws from an independent random stream.
    Luck,
    /// Every bean follows a fixed skill level drawn from one shared
    /// stream; runs are reproducible path for path.
    Skill,
}

/// Build a bean population for the given machine size and mode.
///
/// One master generator is seeded from `seed`. In luck mode each bean
/// gets its own stream seeded from the master; in skill mode every skill
/// level is drawn from the master stream directly.
///
/// # Example
/// ```
/// use quincunx_core::policy::{build_beans, Mode};
///
/// let beans = build_beans(10, 400, Mode::Luck, 42);
/// assert_eq!(beans.len(), 400);
/// ```
pub fn build_beans(slot_count: usize, bean_count: usize, mode: Mode, seed: u64) -> Vec<Bean> {
    let mut master = PegRng::new(seed);
    (0..bean_count)
        .map(|_| -> Box<dyn PegPolicy> {
            match mode {
                Mode::Luck => Box::new(LuckPolicy::new(PegRng::new(master.next_u64()))),
                Mode::Skill => Box::new(SkillPolicy::new(slot_count, &mut master)),
            }
        })
        .map(Bean::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_column_is_pure() {
        assert_eq!(next_column(0, false), 0);
        assert_eq!(next_column(0, true), 1);
        assert_eq!(next_column(7, true), 8);
        assert_eq!(next_column(7, false), 7);
    }

    #[test]
    fn test_build_beans_count() {
        assert_eq!(build_beans(5, 0, Mode::Luck, 1).len(), 0);
        assert_eq!(build_beans(5, 17, Mode::Skill, 1).len(), 17);
    }

    #[test]
    fn test_build_beans_luck_streams_independent() {
        let mut beans = build_beans(20, 2, Mode::Luck, 99);
        // Two lucky beans almost surely diverge within 64 pegs
        let mut diverged = false;
        for _ in 0..64 {
            let mut cols = beans.iter_mut().map(|b| {
                b.advance();
                b.column()
            });
            let (a, b) = (cols.next().unwrap(), cols.next().unwrap());
            if a != b {
                diverged = true;
                break;
            }
        }
        assert!(diverged, "independent luck streams never diverged");
    }
}
