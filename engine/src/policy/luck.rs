//! Luck policy: independent random stream per bean
//!
//! The classic Galton experiment. Each peg is a fair coin flip drawn
//! from the bean's own seeded generator, so distinct beans take
//! independent paths while a whole run stays reproducible from the
//! master seed that spawned the streams.

use super::PegPolicy;
use crate::rng::PegRng;

/// Random per-peg decisions from a bean-private stream
///
/// `on_reset` deliberately leaves the stream alone: a lucky bean dropped
/// a second time takes a fresh random path, it does not replay the old
/// one. Reproducibility across whole runs comes from reseeding via
/// [`super::build_beans`], not from rewinding streams mid-experiment.
#[derive(Debug, Clone)]
pub struct LuckPolicy {
    rng: PegRng,
}

impl LuckPolicy {
    /// Create a luck policy around an already-seeded generator
    pub fn new(rng: PegRng) -> Self {
        Self { rng }
    }
}

impl PegPolicy for LuckPolicy {
    fn decide(&mut self) -> bool {
        self.rng.next_bit()
    }

    fn on_reset(&mut self) {
        // Stream keeps flowing; only the bean's position is reset.
    }
}
