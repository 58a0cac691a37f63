//! Skill policy: fixed deflection budget per bean
//!
//! A skilled bean does not flip coins. Its skill level is drawn once at
//! construction (Gaussian around the middle slot, clamped to the legal
//! column range) and the bean then deflects right at exactly its first
//! `skill` pegs and stays put for the rest. The bean lands in the slot
//! equal to its skill level, every run, which is what makes `repeat()`
//! invariance testable.

use super::PegPolicy;
use crate::rng::PegRng;

/// Deterministic per-peg decisions from a fixed skill level
#[derive(Debug, Clone)]
pub struct SkillPolicy {
    /// Number of pegs at which this bean deflects right (its final slot)
    skill: usize,
    /// Deflections taken in the current run
    deflected: usize,
}

impl SkillPolicy {
    /// Draw a skill level for a machine with `slot_count` slots.
    ///
    /// The draw is Gaussian with mean `slot_count / 2` and standard
    /// deviation `slot_count / 3`, rounded and clamped to the legal
    /// terminal columns `[0, slot_count - 1]`.
    pub fn new(slot_count: usize, rng: &mut PegRng) -> Self {
        let mean = slot_count as f64 / 2.0;
        let std_dev = slot_count as f64 / 3.0;
        let draw = rng.gaussian(mean, std_dev).round();
        let max = slot_count.saturating_sub(1) as f64;
        let skill = draw.clamp(0.0, max) as usize;
        Self {
            skill,
            deflected: 0,
        }
    }

    /// Construct with an explicit skill level (tests, scenarios)
    pub fn with_skill(skill: usize) -> Self {
        Self {
            skill,
            deflected: 0,
        }
    }

    /// The slot this bean will land in on every run
    pub fn skill(&self) -> usize {
        self.skill
    }
}

impl PegPolicy for SkillPolicy {
    fn decide(&mut self) -> bool {
        if self.deflected < self.skill {
            self.deflected += 1;
            true
        } else {
            false
        }
    }

    fn on_reset(&mut self) {
        self.deflected = 0;
    }
}
