//! Fixed policy: scripted deflection, for tests and scenarios
//!
//! NOTE: Available in all builds to support integration testing, but
//! intended for test code: an always-deflect population walks the
//! board's right edge and lands entirely in the last slot.

use super::PegPolicy;

/// Policy that returns the same decision at every peg
#[derive(Debug, Clone, Copy)]
pub struct FixedPolicy {
    deflect: bool,
}

impl FixedPolicy {
    /// Deflect right at every peg (lands in the highest reachable slot)
    pub fn always_deflect() -> Self {
        Self { deflect: true }
    }

    /// Stay left at every peg (lands in slot 0)
    pub fn always_stay() -> Self {
        Self { deflect: false }
    }
}

impl PegPolicy for FixedPolicy {
    fn decide(&mut self) -> bool {
        self.deflect
    }

    fn on_reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_decisions() {
        let mut right = FixedPolicy::always_deflect();
        let mut left = FixedPolicy::always_stay();

        for _ in 0..5 {
            assert!(right.decide());
            assert!(!left.decide());
        }
    }
}
