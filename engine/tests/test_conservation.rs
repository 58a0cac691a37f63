//! Property tests: conservation, coordinate legality, termination
//!
//! Sweeps machine sizes, population sizes, seeds, and modes the way the
//! original model-checking harness swept slot and bean counts, but with
//! randomized inputs.

use proptest::prelude::*;
use quincunx_core::policy::{build_beans, Mode};
use quincunx_core::BeanMachine;

proptest! {
    #[test]
    fn prop_conservation_and_legality(
        slot_count in 1usize..=6,
        bean_count in 0usize..=8,
        seed in any::<u64>(),
        luck in any::<bool>(),
    ) {
        let mode = if luck { Mode::Luck } else { Mode::Skill };
        let mut machine = BeanMachine::new(slot_count).unwrap();
        machine.reset(build_beans(slot_count, bean_count, mode, seed));

        let mut steps = 0usize;
        loop {
            // Conservation holds at every step of the run
            let tracked = machine.remaining_count()
                + machine.in_flight_count()
                + machine.settled_count();
            prop_assert_eq!(tracked, bean_count);

            // Every in-flight bean sits at a legal triangular coordinate
            for (row, column) in machine.in_flight_columns().into_iter().enumerate() {
                if let Some(column) = column {
                    prop_assert!(column <= row);
                }
            }

            if !machine.advance_step().unwrap() {
                break;
            }
            steps += 1;
            // One admission per step plus a full board drain bounds the run
            prop_assert!(steps <= bean_count + slot_count + 1);
        }

        // Terminal state: everything settled
        prop_assert_eq!(machine.remaining_count(), 0);
        prop_assert_eq!(machine.in_flight_count(), 0);
        prop_assert_eq!(machine.settled_count(), bean_count);
    }

    #[test]
    fn prop_settled_columns_within_slot_range(
        slot_count in 1usize..=8,
        bean_count in 1usize..=12,
        seed in any::<u64>(),
    ) {
        let mut machine = BeanMachine::new(slot_count).unwrap();
        machine.reset(build_beans(slot_count, bean_count, Mode::Luck, seed));
        while machine.advance_step().unwrap() {}

        let counts = machine.slot_counts();
        prop_assert_eq!(counts.len(), slot_count);
        prop_assert_eq!(counts.iter().sum::<usize>(), bean_count);
    }

    #[test]
    fn prop_truncation_never_increases_count(
        slot_count in 1usize..=6,
        bean_count in 0usize..=10,
        seed in any::<u64>(),
        upper in any::<bool>(),
    ) {
        let mut machine = BeanMachine::new(slot_count).unwrap();
        machine.reset(build_beans(slot_count, bean_count, Mode::Luck, seed));
        while machine.advance_step().unwrap() {}

        let n = machine.settled_count();
        let removed = if upper {
            machine.upper_half().unwrap()
        } else {
            machine.lower_half().unwrap()
        };

        let expected = if n == 0 { 0 } else { (n - 1) / 2 };
        prop_assert_eq!(removed, expected);
        prop_assert_eq!(machine.settled_count(), n - expected);
    }
}
