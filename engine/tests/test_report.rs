//! Reporter formatting tests
//!
//! The renderings are deterministic functions of machine state, so they
//! are pinned against exact expected strings.

use quincunx_core::models::Bean;
use quincunx_core::policy::FixedPolicy;
use quincunx_core::{board_string, slot_string, BeanMachine, RunSummary};

#[test]
fn test_slot_string_empty_machine() {
    let machine = BeanMachine::new(5).unwrap();
    assert_eq!(slot_string(&machine), "   0   0   0   0   0");
}

#[test]
fn test_slot_string_with_settled_beans() {
    let mut machine = BeanMachine::new(2).unwrap();
    let beans = (0..2)
        .map(|_| Bean::new(Box::new(FixedPolicy::always_stay())))
        .collect();
    machine.reset(beans);
    while machine.advance_step().unwrap() {}

    assert_eq!(slot_string(&machine), "   2   0");
}

#[test]
fn test_board_string_empty_machine() {
    let machine = BeanMachine::new(3).unwrap();
    let expected = "       0\n     0   0\n   0   0   0\n   0   0   0";
    assert_eq!(board_string(&machine), expected);
}

#[test]
fn test_board_string_marks_in_flight_bean() {
    let mut machine = BeanMachine::new(3).unwrap();
    machine.reset(vec![Bean::new(Box::new(FixedPolicy::always_deflect()))]);

    // Fresh reset: the bean sits at (row 0, column 0)
    let expected = "       1\n     0   0\n   0   0   0\n   0   0   0";
    assert_eq!(board_string(&machine), expected);

    // One step: bean deflects to (row 1, column 1); row 0 empties
    assert!(machine.advance_step().unwrap());
    let expected = "       0\n     0   1\n   0   0   0\n   0   0   0";
    assert_eq!(board_string(&machine), expected);
}

#[test]
fn test_run_summary_roundtrip() {
    let mut machine = BeanMachine::new(4).unwrap();
    let beans = (0..3)
        .map(|_| Bean::new(Box::new(FixedPolicy::always_stay())))
        .collect();
    machine.reset(beans);
    while machine.advance_step().unwrap() {}

    let summary = RunSummary::capture(&machine);
    assert_eq!(summary.slot_counts, vec![3, 0, 0, 0]);
    assert_eq!(summary.average_slot, 0.0);
    assert_eq!(summary.remaining, 0);
    assert_eq!(summary.in_flight, 0);

    let json = serde_json::to_string(&summary).unwrap();
    let back: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
