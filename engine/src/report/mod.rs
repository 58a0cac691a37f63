//! Text rendering and run summaries
//!
//! Deterministic renderings of machine state, built only from the
//! machine's read-only accessors. The board snapshot marks the in-flight
//! bean's column per row with a `1` against a field of `0`s; the slot
//! line prints fixed-width settled counts. Used for debugging and CLI
//! output, not required for correctness.

use serde::{Deserialize, Serialize};

use crate::machine::BeanMachine;

/// Spaces between numbers when printing machine state. Odd values line
/// the triangle up with the slot row.
const X_SPACING: usize = 3;

/// Column width used by both the board and the slot line
const CELL_WIDTH: usize = X_SPACING + 1;

/// Indent for the first cell of the given row of pegs
fn indent(slot_count: usize, row: usize) -> usize {
    let root = (slot_count - 1) * CELL_WIDTH / 2 + CELL_WIDTH;
    root - CELL_WIDTH / 2 * row
}

/// Fixed-width bean counts for every slot
///
/// # Example
/// ```
/// use quincunx_core::machine::BeanMachine;
/// use quincunx_core::report::slot_string;
///
/// let machine = BeanMachine::new(3)?;
/// assert_eq!(slot_string(&machine), "   0   0   0");
/// # Ok::<(), quincunx_core::machine::MachineError>(())
/// ```
pub fn slot_string(machine: &BeanMachine) -> String {
    machine
        .slot_counts()
        .into_iter()
        .map(|count| format!("{:>width$}", count, width = CELL_WIDTH))
        .collect()
}

/// Full board snapshot: one line per row, `1` at the in-flight bean's
/// column and `0` elsewhere, with the slot line attached at the bottom.
pub fn board_string(machine: &BeanMachine) -> String {
    let mut out = String::new();
    let slot_count = machine.slot_count();
    let columns = machine.in_flight_columns();
    for (row, bean_column) in columns.iter().enumerate() {
        for column in 0..=row {
            let width = if column == 0 {
                indent(slot_count, row)
            } else {
                CELL_WIDTH
            };
            let mark = if Some(column) == *bean_column { 1 } else { 0 };
            out.push_str(&format!("{:>width$}", mark, width = width));
        }
        out.push('\n');
    }
    out.push_str(&slot_string(machine));
    out
}

/// Machine-readable summary of a run
///
/// # Example
/// ```
/// use quincunx_core::machine::BeanMachine;
/// use quincunx_core::report::RunSummary;
///
/// let machine = BeanMachine::new(5)?;
/// let summary = RunSummary::capture(&machine);
/// let json = serde_json::to_string(&summary).unwrap();
/// assert!(json.contains("\"slot_counts\":[0,0,0,0,0]"));
/// # Ok::<(), quincunx_core::machine::MachineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Settled bean count per slot
    pub slot_counts: Vec<usize>,
    /// Count-weighted average slot index (0.0 when nothing settled)
    pub average_slot: f64,
    /// Beans still waiting for admission
    pub remaining: usize,
    /// Beans still occupying rows
    pub in_flight: usize,
    /// Steps taken since the last reset/repeat
    pub steps: usize,
}

impl RunSummary {
    /// Capture the current machine state
    pub fn capture(machine: &BeanMachine) -> Self {
        Self {
            slot_counts: machine.slot_counts(),
            average_slot: machine.average_slot(),
            remaining: machine.remaining_count(),
            in_flight: machine.in_flight_count(),
            steps: machine.step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_matches_reference_layout() {
        // 5-slot machine: root indent (5-1)*4/2 + 4 = 12, shrinking by
        // 2 per row
        assert_eq!(indent(5, 0), 12);
        assert_eq!(indent(5, 1), 10);
        assert_eq!(indent(5, 4), 4);
    }

    #[test]
    fn test_slot_string_width() {
        let machine = BeanMachine::new(4).unwrap();
        let line = slot_string(&machine);
        assert_eq!(line.len(), 4 * CELL_WIDTH);
        assert_eq!(line, "   0   0   0   0");
    }
}
