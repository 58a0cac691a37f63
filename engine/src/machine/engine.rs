//! Bean machine engine
//!
//! The machine owns three containers and nothing else owns beans:
//!
//! ```text
//! remaining (FIFO)  →  in_flight[row 0..N]  →  slots[0..N] (FIFO each)
//! ```
//!
//! Each `advance_step` call processes one discrete time step:
//!
//! ```text
//! For each row, highest index first:
//! 1. Row N-1: the bean settles into the slot at its column
//! 2. Row i < N-1: the bean passes a peg and drops to row i+1
//! 3. Then one bean is admitted from the remaining queue into row 0
//! ```
//!
//! Rows are processed top index down so a bean dropping from row i to
//! row i+1 is never advanced twice in one step. Beans move by ownership
//! (`Option::take`), so a vacated row cannot retain stale occupancy.
//!
//! # Coordinates
//!
//! Positions are logical: row y holds columns 0..=y, and a bean at
//! (y, x) always satisfies `x <= y`. For a 4-slot machine:
//!
//! ```text
//!          (0,0)
//!        (0,1) (1,1)
//!     (0,2) (1,2) (2,2)
//!   (0,3) (1,3) (2,3) (3,3)
//!  [Slot0][Slot1][Slot2][Slot3]
//! ```
//!
//! # Example
//!
//! ```
//! use quincunx_core::machine::BeanMachine;
//! use quincunx_core::policy::{build_beans, Mode};
//!
//! let mut machine = BeanMachine::new(10)?;
//! machine.reset(build_beans(10, 400, Mode::Luck, 42));
//!
//! while machine.advance_step()? {}
//!
//! assert_eq!(machine.settled_count(), 400);
//! # Ok::<(), quincunx_core::machine::MachineError>(())
//! ```

use std::collections::VecDeque;

use thiserror::Error;

use crate::models::{Bean, Event, EventLog};

// ============================================================================
// Errors
// ============================================================================

/// Machine error types
///
/// None of these are transient: the machine is deterministic given its
/// inputs, so every error is a programming or configuration defect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// Machine constructed with zero slots
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A settling bean's column fell outside the slot range.
    ///
    /// Signals a broken policy or engine bug; the run must abort rather
    /// than clamp the column into range.
    #[error("settling bean at column {column} outside slot range 0..{slot_count}")]
    InternalConsistencyFault { column: usize, slot_count: usize },

    /// Accessor called with an out-of-range row or slot index
    #[error("index {index} out of range for machine with {len} slots")]
    IndexOutOfRange { index: usize, len: usize },

    /// Truncation requested while beans are still in flight or remaining
    #[error("cannot truncate slots: {in_flight} beans in flight, {remaining} remaining")]
    PreconditionViolation { in_flight: usize, remaining: usize },
}

// ============================================================================
// Machine
// ============================================================================

/// The quincunx state machine
///
/// Owns the remaining queue, the in-flight rows, and the settled slots.
/// Lifecycle: Empty → Loaded (`reset` with beans) → Running
/// (`advance_step` returning true) → Terminated (`advance_step` returning
/// false). `repeat` returns a terminated machine to Running with the same
/// population; `reset` starts over with a new one.
///
/// # Conservation
///
/// At every step, `remaining_count() + in_flight_count() +
/// settled_count()` equals the population handed to the last `reset`
/// (and is untouched by `repeat`). Containers hold beans by value, so a
/// bean can never appear in two places.
#[derive(Debug)]
pub struct BeanMachine {
    /// Beans waiting to be admitted, in admission order
    remaining: VecDeque<Bean>,

    /// One entry per row; `Some` holds the bean currently at that row
    in_flight: Vec<Option<Bean>>,

    /// Settled beans per terminal column, in settling order
    slots: Vec<VecDeque<Bean>>,

    /// Trace of admissions, settlements, and termination
    events: EventLog,

    /// Steps taken since the last reset/repeat
    step: usize,

    /// Whether the terminal event has been logged for this run
    terminated_logged: bool,
}

impl BeanMachine {
    /// Create a machine with the given number of slots
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `slot_count` is zero.
    pub fn new(slot_count: usize) -> Result<Self, MachineError> {
        if slot_count == 0 {
            return Err(MachineError::InvalidConfiguration(
                "slot count must be positive".to_string(),
            ));
        }
        Ok(Self {
            remaining: VecDeque::new(),
            in_flight: (0..slot_count).map(|_| None).collect(),
            slots: (0..slot_count).map(|_| VecDeque::new()).collect(),
            events: EventLog::new(),
            step: 0,
            terminated_logged: false,
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Hard reset: load a new population.
    ///
    /// Clears every container and the event log, resets each provided
    /// bean to its initial state, enqueues them in order, and admits one
    /// bean into row 0 if any are available. An empty population leaves
    /// the machine fully empty.
    pub fn reset(&mut self, beans: Vec<Bean>) {
        self.remaining.clear();
        for row in self.in_flight.iter_mut() {
            *row = None;
        }
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
        self.events.clear();
        self.step = 0;
        self.terminated_logged = false;

        for mut bean in beans {
            bean.reset();
            self.remaining.push_back(bean);
        }
        self.admit_from_queue();
    }

    /// Soft reset: re-run the experiment with the beans already tracked.
    ///
    /// Scoops every settled bean (slot 0 upward, preserving slot order)
    /// and every in-flight bean (row 0 downward) back into the remaining
    /// queue, then admits one bean into row 0. Total population is
    /// unchanged; only the distribution can differ.
    pub fn repeat(&mut self) {
        for slot in self.slots.iter_mut() {
            while let Some(bean) = slot.pop_front() {
                self.remaining.push_back(bean);
            }
        }
        for row in self.in_flight.iter_mut() {
            if let Some(bean) = row.take() {
                self.remaining.push_back(bean);
            }
        }
        self.events.clear();
        self.step = 0;
        self.terminated_logged = false;
        self.admit_from_queue();
    }

    /// Advance the machine one step.
    ///
    /// Returns `Ok(true)` while any row changed occupancy (motion or a
    /// new admission); `Ok(false)` once no bean is in flight and the
    /// remaining queue is empty. Callers drive the run by looping until
    /// false.
    ///
    /// # Errors
    ///
    /// `InternalConsistencyFault` when a settling bean's column is
    /// outside the slot range. The machine state is left untouched for
    /// inspection; the run must not continue.
    pub fn advance_step(&mut self) -> Result<bool, MachineError> {
        if self.is_terminated() {
            if !self.terminated_logged {
                self.terminated_logged = true;
                self.events.push(Event::Terminated { step: self.step });
            }
            return Ok(false);
        }
        self.step += 1;

        let last = self.slot_count() - 1;
        let mut moved = false;
        for row in (0..=last).rev() {
            // Taking ownership vacates the row, so gaps propagate without
            // any explicit stale-entry clearing.
            if row == last {
                if let Some(bean) = self.in_flight[row].take() {
                    let column = bean.column();
                    if column > last {
                        // The bean stays tracked even on a fault.
                        let slot_count = self.slot_count();
                        self.in_flight[row] = Some(bean);
                        return Err(MachineError::InternalConsistencyFault {
                            column,
                            slot_count,
                        });
                    }
                    self.events.push(Event::Settled {
                        step: self.step,
                        bean_id: bean.id().to_string(),
                        slot: column,
                    });
                    self.slots[column].push_back(bean);
                    moved = true;
                }
            } else if let Some(mut bean) = self.in_flight[row].take() {
                bean.advance();
                self.in_flight[row + 1] = Some(bean);
                moved = true;
            }
        }
        let admitted = self.admit_from_queue();
        Ok(moved || admitted)
    }

    /// Dequeue one bean, reset it, and place it at row 0.
    ///
    /// Row 0 is explicitly vacated when the queue is empty so the last
    /// admitted bean does not linger at the top.
    fn admit_from_queue(&mut self) -> bool {
        match self.remaining.pop_front() {
            Some(mut bean) => {
                bean.reset();
                self.events.push(Event::Admitted {
                    step: self.step,
                    bean_id: bean.id().to_string(),
                });
                self.in_flight[0] = Some(bean);
                true
            }
            None => {
                self.in_flight[0] = None;
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Truncation
    // ------------------------------------------------------------------

    /// Keep the better-performing half of the settled beans.
    ///
    /// Removes `(N-1)/2` beans (N = settled count, nothing removed when
    /// N is 0), clearing from slot 0 upward and trimming the boundary
    /// slot by exact count. Returns the number of beans removed.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` unless the run has terminated (no beans
    /// in flight or remaining).
    pub fn upper_half(&mut self) -> Result<usize, MachineError> {
        self.require_settled_only()?;
        let to_remove = Self::truncation_count(self.settled_count());
        let mut left = to_remove;
        for slot in self.slots.iter_mut() {
            while left > 0 && slot.pop_front().is_some() {
                left -= 1;
            }
            if left == 0 {
                break;
            }
        }
        Ok(to_remove)
    }

    /// Keep the worse-performing half of the settled beans.
    ///
    /// Mirror of [`Self::upper_half`]: clears from the highest slot
    /// downward, trimming the boundary slot by exact count.
    pub fn lower_half(&mut self) -> Result<usize, MachineError> {
        self.require_settled_only()?;
        let to_remove = Self::truncation_count(self.settled_count());
        let mut left = to_remove;
        for slot in self.slots.iter_mut().rev() {
            while left > 0 && slot.pop_front().is_some() {
                left -= 1;
            }
            if left == 0 {
                break;
            }
        }
        Ok(to_remove)
    }

    /// Number of beans a half-selection removes for `n` settled beans.
    ///
    /// Exactly `(n - 1) / 2` for n >= 1: 1 bean → 0 removed, 2 → 0,
    /// 3 → 1, 4 → 1. The strictly smaller half always leaves.
    fn truncation_count(n: usize) -> usize {
        if n == 0 {
            0
        } else {
            (n - 1) / 2
        }
    }

    fn require_settled_only(&self) -> Result<(), MachineError> {
        let in_flight = self.in_flight_count();
        let remaining = self.remaining.len();
        if in_flight > 0 || remaining > 0 {
            return Err(MachineError::PreconditionViolation {
                in_flight,
                remaining,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors (read-only)
    // ------------------------------------------------------------------

    /// Number of slots the machine was created with
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of beans waiting to be admitted
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Number of beans currently occupying rows
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.iter().filter(|row| row.is_some()).count()
    }

    /// Total number of settled beans across all slots
    pub fn settled_count(&self) -> usize {
        self.slots.iter().map(VecDeque::len).sum()
    }

    /// Column of the in-flight bean at `row`, or `None` for an empty row
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row >= slot_count()`; an out-of-range row
    /// never reads as an empty one.
    pub fn in_flight_column(&self, row: usize) -> Result<Option<usize>, MachineError> {
        match self.in_flight.get(row) {
            Some(entry) => Ok(entry.as_ref().map(Bean::column)),
            None => Err(MachineError::IndexOutOfRange {
                index: row,
                len: self.slot_count(),
            }),
        }
    }

    /// Number of settled beans in slot `slot`
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `slot >= slot_count()`.
    pub fn slot_bean_count(&self, slot: usize) -> Result<usize, MachineError> {
        match self.slots.get(slot) {
            Some(beans) => Ok(beans.len()),
            None => Err(MachineError::IndexOutOfRange {
                index: slot,
                len: self.slot_count(),
            }),
        }
    }

    /// Settled bean count for every slot, index = terminal column
    pub fn slot_counts(&self) -> Vec<usize> {
        self.slots.iter().map(VecDeque::len).collect()
    }

    /// In-flight column per row (`None` for empty rows)
    pub fn in_flight_columns(&self) -> Vec<Option<usize>> {
        self.in_flight
            .iter()
            .map(|row| row.as_ref().map(Bean::column))
            .collect()
    }

    /// Count-weighted average slot index of the settled beans.
    ///
    /// 0.0 when nothing has settled.
    pub fn average_slot(&self) -> f64 {
        let total = self.settled_count();
        if total == 0 {
            return 0.0;
        }
        let weighted: usize = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, beans)| index * beans.len())
            .sum();
        weighted as f64 / total as f64
    }

    /// Whether the run has finished: nothing in flight, nothing remaining
    pub fn is_terminated(&self) -> bool {
        self.remaining.is_empty() && self.in_flight_count() == 0
    }

    /// Steps taken since the last `reset`/`repeat`
    pub fn step(&self) -> usize {
        self.step
    }

    /// Event trace of the current run
    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
