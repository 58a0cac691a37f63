//! Event logging for debugging and run analysis
//!
//! The machine records the significant state changes of a run: beans
//! admitted at the top, beans settling into slots, and the terminal
//! step. The log is an in-memory trace only: it is cleared by `reset`
//! and `repeat` and never persisted.

/// A significant state change during a run.
///
/// All events carry the step number at which they occurred (step 0 is
/// the `reset`/`repeat` that loaded the machine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A bean was taken from the remaining queue and placed at row 0
    Admitted {
        step: usize,
        bean_id: String,
    },

    /// A bean reached the last row and was appended to a slot
    Settled {
        step: usize,
        bean_id: String,
        slot: usize,
    },

    /// `advance_step` returned false: nothing in flight, nothing remaining
    Terminated {
        step: usize,
    },
}

impl Event {
    /// Step number at which the event occurred
    pub fn step(&self) -> usize {
        match self {
            Event::Admitted { step, .. } => *step,
            Event::Settled { step, .. } => *step,
            Event::Terminated { step } => *step,
        }
    }
}

/// Append-only log of run events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of logged events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of settlement events in the log
    pub fn settled_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Settled { .. }))
            .count()
    }

    /// Discard all events (new run starting)
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_orders_and_counts() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(Event::Admitted {
            step: 0,
            bean_id: "b0".to_string(),
        });
        log.push(Event::Settled {
            step: 4,
            bean_id: "b0".to_string(),
            slot: 2,
        });
        log.push(Event::Terminated { step: 5 });

        assert_eq!(log.len(), 3);
        assert_eq!(log.settled_count(), 1);
        let steps: Vec<usize> = log.iter().map(Event::step).collect();
        assert_eq!(steps, vec![0, 4, 5]);

        log.clear();
        assert!(log.is_empty());
    }
}
