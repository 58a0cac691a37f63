//! The falling unit of the simulation
//!
//! A bean is a column position plus the decision policy that steers it.
//! The machine owns every bean outright; a bean sits in exactly one of
//! the remaining queue, an in-flight row, or a slot, and is mutated only
//! through `advance` and `reset`.

use crate::policy::{next_column, PegPolicy};

/// A single bean falling through the machine
#[derive(Debug)]
pub struct Bean {
    /// Unique id for logging and debugging
    id: String,
    /// Current horizontal column in the logical coordinate system
    column: usize,
    /// Per-peg decision capability
    policy: Box<dyn PegPolicy>,
}

impl Bean {
    /// Create a bean at column 0 with the given decision policy
    ///
    /// # Example
    /// ```
    /// use quincunx_core::models::Bean;
    /// use quincunx_core::policy::FixedPolicy;
    ///
    /// let bean = Bean::new(Box::new(FixedPolicy::always_deflect()));
    /// assert_eq!(bean.column(), 0);
    /// ```
    pub fn new(policy: Box<dyn PegPolicy>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            column: 0,
            policy,
        }
    }

    /// Unique bean id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current horizontal column
    pub fn column(&self) -> usize {
        self.column
    }

    /// Pass one peg: ask the policy for the deflection bit and apply the
    /// pure column transition. Called by the machine once per row.
    pub fn advance(&mut self) {
        self.column = next_column(self.column, self.policy.decide());
    }

    /// Return the bean to its initial state before it is dropped again
    pub fn reset(&mut self) {
        self.column = 0;
        self.policy.on_reset();
    }
}
