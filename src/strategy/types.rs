//! Work type strategies: ordered pipelines of considerations.

use crate::considerations::{Consideration, EvalContext};
use crate::provider::WorkTypeId;
use crate::state::ConsiderationState;
use tracing::trace;

/// The scoring pipeline for one work type.
///
/// A strategy is data: an ordered list of [`Consideration`] descriptors
/// replayed over a state. It holds no evaluation state and can be shared
/// freely between evaluations and threads.
///
/// # Examples
///
/// ```
/// use work_priority::considerations::Consideration;
/// use work_priority::strategy::WorkTypeStrategy;
///
/// let strategy = WorkTypeStrategy::new("Cooking")
///     .with_step(Consideration::Base(0.5))
///     .with_step(Consideration::RelevantSkills)
///     .with_step(Consideration::LowFood(0.4));
///
/// assert_eq!(strategy.len(), 3);
/// assert_eq!(strategy.work_type().map(|w| w.as_str()), Some("Cooking"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkTypeStrategy {
    work_type: Option<WorkTypeId>,
    steps: Vec<Consideration>,
}

impl WorkTypeStrategy {
    /// Creates an empty pipeline for a work type.
    pub fn new(work_type: impl Into<WorkTypeId>) -> Self {
        Self {
            work_type: Some(work_type.into()),
            steps: Vec::new(),
        }
    }

    /// Creates an empty pipeline bound to no work type (the fallback).
    pub fn unkeyed() -> Self {
        Self {
            work_type: None,
            steps: Vec::new(),
        }
    }

    /// Appends one consideration.
    pub fn with_step(mut self, step: Consideration) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends several considerations in order.
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Consideration>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Returns the declared work type, `None` for the fallback.
    pub fn work_type(&self) -> Option<&WorkTypeId> {
        self.work_type.as_ref()
    }

    pub fn steps(&self) -> &[Consideration] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the names of all considerations in order.
    pub fn consideration_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|c| c.name()).collect()
    }

    /// Runs every step over `state`, in order.
    pub fn run(&self, state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
        self.steps.iter().fold(state, |state, step| {
            let state = step.apply(state, ctx);
            trace!(
                consideration = step.name(),
                value = state.value(),
                disabled = state.is_disabled(),
                "consideration applied"
            );
            state
        })
    }
}
