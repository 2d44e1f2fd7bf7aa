//! Pipeline execution.
//!
//! [`StrategyRunner`] creates the state for one (actor, work type) pair,
//! replays a strategy over it and hands the finished state back. Nothing is
//! retained between calls, so identical inputs always give identical states.

use super::config::RunnerConfig;
use super::types::WorkTypeStrategy;
use crate::considerations::EvalContext;
use crate::error::{PriorityError, PriorityResult};
use crate::provider::{ActorId, GameStateProvider, WorkTypeId};
use crate::registry::StrategyRegistry;
use crate::state::{ConsiderationState, Tier};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

/// Result of scoring one work type.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub work_type: WorkTypeId,
    /// Tier exported with the configured bands.
    pub tier: Tier,
    pub state: ConsiderationState,
}

/// Executes strategies.
///
/// # Usage
///
/// ```
/// use work_priority::provider::{ActorAttributes, ActorId, GameStateSnapshot, WorkTypeId};
/// use work_priority::strategy::{default_strategy, StrategyRunner};
///
/// let snapshot = GameStateSnapshot::builder()
///     .with_actor(ActorAttributes::new("alice"))
///     .build();
/// let actor = ActorId::new("alice");
/// let work = WorkTypeId::new("Gardening");
///
/// let state = StrategyRunner::evaluate(&default_strategy(), Some(&actor), Some(&work), &snapshot);
/// assert!(state.value() > 0.0);
/// ```
pub struct StrategyRunner;

impl StrategyRunner {
    /// Scores one work type for one actor from a fresh state.
    pub fn evaluate(
        strategy: &WorkTypeStrategy,
        actor: Option<&ActorId>,
        work_type: Option<&WorkTypeId>,
        game: &dyn GameStateProvider,
    ) -> ConsiderationState {
        let initial = ConsiderationState::new(actor.cloned(), work_type.cloned());
        Self::run(strategy, initial, actor, work_type, game)
    }

    /// Scores one work type starting from a previously exported tier.
    pub fn evaluate_seeded(
        strategy: &WorkTypeStrategy,
        previous: i64,
        actor: Option<&ActorId>,
        work_type: Option<&WorkTypeId>,
        game: &dyn GameStateProvider,
    ) -> ConsiderationState {
        let initial = ConsiderationState::from_tier(previous)
            .with_actor(actor.cloned())
            .with_work_type(work_type.cloned());
        Self::run(strategy, initial, actor, work_type, game)
    }

    fn run(
        strategy: &WorkTypeStrategy,
        initial: ConsiderationState,
        actor: Option<&ActorId>,
        work_type: Option<&WorkTypeId>,
        game: &dyn GameStateProvider,
    ) -> ConsiderationState {
        let ctx = EvalContext::new(actor, work_type, game);
        let state = strategy.run(initial, &ctx);
        debug!(
            actor = actor.map(ActorId::as_str),
            work_type = work_type.map(WorkTypeId::as_str),
            steps = strategy.len(),
            value = state.value(),
            tier = state.tier().as_u8(),
            "work type evaluated"
        );
        state
    }

    /// Scores every work type the registry knows for one actor.
    ///
    /// Results follow the registry's definition order.
    ///
    /// # Errors
    /// Returns [`PriorityError::Configuration`] if the config is invalid.
    pub fn evaluate_all(
        registry: &StrategyRegistry,
        actor: Option<&ActorId>,
        game: &dyn GameStateProvider,
        config: &RunnerConfig,
    ) -> PriorityResult<Vec<Evaluation>> {
        config.validate().map_err(PriorityError::Configuration)?;

        let score = |work_type: &WorkTypeId| {
            let strategy = registry.resolve(work_type);
            let state = Self::evaluate(strategy, actor, Some(work_type), game);
            Evaluation {
                work_type: work_type.clone(),
                tier: state.tier_with(&config.bands),
                state,
            }
        };

        let definitions = registry.definitions();

        #[cfg(feature = "parallel")]
        if config.parallel {
            return Ok(definitions.par_iter().map(score).collect());
        }

        Ok(definitions.iter().map(score).collect())
    }
}
