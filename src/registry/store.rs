//! Immutable strategy registry.

use crate::error::{PriorityError, PriorityResult};
use crate::provider::{ActorId, GameStateProvider, WorkTypeId};
use crate::state::ConsiderationState;
use crate::strategy::{builtin_strategies, default_strategy, StrategyRunner, WorkTypeStrategy};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Maps work types to their strategies, with a fallback for the rest.
///
/// Built once from the complete list of work type definitions and never
/// mutated afterwards, so it can be shared across threads by reference.
///
/// # Examples
///
/// ```
/// use work_priority::provider::WorkTypeId;
/// use work_priority::registry::StrategyRegistry;
///
/// let registry = StrategyRegistry::standard([WorkTypeId::new("Cooking")]);
/// let cooking = registry.resolve(&WorkTypeId::new("Cooking"));
/// let unknown = registry.resolve(&WorkTypeId::new("Alchemy"));
///
/// assert!(cooking.work_type().is_some());
/// assert!(std::ptr::eq(unknown, registry.default_strategy()));
/// ```
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    definitions: Vec<WorkTypeId>,
    strategies: HashMap<WorkTypeId, WorkTypeStrategy>,
    default: WorkTypeStrategy,
}

impl StrategyRegistry {
    /// Starts a registry over the known work type definitions.
    pub fn builder(definitions: impl IntoIterator<Item = WorkTypeId>) -> RegistryBuilder {
        RegistryBuilder::new(definitions)
    }

    /// Builds a registry in one call. Rejected strategies are logged and
    /// skipped.
    pub fn build(
        definitions: impl IntoIterator<Item = WorkTypeId>,
        strategies: impl IntoIterator<Item = WorkTypeStrategy>,
        default: WorkTypeStrategy,
    ) -> Self {
        strategies
            .into_iter()
            .fold(Self::builder(definitions), RegistryBuilder::register)
            .with_default(default)
            .build()
    }

    /// Builds a registry with the built-in pipelines.
    pub fn standard(definitions: impl IntoIterator<Item = WorkTypeId>) -> Self {
        Self::build(definitions, builtin_strategies(), default_strategy())
    }

    /// Returns the strategy for a work type, or the default one.
    pub fn resolve(&self, work_type: &WorkTypeId) -> &WorkTypeStrategy {
        self.strategies.get(work_type).unwrap_or(&self.default)
    }

    /// Like [`resolve`](Self::resolve), treating an absent work type as
    /// unknown.
    pub fn resolve_optional(&self, work_type: Option<&WorkTypeId>) -> &WorkTypeStrategy {
        match work_type {
            Some(work_type) => self.resolve(work_type),
            None => &self.default,
        }
    }

    pub fn default_strategy(&self) -> &WorkTypeStrategy {
        &self.default
    }

    /// Lists every registered strategy ordered by key, then the default.
    pub fn enumerate(&self) -> Vec<&WorkTypeStrategy> {
        let mut registered: Vec<&WorkTypeStrategy> = self.strategies.values().collect();
        registered.sort_by(|a, b| a.work_type().cmp(&b.work_type()));
        registered.push(&self.default);
        registered
    }

    /// Known work type definitions, in the order given at construction.
    pub fn definitions(&self) -> &[WorkTypeId] {
        &self.definitions
    }

    /// Returns `true` if the work type has its own strategy.
    pub fn contains(&self, work_type: &WorkTypeId) -> bool {
        self.strategies.contains_key(work_type)
    }

    /// Number of registered strategies, excluding the default.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Resolves and scores one work type for one actor.
    pub fn evaluate(
        &self,
        actor: Option<&ActorId>,
        work_type: Option<&WorkTypeId>,
        game: &dyn GameStateProvider,
    ) -> ConsiderationState {
        StrategyRunner::evaluate(self.resolve_optional(work_type), actor, work_type, game)
    }
}

/// Collects strategies before freezing them into a [`StrategyRegistry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    definitions: Vec<WorkTypeId>,
    known: HashSet<WorkTypeId>,
    strategies: HashMap<WorkTypeId, WorkTypeStrategy>,
    default: WorkTypeStrategy,
}

impl RegistryBuilder {
    fn new(definitions: impl IntoIterator<Item = WorkTypeId>) -> Self {
        let mut known = HashSet::new();
        let definitions: Vec<WorkTypeId> = definitions
            .into_iter()
            .filter(|d| !d.is_blank() && known.insert(d.clone()))
            .collect();
        Self {
            definitions,
            known,
            strategies: HashMap::new(),
            default: default_strategy(),
        }
    }

    /// Registers a strategy.
    ///
    /// # Errors
    /// Returns [`PriorityError::InvalidStrategy`] when the strategy has no
    /// work type key, a blank key, a key missing from the definitions, or a
    /// key that is already registered.
    pub fn try_register(&mut self, strategy: WorkTypeStrategy) -> PriorityResult<()> {
        let Some(key) = strategy.work_type() else {
            return Err(PriorityError::InvalidStrategy(
                "strategy declares no work type".into(),
            ));
        };
        if key.is_blank() {
            return Err(PriorityError::InvalidStrategy(
                "strategy declares a blank work type".into(),
            ));
        }
        if !self.known.contains(key) {
            return Err(PriorityError::InvalidStrategy(format!(
                "work type '{key}' is not defined"
            )));
        }
        if self.strategies.contains_key(key) {
            return Err(PriorityError::InvalidStrategy(format!(
                "work type '{key}' is already registered"
            )));
        }
        let key = key.clone();
        self.strategies.insert(key, strategy);
        Ok(())
    }

    /// Registers a strategy, logging and skipping it if rejected.
    pub fn register(mut self, strategy: WorkTypeStrategy) -> Self {
        if let Err(err) = self.try_register(strategy) {
            warn!(error = %err, "strategy registration skipped");
        }
        self
    }

    /// Replaces the fallback strategy.
    pub fn with_default(mut self, strategy: WorkTypeStrategy) -> Self {
        self.default = strategy;
        self
    }

    pub fn build(self) -> StrategyRegistry {
        info!(
            definitions = self.definitions.len(),
            strategies = self.strategies.len(),
            "strategy registry built"
        );
        StrategyRegistry {
            definitions: self.definitions,
            strategies: self.strategies,
            default: self.default,
        }
    }
}
