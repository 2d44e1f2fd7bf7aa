//! Two-state registry gate for hosts that learn their work type
//! definitions late.

use super::store::StrategyRegistry;
use crate::error::{PriorityError, PriorityResult};
use crate::provider::WorkTypeId;
use crate::strategy::WorkTypeStrategy;
use std::sync::OnceLock;
use tracing::debug;

/// A registry that is built on first use, once definitions are available.
///
/// The cell is either uninitialized or ready. Any lookup that supplies the
/// definitions moves it to ready exactly once; concurrent first lookups
/// block on the same initialization instead of racing. Lookups made before
/// definitions exist leave it uninitialized and fall back to the default
/// strategy of the initializer's empty registry, as an empty registry would.
/// That fallback has the same content as the ready registry's default but
/// is a separate instance.
///
/// Hosts that know their definitions at startup should build a
/// [`StrategyRegistry`] directly instead.
pub struct RegistryCell {
    registry: OnceLock<StrategyRegistry>,
    fallback: WorkTypeStrategy,
    init: fn(&[WorkTypeId]) -> StrategyRegistry,
}

impl RegistryCell {
    /// A cell that builds the standard registry.
    pub fn new() -> Self {
        Self::with_initializer(|defs| StrategyRegistry::standard(defs.iter().cloned()))
    }

    /// A cell that builds its registry with `init`.
    pub fn with_initializer(init: fn(&[WorkTypeId]) -> StrategyRegistry) -> Self {
        Self {
            registry: OnceLock::new(),
            fallback: init(&[]).default_strategy().clone(),
            init,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.registry.get().is_some()
    }

    /// Returns the registry, building it if `definitions` are available.
    pub fn get_or_init(&self, definitions: Option<&[WorkTypeId]>) -> Option<&StrategyRegistry> {
        if let Some(registry) = self.registry.get() {
            return Some(registry);
        }
        let definitions = definitions?;
        Some(self.registry.get_or_init(|| {
            debug!(definitions = definitions.len(), "initializing strategy registry");
            (self.init)(definitions)
        }))
    }

    /// Resolves a work type, falling back to the default strategy while
    /// the cell is uninitialized.
    pub fn resolve(
        &self,
        definitions: Option<&[WorkTypeId]>,
        work_type: &WorkTypeId,
    ) -> &WorkTypeStrategy {
        match self.get_or_init(definitions) {
            Some(registry) => registry.resolve(work_type),
            None => &self.fallback,
        }
    }

    /// Resolves a work type on a ready cell.
    ///
    /// # Errors
    /// Returns [`PriorityError::Configuration`] if the cell has not been
    /// initialized yet.
    pub fn try_resolve(&self, work_type: &WorkTypeId) -> PriorityResult<&WorkTypeStrategy> {
        self.registry
            .get()
            .map(|registry| registry.resolve(work_type))
            .ok_or_else(|| {
                PriorityError::Configuration(format!(
                    "work type '{work_type}' resolved before definitions were loaded"
                ))
            })
    }
}

impl Default for RegistryCell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegistryCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryCell")
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}
