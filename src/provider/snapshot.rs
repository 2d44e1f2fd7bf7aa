//! In-memory game state snapshot.

use super::types::{ActorAttributes, ActorId, Alert, GameStateProvider, Metric, WorkTypeId};
use crate::considerations::ConsiderationId;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Immutable aggregate of host facts, captured once per evaluation batch.
///
/// Hosts may implement [`GameStateProvider`] directly over live data; the
/// snapshot is the ready-made implementation used by tests and tools.
///
/// # Examples
///
/// ```
/// use work_priority::provider::{Alert, GameStateProvider, GameStateSnapshot, Metric};
///
/// let snapshot = GameStateSnapshot::builder()
///     .with_alert(Alert::HomeOnFire)
///     .with_metric(Metric::LowFoodFraction, 0.6)
///     .build();
///
/// assert!(snapshot.alert(Alert::HomeOnFire));
/// assert!((snapshot.metric(Metric::LowFoodFraction) - 0.6).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStateSnapshot {
    alerts: HashSet<Alert>,
    metrics: HashMap<Metric, f64>,
    weights: HashMap<ConsiderationId, f64>,
    policies: HashMap<WorkTypeId, f64>,
    actors: HashMap<ActorId, ActorAttributes>,
    assignments: HashMap<WorkTypeId, BTreeSet<ActorId>>,
}

impl GameStateSnapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Returns all actors in the snapshot.
    pub fn actors(&self) -> impl Iterator<Item = &ActorAttributes> {
        self.actors.values()
    }
}

impl GameStateProvider for GameStateSnapshot {
    fn alert(&self, alert: Alert) -> bool {
        self.alerts.contains(&alert)
    }

    fn metric(&self, metric: Metric) -> f64 {
        self.metrics.get(&metric).copied().unwrap_or(0.0)
    }

    fn weight(&self, id: ConsiderationId) -> f64 {
        self.weights.get(&id).copied().unwrap_or(1.0)
    }

    fn policy_offset(&self, work_type: &WorkTypeId) -> f64 {
        self.policies.get(work_type).copied().unwrap_or(0.0)
    }

    fn actor(&self, id: &ActorId) -> Option<&ActorAttributes> {
        self.actors.get(id)
    }

    fn best_skill_level(&self, work_type: &WorkTypeId) -> Option<f64> {
        self.actors
            .values()
            .filter_map(|a| a.skill(work_type))
            .map(|s| s.level)
            .fold(None, |best, level| match best {
                Some(b) if b >= level => Some(b),
                _ => Some(level),
            })
    }

    fn others_assigned(&self, work_type: &WorkTypeId, actor: &ActorId) -> usize {
        self.assignments
            .get(work_type)
            .map(|set| set.iter().filter(|a| *a != actor).count())
            .unwrap_or(0)
    }
}

/// Builder for [`GameStateSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    inner: GameStateSnapshot,
}

impl SnapshotBuilder {
    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.inner.alerts.insert(alert);
        self
    }

    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        self.inner.metrics.insert(metric, value);
        self
    }

    /// Sets the settings weight of one consideration.
    pub fn with_weight(mut self, id: ConsiderationId, weight: f64) -> Self {
        self.inner.weights.insert(id, weight);
        self
    }

    /// Sets the colony policy offset for a work type.
    pub fn with_policy(mut self, work_type: impl Into<WorkTypeId>, offset: f64) -> Self {
        self.inner.policies.insert(work_type.into(), offset);
        self
    }

    pub fn with_actor(mut self, actor: ActorAttributes) -> Self {
        self.inner.actors.insert(actor.id.clone(), actor);
        self
    }

    /// Records that `actor` is assigned to `work_type`.
    pub fn with_assignment(
        mut self,
        work_type: impl Into<WorkTypeId>,
        actor: impl Into<ActorId>,
    ) -> Self {
        self.inner
            .assignments
            .entry(work_type.into())
            .or_default()
            .insert(actor.into());
        self
    }

    pub fn build(self) -> GameStateSnapshot {
        self.inner
    }
}
