//! Identifiers, actor attributes and the read-only provider trait.

use crate::considerations::ConsiderationId;
use std::collections::HashMap;
use std::fmt;

/// Key of a work type (task category), e.g. `"Cooking"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkTypeId(String);

impl WorkTypeId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for WorkTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkTypeId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for WorkTypeId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Identifier of an actor (colonist).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Colony-wide boolean alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alert {
    /// A fire is burning inside the home area.
    HomeOnFire,
    /// Colonists lack clothing for the current temperature.
    ColdClothingNeeded,
    /// Tamed animals are outside their allowed area.
    AnimalsRoaming,
    /// Crops are blighted and should be cut.
    PlantsBlighted,
    /// No research project is selected.
    NoActiveResearch,
}

/// Colony-wide numeric metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Highest slave suppression need, in `[0, 1]`.
    SuppressionNeed,
    /// How short the colony is on food, in `[0, 1]` (1 = starving).
    LowFoodFraction,
    /// Fraction of stored food that is about to spoil, in `[0, 1]`.
    SpoilingFoodFraction,
    /// Fraction of fuelable buildings running low, in `[0, 1]`.
    RefuelNeededFraction,
    /// Number of colonists waiting for medical treatment.
    ColonistsNeedingTreatment,
    /// Number of downed colonists outside of a bed.
    DownedColonists,
}

/// Skill passion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Passion {
    #[default]
    None,
    Minor,
    Major,
}

/// A skill as it applies to one work type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    /// Skill level, in `[0, 20]`.
    pub level: f64,
    pub passion: Passion,
}

/// Read-only attribute bag for one actor.
///
/// # Examples
///
/// ```
/// use work_priority::provider::{ActorAttributes, Passion};
///
/// let actor = ActorAttributes::new("alice")
///     .with_skill("Cooking", 12.0, Passion::Major)
///     .with_mood(0.7);
/// assert!(actor.skill(&"Cooking".into()).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorAttributes {
    pub id: ActorId,

    /// Skills keyed by the work type they govern.
    pub skills: HashMap<WorkTypeId, Skill>,

    /// Mood, in `[0, 1]`.
    pub mood: f64,

    /// Overall health, in `[0, 1]`.
    pub health: f64,

    pub downed: bool,

    /// Has untended injuries or a disease needing care.
    pub needs_treatment: bool,

    /// Is fighting a disease and should stay in bed.
    pub building_immunity: bool,

    /// Work type the actor currently holds an inspiration for.
    pub inspired_for: Option<WorkTypeId>,

    /// Work type of the job the actor is currently doing.
    pub current_work: Option<WorkTypeId>,

    pub has_ranged_weapon: bool,

    /// Carries the brawler trait.
    pub brawler: bool,

    /// Movement speed relative to a baseline colonist (1.0).
    pub move_speed: f64,

    /// Food poisoning chance at the actor's current location, in `[0, 1]`.
    pub food_poisoning_risk: f64,

    /// Dirtiness of the actor's current room, in `[0, 1]`.
    pub room_dirtiness: f64,
}

impl ActorAttributes {
    pub fn new(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            skills: HashMap::new(),
            mood: 0.5,
            health: 1.0,
            downed: false,
            needs_treatment: false,
            building_immunity: false,
            inspired_for: None,
            current_work: None,
            has_ranged_weapon: false,
            brawler: false,
            move_speed: 1.0,
            food_poisoning_risk: 0.0,
            room_dirtiness: 0.0,
        }
    }

    pub fn with_skill(
        mut self,
        work_type: impl Into<WorkTypeId>,
        level: f64,
        passion: Passion,
    ) -> Self {
        self.skills.insert(work_type.into(), Skill { level, passion });
        self
    }

    pub fn with_mood(mut self, mood: f64) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn with_downed(mut self, downed: bool) -> Self {
        self.downed = downed;
        self
    }

    pub fn with_needs_treatment(mut self, needs: bool) -> Self {
        self.needs_treatment = needs;
        self
    }

    pub fn with_building_immunity(mut self, building: bool) -> Self {
        self.building_immunity = building;
        self
    }

    pub fn with_inspiration(mut self, work_type: impl Into<WorkTypeId>) -> Self {
        self.inspired_for = Some(work_type.into());
        self
    }

    pub fn with_current_work(mut self, work_type: impl Into<WorkTypeId>) -> Self {
        self.current_work = Some(work_type.into());
        self
    }

    pub fn with_ranged_weapon(mut self, has: bool) -> Self {
        self.has_ranged_weapon = has;
        self
    }

    pub fn with_brawler(mut self, brawler: bool) -> Self {
        self.brawler = brawler;
        self
    }

    pub fn with_move_speed(mut self, speed: f64) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn with_food_poisoning_risk(mut self, risk: f64) -> Self {
        self.food_poisoning_risk = risk;
        self
    }

    pub fn with_room_dirtiness(mut self, dirtiness: f64) -> Self {
        self.room_dirtiness = dirtiness;
        self
    }

    /// Returns the skill governing `work_type`, if any.
    ///
    /// A skill with a non-finite level reads as absent.
    pub fn skill(&self, work_type: &WorkTypeId) -> Option<Skill> {
        self.skills
            .get(work_type)
            .copied()
            .filter(|s| s.level.is_finite())
    }
}

/// Read-only view of the host game consumed by considerations.
///
/// This is the seam between the scoring core and the host environment:
/// the core never queries game state any other way. Implementations must
/// not change observable answers during one evaluation.
///
/// # Examples
///
/// ```ignore
/// struct LiveColony<'a> { map: &'a Map }
///
/// impl GameStateProvider for LiveColony<'_> {
///     fn alert(&self, alert: Alert) -> bool { self.map.alert_active(alert) }
///     fn metric(&self, metric: Metric) -> f64 { self.map.metric(metric) }
///     // ...
/// }
/// ```
pub trait GameStateProvider: Send + Sync {
    /// Returns whether a colony alert is active.
    fn alert(&self, alert: Alert) -> bool;

    /// Returns a colony metric. Unknown metrics read as `0.0`.
    fn metric(&self, metric: Metric) -> f64;

    /// Returns the settings weight of a consideration.
    ///
    /// A weight of exactly `0.0` switches the consideration off.
    fn weight(&self, _id: ConsiderationId) -> f64 {
        1.0
    }

    /// Returns the colony policy offset for a work type, in `[-1, 1]`.
    fn policy_offset(&self, _work_type: &WorkTypeId) -> f64 {
        0.0
    }

    /// Looks up an actor's attributes.
    fn actor(&self, id: &ActorId) -> Option<&ActorAttributes>;

    /// Returns the highest skill level any colonist has for a work type.
    fn best_skill_level(&self, work_type: &WorkTypeId) -> Option<f64>;

    /// Counts colonists other than `actor` assigned to a work type.
    fn others_assigned(&self, work_type: &WorkTypeId, actor: &ActorId) -> usize;
}
