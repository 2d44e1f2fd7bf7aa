//! Consideration descriptors and the evaluation context they read.

use super::library;
use crate::provider::{ActorAttributes, ActorId, GameStateProvider, WorkTypeId};
use crate::state::ConsiderationState;
use std::fmt;

/// Stable identifier of a consideration, also its settings-weight key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsiderationId {
    Base,
    RelevantSkills,
    BestAtDoing,
    Passion,
    Mood,
    Inspiration,
    Health,
    Fire,
    FireUrgency,
    BuildingImmunity,
    RestForImmunity,
    CompletingTask,
    ColonyPolicy,
    ColonistsNeedingTreatment,
    TreatmentUrgency,
    DownedColonists,
    SelfDowned,
    SelfNeedsTreatment,
    PatientNeed,
    LowFood,
    FoodPoisoning,
    HuntingWeapon,
    BrawlerNotHunting,
    AnimalsRoaming,
    SuppressionNeed,
    ColdClothing,
    PlantsBlighted,
    Spoilage,
    Refuelling,
    MovementSpeed,
    RoomDirtiness,
    NobodyElseDoing,
    ActiveResearch,
}

impl ConsiderationId {
    /// Human-readable name for UI listings.
    pub fn name(self) -> &'static str {
        match self {
            ConsiderationId::Base => "base priority",
            ConsiderationId::RelevantSkills => "relevant skills",
            ConsiderationId::BestAtDoing => "best at doing",
            ConsiderationId::Passion => "passion",
            ConsiderationId::Mood => "mood",
            ConsiderationId::Inspiration => "inspiration",
            ConsiderationId::Health => "health",
            ConsiderationId::Fire => "fire",
            ConsiderationId::FireUrgency => "fire urgency",
            ConsiderationId::BuildingImmunity => "building immunity",
            ConsiderationId::RestForImmunity => "rest for immunity",
            ConsiderationId::CompletingTask => "completing task",
            ConsiderationId::ColonyPolicy => "colony policy",
            ConsiderationId::ColonistsNeedingTreatment => "colonists needing treatment",
            ConsiderationId::TreatmentUrgency => "treatment urgency",
            ConsiderationId::DownedColonists => "downed colonists",
            ConsiderationId::SelfDowned => "downed",
            ConsiderationId::SelfNeedsTreatment => "needs treatment",
            ConsiderationId::PatientNeed => "patient need",
            ConsiderationId::LowFood => "low food",
            ConsiderationId::FoodPoisoning => "food poisoning",
            ConsiderationId::HuntingWeapon => "hunting weapon",
            ConsiderationId::BrawlerNotHunting => "brawler not hunting",
            ConsiderationId::AnimalsRoaming => "animals roaming",
            ConsiderationId::SuppressionNeed => "suppression need",
            ConsiderationId::ColdClothing => "cold clothing",
            ConsiderationId::PlantsBlighted => "plants blighted",
            ConsiderationId::Spoilage => "spoilage",
            ConsiderationId::Refuelling => "refuelling",
            ConsiderationId::MovementSpeed => "movement speed",
            ConsiderationId::RoomDirtiness => "room dirtiness",
            ConsiderationId::NobodyElseDoing => "nobody else doing",
            ConsiderationId::ActiveResearch => "active research",
        }
    }
}

impl fmt::Display for ConsiderationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a pipeline: a consideration plus its bound parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consideration {
    /// Sets the starting value for the work type.
    Base(f64),
    RelevantSkills,
    BestAtDoing,
    Passion,
    Mood,
    Inspiration,
    Health,
    Fire,
    FireUrgency,
    BuildingImmunity,
    RestForImmunity,
    CompletingTask,
    ColonyPolicy,
    ColonistsNeedingTreatment,
    TreatmentUrgency,
    DownedColonists,
    SelfDowned,
    SelfNeedsTreatment,
    PatientNeed,
    /// Signed magnitude: positive makes the work more attractive when food
    /// is scarce, negative less attractive.
    LowFood(f64),
    FoodPoisoning,
    HuntingWeapon,
    BrawlerNotHunting,
    AnimalsRoaming,
    SuppressionNeed,
    ColdClothing,
    PlantsBlighted,
    Spoilage,
    Refuelling,
    MovementSpeed,
    RoomDirtiness,
    NobodyElseDoing,
    ActiveResearch,
}

impl Consideration {
    pub fn id(&self) -> ConsiderationId {
        match self {
            Consideration::Base(_) => ConsiderationId::Base,
            Consideration::RelevantSkills => ConsiderationId::RelevantSkills,
            Consideration::BestAtDoing => ConsiderationId::BestAtDoing,
            Consideration::Passion => ConsiderationId::Passion,
            Consideration::Mood => ConsiderationId::Mood,
            Consideration::Inspiration => ConsiderationId::Inspiration,
            Consideration::Health => ConsiderationId::Health,
            Consideration::Fire => ConsiderationId::Fire,
            Consideration::FireUrgency => ConsiderationId::FireUrgency,
            Consideration::BuildingImmunity => ConsiderationId::BuildingImmunity,
            Consideration::RestForImmunity => ConsiderationId::RestForImmunity,
            Consideration::CompletingTask => ConsiderationId::CompletingTask,
            Consideration::ColonyPolicy => ConsiderationId::ColonyPolicy,
            Consideration::ColonistsNeedingTreatment => ConsiderationId::ColonistsNeedingTreatment,
            Consideration::TreatmentUrgency => ConsiderationId::TreatmentUrgency,
            Consideration::DownedColonists => ConsiderationId::DownedColonists,
            Consideration::SelfDowned => ConsiderationId::SelfDowned,
            Consideration::SelfNeedsTreatment => ConsiderationId::SelfNeedsTreatment,
            Consideration::PatientNeed => ConsiderationId::PatientNeed,
            Consideration::LowFood(_) => ConsiderationId::LowFood,
            Consideration::FoodPoisoning => ConsiderationId::FoodPoisoning,
            Consideration::HuntingWeapon => ConsiderationId::HuntingWeapon,
            Consideration::BrawlerNotHunting => ConsiderationId::BrawlerNotHunting,
            Consideration::AnimalsRoaming => ConsiderationId::AnimalsRoaming,
            Consideration::SuppressionNeed => ConsiderationId::SuppressionNeed,
            Consideration::ColdClothing => ConsiderationId::ColdClothing,
            Consideration::PlantsBlighted => ConsiderationId::PlantsBlighted,
            Consideration::Spoilage => ConsiderationId::Spoilage,
            Consideration::Refuelling => ConsiderationId::Refuelling,
            Consideration::MovementSpeed => ConsiderationId::MovementSpeed,
            Consideration::RoomDirtiness => ConsiderationId::RoomDirtiness,
            Consideration::NobodyElseDoing => ConsiderationId::NobodyElseDoing,
            Consideration::ActiveResearch => ConsiderationId::ActiveResearch,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Applies this consideration to `state`.
    pub fn apply(&self, state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
        match *self {
            Consideration::Base(value) => library::base(state, value),
            Consideration::RelevantSkills => library::relevant_skills(state, ctx),
            Consideration::BestAtDoing => library::best_at_doing(state, ctx),
            Consideration::Passion => library::passion(state, ctx),
            Consideration::Mood => library::mood(state, ctx),
            Consideration::Inspiration => library::inspiration(state, ctx),
            Consideration::Health => library::health(state, ctx),
            Consideration::Fire => library::fire(state, ctx),
            Consideration::FireUrgency => library::fire_urgency(state, ctx),
            Consideration::BuildingImmunity => library::building_immunity(state, ctx),
            Consideration::RestForImmunity => library::rest_for_immunity(state, ctx),
            Consideration::CompletingTask => library::completing_task(state, ctx),
            Consideration::ColonyPolicy => library::colony_policy(state, ctx),
            Consideration::ColonistsNeedingTreatment => {
                library::colonists_needing_treatment(state, ctx)
            }
            Consideration::TreatmentUrgency => library::treatment_urgency(state, ctx),
            Consideration::DownedColonists => library::downed_colonists(state, ctx),
            Consideration::SelfDowned => library::self_downed(state, ctx),
            Consideration::SelfNeedsTreatment => library::self_needs_treatment(state, ctx),
            Consideration::PatientNeed => library::patient_need(state, ctx),
            Consideration::LowFood(magnitude) => library::low_food(state, ctx, magnitude),
            Consideration::FoodPoisoning => library::food_poisoning(state, ctx),
            Consideration::HuntingWeapon => library::hunting_weapon(state, ctx),
            Consideration::BrawlerNotHunting => library::brawler_not_hunting(state, ctx),
            Consideration::AnimalsRoaming => library::animals_roaming(state, ctx),
            Consideration::SuppressionNeed => library::suppression_need(state, ctx),
            Consideration::ColdClothing => library::cold_clothing(state, ctx),
            Consideration::PlantsBlighted => library::plants_blighted(state, ctx),
            Consideration::Spoilage => library::spoilage(state, ctx),
            Consideration::Refuelling => library::refuelling(state, ctx),
            Consideration::MovementSpeed => library::movement_speed(state, ctx),
            Consideration::RoomDirtiness => library::room_dirtiness(state, ctx),
            Consideration::NobodyElseDoing => library::nobody_else_doing(state, ctx),
            Consideration::ActiveResearch => library::active_research(state, ctx),
        }
    }
}

/// Inputs of one evaluation: who, which work type, and the game view.
///
/// Borrowed for the duration of a single evaluation only.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    actor: Option<&'a ActorId>,
    work_type: Option<&'a WorkTypeId>,
    game: &'a dyn GameStateProvider,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        actor: Option<&'a ActorId>,
        work_type: Option<&'a WorkTypeId>,
        game: &'a dyn GameStateProvider,
    ) -> Self {
        Self {
            actor,
            work_type,
            game,
        }
    }

    pub fn actor_id(&self) -> Option<&'a ActorId> {
        self.actor
    }

    /// Resolves the actor's attributes; `None` when the actor is absent or
    /// unknown to the provider.
    pub fn actor(&self) -> Option<&'a ActorAttributes> {
        self.actor.and_then(|id| self.game.actor(id))
    }

    pub fn work_type(&self) -> Option<&'a WorkTypeId> {
        self.work_type
    }

    pub fn game(&self) -> &'a dyn GameStateProvider {
        self.game
    }

    /// Returns the settings weight, or `None` when the consideration is
    /// switched off (zero or non-finite weight).
    pub fn weight(&self, id: ConsiderationId) -> Option<f64> {
        let w = self.game.weight(id);
        (w.is_finite() && w != 0.0).then_some(w)
    }
}

impl fmt::Debug for EvalContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalContext")
            .field("actor", &self.actor)
            .field("work_type", &self.work_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::GameStateSnapshot;

    #[test]
    fn test_descriptor_ids_and_names() {
        assert_eq!(Consideration::LowFood(-0.3).id(), ConsiderationId::LowFood);
        assert_eq!(Consideration::Base(0.4).name(), "base priority");
        assert_eq!(ConsiderationId::FireUrgency.to_string(), "fire urgency");
    }

    #[test]
    fn test_zero_weight_switches_off() {
        let snapshot = GameStateSnapshot::builder()
            .with_weight(ConsiderationId::Mood, 0.0)
            .with_weight(ConsiderationId::Health, f64::NAN)
            .with_weight(ConsiderationId::Passion, 2.0)
            .build();
        let ctx = EvalContext::new(None, None, &snapshot);

        assert!(ctx.weight(ConsiderationId::Mood).is_none());
        assert!(ctx.weight(ConsiderationId::Health).is_none());
        assert_eq!(ctx.weight(ConsiderationId::Passion), Some(2.0));
        assert_eq!(ctx.weight(ConsiderationId::Fire), Some(1.0));
    }

    #[test]
    fn test_unknown_actor_resolves_to_none() {
        let snapshot = GameStateSnapshot::default();
        let id = ActorId::new("ghost");
        let ctx = EvalContext::new(Some(&id), None, &snapshot);
        assert!(ctx.actor().is_none());
        assert_eq!(ctx.actor_id(), Some(&id));
    }
}
