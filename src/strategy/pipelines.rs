//! Built-in pipelines for the standard work types.
//!
//! Each pipeline follows the same shape: a base value, an aptitude block,
//! situational rules for the work type, then the shared safety overrides.
//! The overrides come last so their `never_do` can veto anything computed
//! before them.

use super::types::WorkTypeStrategy;
use crate::considerations::Consideration;

/// Keys of the standard work types.
pub mod work_types {
    pub const FIREFIGHTER: &str = "Firefighter";
    pub const PATIENT: &str = "Patient";
    pub const DOCTOR: &str = "Doctor";
    pub const PATIENT_BED_REST: &str = "PatientBedRest";
    pub const BASIC_WORKER: &str = "BasicWorker";
    pub const WARDEN: &str = "Warden";
    pub const HANDLING: &str = "Handling";
    pub const COOKING: &str = "Cooking";
    pub const HUNTING: &str = "Hunting";
    pub const CONSTRUCTION: &str = "Construction";
    pub const GROWING: &str = "Growing";
    pub const MINING: &str = "Mining";
    pub const PLANT_CUTTING: &str = "PlantCutting";
    pub const SMITHING: &str = "Smithing";
    pub const TAILORING: &str = "Tailoring";
    pub const ART: &str = "Art";
    pub const CRAFTING: &str = "Crafting";
    pub const HAULING: &str = "Hauling";
    pub const CLEANING: &str = "Cleaning";
    pub const RESEARCH: &str = "Research";

    /// All standard work types, in the host's default column order.
    pub const ALL: [&str; 20] = [
        FIREFIGHTER,
        PATIENT,
        DOCTOR,
        PATIENT_BED_REST,
        BASIC_WORKER,
        WARDEN,
        HANDLING,
        COOKING,
        HUNTING,
        CONSTRUCTION,
        GROWING,
        MINING,
        PLANT_CUTTING,
        SMITHING,
        TAILORING,
        ART,
        CRAFTING,
        HAULING,
        CLEANING,
        RESEARCH,
    ];
}

use work_types::*;

const APTITUDE: [Consideration; 6] = [
    Consideration::RelevantSkills,
    Consideration::BestAtDoing,
    Consideration::Passion,
    Consideration::Mood,
    Consideration::Inspiration,
    Consideration::CompletingTask,
];

const SAFETY: [Consideration; 8] = [
    Consideration::ColonyPolicy,
    Consideration::Health,
    Consideration::Fire,
    Consideration::ColonistsNeedingTreatment,
    Consideration::DownedColonists,
    Consideration::BuildingImmunity,
    Consideration::SelfNeedsTreatment,
    Consideration::SelfDowned,
];

/// Standard pipeline: base, aptitude, `situational`, safety overrides.
fn skilled(key: &str, base: f64, situational: &[Consideration]) -> WorkTypeStrategy {
    WorkTypeStrategy::new(key)
        .with_step(Consideration::Base(base))
        .with_steps(APTITUDE)
        .with_steps(situational.iter().copied())
        .with_steps(SAFETY)
}

/// The fallback used for any work type without its own pipeline.
pub fn default_strategy() -> WorkTypeStrategy {
    WorkTypeStrategy::unkeyed()
        .with_step(Consideration::Base(0.5))
        .with_steps(APTITUDE)
        .with_step(Consideration::NobodyElseDoing)
        .with_steps(SAFETY)
}

/// Pipelines for every key in [`work_types::ALL`].
pub fn builtin_strategies() -> Vec<WorkTypeStrategy> {
    vec![
        WorkTypeStrategy::new(FIREFIGHTER).with_steps([
            Consideration::Base(0.2),
            Consideration::FireUrgency,
            Consideration::ColonyPolicy,
            Consideration::BuildingImmunity,
            Consideration::SelfNeedsTreatment,
            Consideration::SelfDowned,
        ]),
        WorkTypeStrategy::new(PATIENT).with_steps([
            Consideration::Base(0.0),
            Consideration::ColonyPolicy,
            Consideration::PatientNeed,
        ]),
        skilled_doctor(),
        WorkTypeStrategy::new(PATIENT_BED_REST).with_steps([
            Consideration::Base(0.0),
            Consideration::ColonyPolicy,
            Consideration::RestForImmunity,
            Consideration::PatientNeed,
        ]),
        WorkTypeStrategy::new(BASIC_WORKER)
            .with_steps([
                Consideration::Base(0.5),
                Consideration::Mood,
                Consideration::CompletingTask,
                Consideration::Refuelling,
            ])
            .with_steps(SAFETY),
        skilled(
            WARDEN,
            0.5,
            &[Consideration::SuppressionNeed, Consideration::LowFood(-0.2)],
        ),
        skilled(
            HANDLING,
            0.5,
            &[Consideration::AnimalsRoaming, Consideration::LowFood(-0.2)],
        ),
        skilled(
            COOKING,
            0.5,
            &[Consideration::LowFood(0.4), Consideration::FoodPoisoning],
        ),
        skilled(HUNTING, 0.5, &[Consideration::LowFood(0.3)]).with_steps([
            Consideration::HuntingWeapon,
            Consideration::BrawlerNotHunting,
        ]),
        skilled(CONSTRUCTION, 0.5, &[Consideration::LowFood(-0.2)]),
        skilled(GROWING, 0.5, &[Consideration::LowFood(0.2)]),
        skilled(MINING, 0.5, &[Consideration::LowFood(-0.3)]),
        skilled(
            PLANT_CUTTING,
            0.4,
            &[Consideration::PlantsBlighted, Consideration::LowFood(0.1)],
        ),
        skilled(SMITHING, 0.4, &[Consideration::LowFood(-0.3)]),
        skilled(
            TAILORING,
            0.4,
            &[Consideration::ColdClothing, Consideration::LowFood(-0.3)],
        ),
        skilled(ART, 0.3, &[Consideration::LowFood(-0.4)]),
        skilled(CRAFTING, 0.4, &[Consideration::LowFood(-0.3)]),
        WorkTypeStrategy::new(HAULING)
            .with_steps([
                Consideration::Base(0.3),
                Consideration::MovementSpeed,
                Consideration::Spoilage,
                Consideration::Refuelling,
                Consideration::NobodyElseDoing,
                Consideration::CompletingTask,
                Consideration::Mood,
                Consideration::LowFood(0.1),
            ])
            .with_steps(SAFETY),
        WorkTypeStrategy::new(CLEANING)
            .with_steps([
                Consideration::Base(0.3),
                Consideration::RoomDirtiness,
                Consideration::Mood,
                Consideration::NobodyElseDoing,
                Consideration::LowFood(-0.2),
            ])
            .with_steps(SAFETY),
        skilled(RESEARCH, 0.5, &[Consideration::LowFood(-0.4)])
            .with_step(Consideration::ActiveResearch),
    ]
}

/// Doctors skip the treatment and downed penalties and are pulled in by
/// them instead.
fn skilled_doctor() -> WorkTypeStrategy {
    WorkTypeStrategy::new(DOCTOR)
        .with_step(Consideration::Base(0.5))
        .with_steps(APTITUDE)
        .with_steps([
            Consideration::TreatmentUrgency,
            Consideration::ColonyPolicy,
            Consideration::Health,
            Consideration::Fire,
            Consideration::BuildingImmunity,
            Consideration::SelfNeedsTreatment,
            Consideration::SelfDowned,
        ])
}
