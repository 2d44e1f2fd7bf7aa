//! The consideration library.
//!
//! Every function here is an independent rule `(state, context) -> state`.
//! Rules never call each other and never special-case a disabled state:
//! the primitives on [`ConsiderationState`] already ignore magnitude changes
//! once disabled, so a rule always runs and the justification trail stays
//! complete.
//!
//! Weighted rules read their settings weight first; a zero weight returns
//! the state untouched. Rules that need the actor or the work type skip
//! when either is absent.

use super::types::{ConsiderationId, EvalContext};
use crate::provider::{Alert, Metric, Passion};
use crate::state::{clamp01, ConsiderationState};

/// Highest attainable skill level.
pub const MAX_SKILL_LEVEL: f64 = 20.0;

/// Skill levels behind the colony's best before a penalty applies.
const BEHIND_BEST_MARGIN: f64 = 5.0;

/// Cap on patient counts taken into account by triage rules.
const MAX_COUNTED_PATIENTS: f64 = 5.0;

/// Sets the starting value for a work type.
pub fn base(state: ConsiderationState, value: f64) -> ConsiderationState {
    state.set(value, || format!("base priority {value:.2}"))
}

// ============================================================================
// Aptitude
// ============================================================================

/// Skilled actors prefer the work; unskilled ones avoid it.
pub fn relevant_skills(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::RelevantSkills) else {
        return state;
    };
    let (Some(actor), Some(work_type)) = (ctx.actor(), ctx.work_type()) else {
        return state;
    };
    let Some(skill) = actor.skill(work_type) else {
        return state;
    };
    let level = skill.level.clamp(0.0, MAX_SKILL_LEVEL);
    let delta = (level / MAX_SKILL_LEVEL - 0.5) * 0.4 * w;
    state.add(delta, || format!("skill level {level:.0}"))
}

/// Compares the actor against the colony's best at this work type.
pub fn best_at_doing(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::BestAtDoing) else {
        return state;
    };
    let (Some(actor), Some(work_type)) = (ctx.actor(), ctx.work_type()) else {
        return state;
    };
    let (Some(skill), Some(best)) = (actor.skill(work_type), ctx.game().best_skill_level(work_type))
    else {
        return state;
    };
    if skill.level >= best {
        state.add(0.2 * w, || "best in the colony at this".to_string())
    } else if best - skill.level >= BEHIND_BEST_MARGIN {
        let gap = best - skill.level;
        state.add(-0.2 * w, || format!("{gap:.0} levels behind the colony's best"))
    } else {
        state
    }
}

pub fn passion(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::Passion) else {
        return state;
    };
    let (Some(actor), Some(work_type)) = (ctx.actor(), ctx.work_type()) else {
        return state;
    };
    let Some(skill) = actor.skill(work_type) else {
        return state;
    };
    match skill.passion {
        Passion::None => state.multiply(1.0 - 0.1 * w, || "no passion".to_string()),
        Passion::Minor => state.multiply(1.0 + 0.25 * w, || "minor passion".to_string()),
        Passion::Major => state.multiply(1.0 + 0.5 * w, || "major passion".to_string()),
    }
}

pub fn mood(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::Mood) else {
        return state;
    };
    let Some(actor) = ctx.actor() else {
        return state;
    };
    let mood = actor.mood;
    if mood < 0.25 {
        state.multiply(1.0 - 0.3 * w, || format!("low mood ({:.0}%)", mood * 100.0))
    } else if mood > 0.8 {
        state.multiply(1.0 + 0.1 * w, || format!("high mood ({:.0}%)", mood * 100.0))
    } else {
        state
    }
}

/// An inspired actor always takes up the matching work.
pub fn inspiration(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::Inspiration) else {
        return state;
    };
    let (Some(actor), Some(work_type)) = (ctx.actor(), ctx.work_type()) else {
        return state;
    };
    if actor.inspired_for.as_ref() != Some(work_type) {
        return state;
    }
    state
        .add(0.4 * w, || "inspired".to_string())
        .always_do(|| "inspired".to_string())
}

/// Keeps going on the job the actor is already doing.
pub fn completing_task(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::CompletingTask) else {
        return state;
    };
    let (Some(actor), Some(work_type)) = (ctx.actor(), ctx.work_type()) else {
        return state;
    };
    if actor.current_work.as_ref() == Some(work_type) {
        state.add(0.15 * w, || "currently doing this".to_string())
    } else {
        state
    }
}

pub fn movement_speed(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::MovementSpeed) else {
        return state;
    };
    let Some(actor) = ctx.actor() else {
        return state;
    };
    let speed = actor.move_speed;
    if !speed.is_finite() {
        return state;
    }
    state.multiply(1.0 + (speed - 1.0) * 0.5 * w, || {
        format!("moves at {:.0}% speed", speed * 100.0)
    })
}

/// Another colonist covering the work makes it less pressing; nobody
/// covering it makes it more so.
pub fn nobody_else_doing(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::NobodyElseDoing) else {
        return state;
    };
    let (Some(actor), Some(work_type)) = (ctx.actor_id(), ctx.work_type()) else {
        return state;
    };
    if ctx.game().others_assigned(work_type, actor) == 0 {
        state.add(0.2 * w, || "nobody else is assigned".to_string())
    } else {
        state
    }
}

// ============================================================================
// Situational
// ============================================================================

/// Shifts the value by the colony's policy offset for this work type.
pub fn colony_policy(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::ColonyPolicy) else {
        return state;
    };
    let Some(work_type) = ctx.work_type() else {
        return state;
    };
    let offset = ctx.game().policy_offset(work_type);
    if !offset.is_finite() {
        return state;
    }
    let offset = offset.clamp(-1.0, 1.0);
    state.add(offset * w, || format!("colony policy {offset:+.2}"))
}

/// Food scarcity. `magnitude` is supplied by the calling pipeline: positive
/// for work that relieves shortage, negative for work that should yield.
pub fn low_food(
    state: ConsiderationState,
    ctx: &EvalContext<'_>,
    magnitude: f64,
) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::LowFood) else {
        return state;
    };
    let shortage = clamp01(ctx.game().metric(Metric::LowFoodFraction));
    state.add(magnitude * shortage * w, || {
        format!("food is low ({:.0}% short)", shortage * 100.0)
    })
}

pub fn food_poisoning(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::FoodPoisoning) else {
        return state;
    };
    let Some(actor) = ctx.actor() else {
        return state;
    };
    let risk = clamp01(actor.food_poisoning_risk);
    state.multiply(1.0 - risk * w, || {
        format!("{:.0}% food poisoning risk here", risk * 100.0)
    })
}

pub fn hunting_weapon(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::HuntingWeapon).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    state.never_do_if(!actor.has_ranged_weapon, || "no ranged weapon".to_string())
}

pub fn brawler_not_hunting(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::BrawlerNotHunting).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    state.never_do_if(actor.brawler, || "brawlers do not hunt".to_string())
}

fn alert_boost(
    state: ConsiderationState,
    ctx: &EvalContext<'_>,
    id: ConsiderationId,
    alert: Alert,
    reason: &'static str,
) -> ConsiderationState {
    let Some(w) = ctx.weight(id) else {
        return state;
    };
    if ctx.game().alert(alert) {
        state.add(0.3 * w, || reason.to_string())
    } else {
        state
    }
}

pub fn animals_roaming(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    alert_boost(
        state,
        ctx,
        ConsiderationId::AnimalsRoaming,
        Alert::AnimalsRoaming,
        "animals are roaming",
    )
}

pub fn cold_clothing(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    alert_boost(
        state,
        ctx,
        ConsiderationId::ColdClothing,
        Alert::ColdClothingNeeded,
        "colonists need warm clothes",
    )
}

pub fn plants_blighted(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    alert_boost(
        state,
        ctx,
        ConsiderationId::PlantsBlighted,
        Alert::PlantsBlighted,
        "blighted plants",
    )
}

fn metric_boost(
    state: ConsiderationState,
    ctx: &EvalContext<'_>,
    id: ConsiderationId,
    metric: Metric,
    scale: f64,
    reason: &'static str,
) -> ConsiderationState {
    let Some(w) = ctx.weight(id) else {
        return state;
    };
    let amount = clamp01(ctx.game().metric(metric));
    state.add(scale * amount * w, || format!("{reason} ({:.0}%)", amount * 100.0))
}

pub fn suppression_need(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    metric_boost(
        state,
        ctx,
        ConsiderationId::SuppressionNeed,
        Metric::SuppressionNeed,
        0.5,
        "slaves need suppression",
    )
}

pub fn spoilage(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    metric_boost(
        state,
        ctx,
        ConsiderationId::Spoilage,
        Metric::SpoilingFoodFraction,
        0.4,
        "food is about to spoil",
    )
}

pub fn refuelling(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    metric_boost(
        state,
        ctx,
        ConsiderationId::Refuelling,
        Metric::RefuelNeededFraction,
        0.3,
        "buildings need refuelling",
    )
}

pub fn room_dirtiness(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::RoomDirtiness) else {
        return state;
    };
    let Some(actor) = ctx.actor() else {
        return state;
    };
    let dirt = clamp01(actor.room_dirtiness);
    state.add(0.3 * dirt * w, || format!("room is {:.0}% dirty", dirt * 100.0))
}

pub fn active_research(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::ActiveResearch).is_none() {
        return state;
    }
    state.never_do_if(ctx.game().alert(Alert::NoActiveResearch), || {
        "no research project selected".to_string()
    })
}

// ============================================================================
// Safety and triage
// ============================================================================

pub fn health(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::Health) else {
        return state;
    };
    let Some(actor) = ctx.actor() else {
        return state;
    };
    if !actor.health.is_finite() {
        return state;
    }
    let health = clamp01(actor.health);
    if health < 0.5 {
        state.multiply(1.0 - (0.5 - health) * w, || {
            format!("poor health ({:.0}%)", health * 100.0)
        })
    } else {
        state
    }
}

/// Ordinary work yields while the home area burns.
pub fn fire(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::Fire) else {
        return state;
    };
    if ctx.game().alert(Alert::HomeOnFire) {
        state.multiply(1.0 - 0.5 * w, || "fire in the home area".to_string())
    } else {
        state
    }
}

/// Firefighting is always done while the home area burns.
pub fn fire_urgency(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::FireUrgency) else {
        return state;
    };
    if !ctx.game().alert(Alert::HomeOnFire) {
        return state;
    }
    state
        .always_do(|| "fire in the home area".to_string())
        .add(0.6 * w, || "fire in the home area".to_string())
}

pub fn building_immunity(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::BuildingImmunity).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    state.never_do_if(actor.building_immunity, || {
        "resting to build immunity".to_string()
    })
}

pub fn rest_for_immunity(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::RestForImmunity).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    if !actor.building_immunity {
        return state;
    }
    state
        .always_do(|| "needs bed rest to build immunity".to_string())
        .set(1.0, || "needs bed rest to build immunity".to_string())
}

fn patient_count(ctx: &EvalContext<'_>, metric: Metric) -> f64 {
    let n = ctx.game().metric(metric);
    if n.is_nan() {
        0.0
    } else {
        n.clamp(0.0, MAX_COUNTED_PATIENTS).floor()
    }
}

/// Non-medical work yields while colonists wait for treatment.
pub fn colonists_needing_treatment(
    state: ConsiderationState,
    ctx: &EvalContext<'_>,
) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::ColonistsNeedingTreatment) else {
        return state;
    };
    let n = patient_count(ctx, Metric::ColonistsNeedingTreatment);
    if n == 0.0 {
        return state;
    }
    state.multiply(1.0 - n * 0.1 * w, || {
        format!("{n:.0} colonists need treatment")
    })
}

/// Doctors are pulled in while colonists wait for treatment.
pub fn treatment_urgency(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::TreatmentUrgency) else {
        return state;
    };
    let n = patient_count(ctx, Metric::ColonistsNeedingTreatment);
    state
        .add(n * 0.1 * w, || format!("{n:.0} colonists need treatment"))
        .always_do_if(n > 0.0, || format!("{n:.0} colonists need treatment"))
}

pub fn downed_colonists(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    let Some(w) = ctx.weight(ConsiderationId::DownedColonists) else {
        return state;
    };
    let n = patient_count(ctx, Metric::DownedColonists);
    if n == 0.0 {
        return state;
    }
    state.multiply(1.0 - 0.5 * w, || format!("{n:.0} colonists are downed"))
}

pub fn self_downed(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::SelfDowned).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    state.never_do_if(actor.downed, || "downed".to_string())
}

pub fn self_needs_treatment(
    state: ConsiderationState,
    ctx: &EvalContext<'_>,
) -> ConsiderationState {
    if ctx.weight(ConsiderationId::SelfNeedsTreatment).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    state.never_do_if(actor.needs_treatment, || "needs treatment".to_string())
}

/// A patient always seeks treatment.
pub fn patient_need(state: ConsiderationState, ctx: &EvalContext<'_>) -> ConsiderationState {
    if ctx.weight(ConsiderationId::PatientNeed).is_none() {
        return state;
    }
    let Some(actor) = ctx.actor() else {
        return state;
    };
    if !actor.needs_treatment {
        return state;
    }
    state
        .always_do(|| "needs treatment".to_string())
        .set(1.0, || "needs treatment".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ActorAttributes, ActorId, GameStateSnapshot, WorkTypeId};
    use crate::state::Tier;

    fn start(value: f64) -> ConsiderationState {
        ConsiderationState::default().set(value, || "start".into())
    }

    fn eval<F>(
        snapshot: &GameStateSnapshot,
        actor: &str,
        work: &str,
        value: f64,
        rule: F,
    ) -> ConsiderationState
    where
        F: Fn(ConsiderationState, &EvalContext<'_>) -> ConsiderationState,
    {
        let actor = ActorId::new(actor);
        let work = WorkTypeId::new(work);
        let ctx = EvalContext::new(Some(&actor), Some(&work), snapshot);
        rule(start(value), &ctx)
    }

    #[test]
    fn test_relevant_skills_scales_with_level() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("a").with_skill("Mining", 20.0, Passion::None))
            .with_actor(ActorAttributes::new("b").with_skill("Mining", 0.0, Passion::None))
            .build();

        let high = eval(&snapshot, "a", "Mining", 0.5, relevant_skills);
        let low = eval(&snapshot, "b", "Mining", 0.5, relevant_skills);
        assert!((high.value() - 0.7).abs() < 1e-10);
        assert!((low.value() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_malformed_actor_keeps_score() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(
                ActorAttributes::new("a")
                    .with_skill("Mining", f64::NAN, Passion::None)
                    .with_health(f64::NAN),
            )
            .build();

        let skilled = eval(&snapshot, "a", "Mining", 0.5, relevant_skills);
        assert!((skilled.value() - 0.5).abs() < 1e-10);
        assert_eq!(skilled.justifications().len(), 1);

        let healthy = eval(&snapshot, "a", "Mining", 0.5, health);
        assert!((healthy.value() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_absent_actor_skips() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("a").with_skill("Mining", 20.0, Passion::Major))
            .build();
        let work = WorkTypeId::new("Mining");
        let ctx = EvalContext::new(None, Some(&work), &snapshot);

        let state = start(0.5);
        let after = passion(relevant_skills(state.clone(), &ctx), &ctx);
        assert_eq!(after, state);
    }

    #[test]
    fn test_best_at_doing() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("best").with_skill("Art", 15.0, Passion::None))
            .with_actor(ActorAttributes::new("mid").with_skill("Art", 12.0, Passion::None))
            .with_actor(ActorAttributes::new("poor").with_skill("Art", 3.0, Passion::None))
            .build();

        assert!((eval(&snapshot, "best", "Art", 0.5, best_at_doing).value() - 0.7).abs() < 1e-10);
        assert!((eval(&snapshot, "mid", "Art", 0.5, best_at_doing).value() - 0.5).abs() < 1e-10);
        assert!((eval(&snapshot, "poor", "Art", 0.5, best_at_doing).value() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_passion_levels() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("major").with_skill("Art", 5.0, Passion::Major))
            .with_actor(ActorAttributes::new("none").with_skill("Art", 5.0, Passion::None))
            .build();

        assert!((eval(&snapshot, "major", "Art", 0.4, passion).value() - 0.6).abs() < 1e-10);
        assert!((eval(&snapshot, "none", "Art", 0.4, passion).value() - 0.36).abs() < 1e-10);
    }

    #[test]
    fn test_inspiration_forces_on() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("a").with_inspiration("Art"))
            .build();

        let state = eval(&snapshot, "a", "Art", 0.2, inspiration);
        assert!(state.is_enabled());
        assert!((state.value() - 0.6).abs() < 1e-10);

        let other = eval(&snapshot, "a", "Mining", 0.2, inspiration);
        assert!(!other.is_enabled());
    }

    #[test]
    fn test_low_food_signed_magnitude() {
        let snapshot = GameStateSnapshot::builder()
            .with_metric(Metric::LowFoodFraction, 0.5)
            .build();

        let up = eval(&snapshot, "a", "Cooking", 0.5, |s, c| low_food(s, c, 0.4));
        let down = eval(&snapshot, "a", "Art", 0.5, |s, c| low_food(s, c, -0.4));
        assert!((up.value() - 0.7).abs() < 1e-10);
        assert!((down.value() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_zero_weight_is_noop() {
        let snapshot = GameStateSnapshot::builder()
            .with_alert(Alert::HomeOnFire)
            .with_metric(Metric::LowFoodFraction, 1.0)
            .with_weight(ConsiderationId::Fire, 0.0)
            .with_weight(ConsiderationId::FireUrgency, 0.0)
            .with_weight(ConsiderationId::LowFood, 0.0)
            .with_weight(ConsiderationId::HuntingWeapon, 0.0)
            .with_actor(ActorAttributes::new("a"))
            .build();

        let state = start(0.5);
        let rules: [fn(ConsiderationState, &EvalContext<'_>) -> ConsiderationState; 3] =
            [fire, fire_urgency, hunting_weapon];
        for rule in rules {
            let after = eval(&snapshot, "a", "Hunting", 0.5, rule);
            assert_eq!(after, state);
        }
        let after = eval(&snapshot, "a", "Cooking", 0.5, |s, c| low_food(s, c, 0.5));
        assert_eq!(after, state);
    }

    #[test]
    fn test_fire_rules() {
        let snapshot = GameStateSnapshot::builder()
            .with_alert(Alert::HomeOnFire)
            .build();

        let ordinary = eval(&snapshot, "a", "Art", 0.6, fire);
        assert!((ordinary.value() - 0.3).abs() < 1e-10);

        let firefighting = eval(&snapshot, "a", "Firefighter", 0.2, fire_urgency);
        assert!(firefighting.is_enabled());
        assert!((firefighting.value() - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_hunting_weapon_and_brawler() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("unarmed"))
            .with_actor(ActorAttributes::new("brawler").with_ranged_weapon(true).with_brawler(true))
            .with_actor(ActorAttributes::new("hunter").with_ranged_weapon(true))
            .build();

        assert!(eval(&snapshot, "unarmed", "Hunting", 0.5, hunting_weapon).is_disabled());
        assert!(eval(&snapshot, "brawler", "Hunting", 0.5, brawler_not_hunting).is_disabled());
        let hunter = eval(&snapshot, "hunter", "Hunting", 0.5, |s, c| {
            brawler_not_hunting(hunting_weapon(s, c), c)
        });
        assert!(!hunter.is_disabled());
    }

    #[test]
    fn test_rules_still_run_on_disabled_state() {
        let snapshot = GameStateSnapshot::builder()
            .with_alert(Alert::AnimalsRoaming)
            .with_actor(ActorAttributes::new("a").with_inspiration("Handling"))
            .build();
        let actor = ActorId::new("a");
        let work = WorkTypeId::new("Handling");
        let ctx = EvalContext::new(Some(&actor), Some(&work), &snapshot);

        let state = start(0.4).never_do(|| "off".into());
        let state = animals_roaming(state, &ctx);
        assert!((state.value() - 0.4).abs() < 1e-10);

        // A later flag rule may still flip the flags back.
        let state = inspiration(state, &ctx);
        assert!(state.is_enabled());
        assert!((state.value() - 0.4).abs() < 1e-10);
        assert_eq!(state.tier(), Tier::Third);
    }

    #[test]
    fn test_treatment_triage() {
        let snapshot = GameStateSnapshot::builder()
            .with_metric(Metric::ColonistsNeedingTreatment, 2.0)
            .build();

        let doctor = eval(&snapshot, "a", "Doctor", 0.3, treatment_urgency);
        assert!(doctor.is_enabled());
        assert!((doctor.value() - 0.5).abs() < 1e-10);

        let other = eval(&snapshot, "a", "Art", 0.5, colonists_needing_treatment);
        assert!((other.value() - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_patient_counts_capped() {
        let snapshot = GameStateSnapshot::builder()
            .with_metric(Metric::ColonistsNeedingTreatment, 40.0)
            .build();
        let other = eval(&snapshot, "a", "Art", 0.8, colonists_needing_treatment);
        assert!((other.value() - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_self_conditions() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("hurt").with_needs_treatment(true))
            .with_actor(ActorAttributes::new("down").with_downed(true))
            .with_actor(ActorAttributes::new("sick").with_building_immunity(true))
            .build();

        assert!(eval(&snapshot, "hurt", "Art", 0.5, self_needs_treatment).is_disabled());
        assert!(eval(&snapshot, "down", "Art", 0.5, self_downed).is_disabled());
        assert!(eval(&snapshot, "sick", "Art", 0.5, building_immunity).is_disabled());

        let patient = eval(&snapshot, "hurt", "Patient", 0.1, patient_need);
        assert!(patient.is_enabled());
        assert!((patient.value() - 1.0).abs() < 1e-10);

        let rest = eval(&snapshot, "sick", "PatientBedRest", 0.1, rest_for_immunity);
        assert_eq!(rest.tier(), Tier::First);
    }

    #[test]
    fn test_colony_policy_offset_clamped() {
        let snapshot = GameStateSnapshot::builder()
            .with_policy("Cleaning", -3.0)
            .with_policy("Art", 0.25)
            .build();

        assert!(eval(&snapshot, "a", "Cleaning", 0.9, colony_policy).value().abs() < 1e-10);
        assert!((eval(&snapshot, "a", "Art", 0.5, colony_policy).value() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_nobody_else_doing() {
        let snapshot = GameStateSnapshot::builder()
            .with_assignment("Art", "a")
            .with_assignment("Cooking", "b")
            .build();

        assert!((eval(&snapshot, "a", "Art", 0.5, nobody_else_doing).value() - 0.7).abs() < 1e-10);
        let covered = eval(&snapshot, "a", "Cooking", 0.5, nobody_else_doing);
        assert!((covered.value() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_active_research() {
        let snapshot = GameStateSnapshot::builder()
            .with_alert(Alert::NoActiveResearch)
            .build();
        assert!(eval(&snapshot, "a", "Research", 0.9, active_research).is_disabled());
    }

    #[test]
    fn test_movement_speed() {
        let snapshot = GameStateSnapshot::builder()
            .with_actor(ActorAttributes::new("fast").with_move_speed(1.4))
            .build();
        let state = eval(&snapshot, "fast", "Hauling", 0.5, movement_speed);
        assert!((state.value() - 0.6).abs() < 1e-10);
    }
}
