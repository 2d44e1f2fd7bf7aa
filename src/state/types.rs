//! The scored value object and its adjustment primitives.

use super::tier::{clamp01, Tier, TierBands};
use crate::error::{PriorityError, PriorityResult};
use crate::provider::{ActorId, WorkTypeId};
use std::fmt;

/// The kind of change a [`Justification`] records.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjustment {
    /// Seeded from a previously exported tier.
    Seed(Tier),
    /// Value replaced.
    Set,
    /// Value offset by the requested delta.
    Add(f64),
    /// Value scaled by the requested factor.
    Multiply(f64),
    /// Forced on.
    AlwaysDo,
    /// Forced off.
    NeverDo,
}

/// One entry of the justification log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Justification {
    pub adjustment: Adjustment,
    pub reason: String,
    /// Value before the change.
    pub before: f64,
    /// Value after the change.
    pub after: f64,
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.adjustment {
            Adjustment::Seed(tier) => write!(f, "seeded from tier {tier}: {}", self.reason),
            Adjustment::Set => write!(f, "set to {:.2}: {}", self.after, self.reason),
            Adjustment::Add(delta) => write!(
                f,
                "{delta:+.2} ({:.2} -> {:.2}): {}",
                self.before, self.after, self.reason
            ),
            Adjustment::Multiply(factor) => write!(
                f,
                "x{factor:.2} ({:.2} -> {:.2}): {}",
                self.before, self.after, self.reason
            ),
            Adjustment::AlwaysDo => write!(f, "always do: {}", self.reason),
            Adjustment::NeverDo => write!(f, "never do: {}", self.reason),
        }
    }
}

/// Desirability of one work type for one actor at one evaluation.
///
/// The value always stays in `[0, 1]`. Primitives consume the state and
/// return the updated one, so pipelines read as a chain of steps. The
/// `reason` closures only run when a primitive actually changes the value
/// or a flag.
///
/// Once `disabled`, magnitude primitives (`set`, `add`, `multiply`) are
/// no-ops; flag primitives still apply, last writer wins.
///
/// # Examples
///
/// ```
/// use work_priority::state::{ConsiderationState, Tier};
///
/// let state = ConsiderationState::default()
///     .set(0.5, || "base".into())
///     .multiply(2.0, || "doubled".into());
///
/// assert!((state.value() - 1.0).abs() < 1e-10);
/// assert_eq!(state.tier(), Tier::First);
/// assert_eq!(state.justifications().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsiderationState {
    value: f64,
    enabled: bool,
    disabled: bool,
    justifications: Vec<Justification>,
    actor: Option<ActorId>,
    work_type: Option<WorkTypeId>,
}

impl ConsiderationState {
    /// Creates a fresh state (value `0.0`, no flags) for an actor/work type pair.
    pub fn new(actor: Option<ActorId>, work_type: Option<WorkTypeId>) -> Self {
        Self {
            actor,
            work_type,
            ..Self::default()
        }
    }

    /// Seeds a state from a host tier using the default bands.
    ///
    /// Out-of-range tiers are clamped to the nearest valid tier.
    pub fn from_tier(tier: i64) -> Self {
        Self::seeded(tier, &TierBands::default())
    }

    /// Seeds a state from a host tier using custom bands.
    ///
    /// # Errors
    /// Returns [`PriorityError::Configuration`] if `bands` fail
    /// [`TierBands::validate`].
    pub fn from_tier_with(tier: i64, bands: &TierBands) -> PriorityResult<Self> {
        bands.validate().map_err(PriorityError::Configuration)?;
        Ok(Self::seeded(tier, bands))
    }

    fn seeded(tier: i64, bands: &TierBands) -> Self {
        let tier = Tier::from_raw(tier);
        let value = bands.representative(tier);
        Self {
            value,
            disabled: tier == Tier::Disabled,
            justifications: vec![Justification {
                adjustment: Adjustment::Seed(tier),
                reason: "previous priority".to_string(),
                before: 0.0,
                after: value,
            }],
            ..Self::default()
        }
    }

    pub fn with_actor(mut self, actor: Option<ActorId>) -> Self {
        self.actor = actor;
        self
    }

    pub fn with_work_type(mut self, work_type: Option<WorkTypeId>) -> Self {
        self.work_type = work_type;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn actor(&self) -> Option<&ActorId> {
        self.actor.as_ref()
    }

    pub fn work_type(&self) -> Option<&WorkTypeId> {
        self.work_type.as_ref()
    }

    /// Returns the ordered justification log.
    pub fn justifications(&self) -> &[Justification] {
        &self.justifications
    }

    /// Renders the justification log as display lines.
    pub fn explain(&self) -> Vec<String> {
        self.justifications.iter().map(|j| j.to_string()).collect()
    }

    // ---- Magnitude primitives ----

    /// Replaces the value (clamped to `[0, 1]`).
    ///
    /// Non-finite values leave the state unchanged, as for `add` and
    /// `multiply` results that are not finite.
    pub fn set<F>(self, value: f64, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.adjust(Adjustment::Set, value, reason)
    }

    /// Adds `delta` to the value (clamped to `[0, 1]`).
    pub fn add<F>(self, delta: f64, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let target = self.value + delta;
        self.adjust(Adjustment::Add(delta), target, reason)
    }

    /// Multiplies the value by `factor` (clamped to `[0, 1]`).
    pub fn multiply<F>(self, factor: f64, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let target = self.value * factor;
        self.adjust(Adjustment::Multiply(factor), target, reason)
    }

    fn adjust<F>(mut self, adjustment: Adjustment, target: f64, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        // A non-finite target comes from malformed input; keep the score.
        if self.disabled || !target.is_finite() {
            return self;
        }
        let before = self.value;
        let after = clamp01(target);
        if after == before {
            return self;
        }
        self.value = after;
        self.justifications.push(Justification {
            adjustment,
            reason: reason(),
            before,
            after,
        });
        self
    }

    // ---- Flag primitives ----

    /// Forces the work type on: `enabled = true`, `disabled = false`.
    pub fn always_do<F>(mut self, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if self.enabled && !self.disabled {
            return self;
        }
        self.enabled = true;
        self.disabled = false;
        self.push_flag(Adjustment::AlwaysDo, reason);
        self
    }

    /// [`always_do`](Self::always_do) when `condition` holds and the state
    /// is not already enabled.
    pub fn always_do_if<F>(self, condition: bool, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition && !self.enabled {
            self.always_do(reason)
        } else {
            self
        }
    }

    /// Forces the work type off: `disabled = true`, `enabled = false`.
    pub fn never_do<F>(mut self, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if self.disabled && !self.enabled {
            return self;
        }
        self.disabled = true;
        self.enabled = false;
        self.push_flag(Adjustment::NeverDo, reason);
        self
    }

    /// [`never_do`](Self::never_do) when `condition` holds and the state
    /// is not already disabled.
    pub fn never_do_if<F>(self, condition: bool, reason: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition && !self.disabled {
            self.never_do(reason)
        } else {
            self
        }
    }

    fn push_flag<F>(&mut self, adjustment: Adjustment, reason: F)
    where
        F: FnOnce() -> String,
    {
        self.justifications.push(Justification {
            adjustment,
            reason: reason(),
            before: self.value,
            after: self.value,
        });
    }

    // ---- Export ----

    /// Exports the host tier using the default bands.
    pub fn tier(&self) -> Tier {
        self.tier_with(&TierBands::default())
    }

    /// Exports the host tier using custom bands.
    ///
    /// Disabled states always export [`Tier::Disabled`]. The bands are not
    /// checked here; validate them once up front (as
    /// [`RunnerConfig::validate`](crate::strategy::RunnerConfig::validate)
    /// does), otherwise the round trip with `from_tier_with` is not
    /// guaranteed.
    pub fn tier_with(&self, bands: &TierBands) -> Tier {
        if self.disabled {
            return Tier::Disabled;
        }
        bands.tier_for(self.value, self.enabled)
    }

    /// Exports the tier, rejecting values that escaped `[0, 1]`.
    ///
    /// Only reachable when a state was built without the primitives,
    /// e.g. deserialized from untrusted data.
    pub fn checked_tier(&self) -> PriorityResult<Tier> {
        if !(0.0..=1.0).contains(&self.value) {
            return Err(PriorityError::InvalidState { value: self.value });
        }
        Ok(self.tier())
    }

    #[cfg(test)]
    pub(crate) fn with_raw_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(text: &str) -> impl FnOnce() -> String + '_ {
        move || text.to_string()
    }

    fn at(value: f64) -> ConsiderationState {
        ConsiderationState::default().set(value, reason("start"))
    }

    fn disabled_at(value: f64) -> ConsiderationState {
        at(value).never_do(reason("off"))
    }

    #[test]
    fn test_multiply_clamps_at_one() {
        let state = at(0.5).multiply(2.0, reason("x2"));
        assert!((state.value() - 1.0).abs() < 1e-10);

        let state = at(0.8).multiply(2.0, reason("x2"));
        assert!((state.value() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_multiply_halves() {
        let state = at(0.6).multiply(0.5, reason("half"));
        assert!((state.value() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_set_negative_exports_disabled() {
        let state = ConsiderationState::default().set(-0.5, reason("negative"));
        assert!(state.value().abs() < 1e-10);
        assert_eq!(state.tier(), Tier::Disabled);
    }

    #[test]
    fn test_set_above_one_exports_first() {
        let state = ConsiderationState::default().set(1.5, reason("big"));
        assert!((state.value() - 1.0).abs() < 1e-10);
        assert_eq!(state.tier(), Tier::First);
    }

    #[test]
    fn test_disabled_freezes_value() {
        let state = disabled_at(0.5)
            .multiply(2.0, reason("x2"))
            .add(0.3, reason("plus"))
            .set(0.9, reason("set"));
        assert!((state.value() - 0.5).abs() < 1e-10);
        assert_eq!(state.tier(), Tier::Disabled);
        assert_eq!(state.justifications().len(), 2);
    }

    #[test]
    fn test_add_logs_only_on_change() {
        let state = at(1.0).add(0.5, reason("already max"));
        assert_eq!(state.justifications().len(), 1);

        let state = at(0.4).add(0.0, reason("nothing"));
        assert_eq!(state.justifications().len(), 1);

        let state = at(0.4).add(0.1, reason("more"));
        assert_eq!(state.justifications().len(), 2);
        assert!((state.value() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_reason_is_lazy() {
        let state = disabled_at(0.5).add(0.2, || panic!("reason built for a no-op"));
        assert!((state.value() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_conditional_flags_false_are_noops() {
        let state = at(0.4);
        let after = state
            .clone()
            .always_do_if(false, reason("a"))
            .never_do_if(false, reason("n"));
        assert_eq!(after, state);
    }

    #[test]
    fn test_never_do_if_overrides_enabled() {
        let state = at(0.4)
            .always_do(reason("on"))
            .never_do_if(true, reason("off"));
        assert!(state.is_disabled());
        assert!(!state.is_enabled());
        assert_eq!(state.tier(), Tier::Disabled);
    }

    #[test]
    fn test_always_do_reenables_disabled() {
        let state = disabled_at(0.6).always_do(reason("on"));
        assert!(state.is_enabled());
        assert!(!state.is_disabled());
        assert_eq!(state.tier(), Tier::Second);
    }

    #[test]
    fn test_always_do_if_skips_when_enabled() {
        let state = at(0.4)
            .always_do(reason("on"))
            .always_do_if(true, reason("again"));
        assert_eq!(state.justifications().len(), 2);
    }

    #[test]
    fn test_enabled_zero_exports_fourth() {
        let state = ConsiderationState::default().always_do(reason("forced"));
        assert_eq!(state.tier(), Tier::Fourth);
    }

    #[test]
    fn test_from_tier_values() {
        let zero = ConsiderationState::from_tier(0);
        assert!(zero.value().abs() < 1e-10);
        assert!(zero.is_disabled());

        assert!(ConsiderationState::from_tier(1).value() >= 0.8);

        let fourth = ConsiderationState::from_tier(4).value();
        assert!(fourth > 0.1 && fourth < 0.5);

        let second = ConsiderationState::from_tier(2).value();
        let third = ConsiderationState::from_tier(3).value();
        assert!(second > 0.4 && second < 0.9);
        assert!(third > 0.2 && third < 0.9);
        assert!(second > third);
    }

    #[test]
    fn test_from_tier_round_trip() {
        for raw in 0..=4 {
            let state = ConsiderationState::from_tier(raw);
            assert_eq!(i64::from(state.tier().as_u8()), raw);
        }
    }

    #[test]
    fn test_from_tier_clamps() {
        assert_eq!(ConsiderationState::from_tier(-7).tier(), Tier::Disabled);
        assert_eq!(ConsiderationState::from_tier(12).tier(), Tier::Fourth);
    }

    #[test]
    fn test_from_tier_with_custom_bands() {
        let bands = TierBands::default().with_first(0.8);
        let state = ConsiderationState::from_tier_with(1, &bands).unwrap();
        assert!((state.value() - 0.9).abs() < 1e-10);
        assert_eq!(state.tier_with(&bands), Tier::First);

        let bad = TierBands {
            first: 0.55,
            second: 0.5,
            third: 0.15,
        };
        assert!(matches!(
            ConsiderationState::from_tier_with(1, &bad),
            Err(PriorityError::Configuration(_))
        ));
    }

    #[test]
    fn test_non_finite_targets_keep_value() {
        let state = at(0.5);
        let logged = state.justifications().len();

        let state = state
            .add(f64::NAN, reason("bad delta"))
            .multiply(f64::INFINITY, reason("bad factor"))
            .set(f64::NEG_INFINITY, reason("bad value"));
        assert!((state.value() - 0.5).abs() < 1e-10);
        assert_eq!(state.justifications().len(), logged);
        assert_eq!(state.tier(), Tier::Second);
    }

    #[test]
    fn test_checked_tier_rejects_raw_out_of_range() {
        let state = ConsiderationState::default().with_raw_value(1.7);
        assert!(matches!(
            state.checked_tier(),
            Err(PriorityError::InvalidState { .. })
        ));
        assert_eq!(state.tier(), Tier::First);

        let ok = at(0.3);
        assert_eq!(ok.checked_tier(), Ok(Tier::Third));
    }

    #[test]
    fn test_explain_renders_log() {
        let state = at(0.5)
            .add(0.25, reason("skilled"))
            .never_do(reason("on fire"));
        let lines = state.explain();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "set to 0.50: start");
        assert_eq!(lines[1], "+0.25 (0.50 -> 0.75): skilled");
        assert_eq!(lines[2], "never do: on fire");
    }
}
