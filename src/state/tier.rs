//! Discrete host priority tiers and the bands that map scores onto them.

use std::fmt;

/// Discrete priority consumed by the host scheduler.
///
/// `Disabled` (0) means "never perform"; `First` (1) is the most preferred
/// and `Fourth` (4) the least preferred tier that is still performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Disabled = 0,
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl Tier {
    /// All tiers in numeric order.
    pub const ALL: [Tier; 5] = [
        Tier::Disabled,
        Tier::First,
        Tier::Second,
        Tier::Third,
        Tier::Fourth,
    ];

    /// Converts a raw host value, clamping out-of-range input to the
    /// nearest valid tier.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            i64::MIN..=0 => Tier::Disabled,
            1 => Tier::First,
            2 => Tier::Second,
            3 => Tier::Third,
            _ => Tier::Fourth,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Score thresholds separating tiers.
///
/// A score at or above `first` maps to tier 1, at or above `second` to
/// tier 2, at or above `third` to tier 3, and anything lower but positive
/// to tier 4. A zero score exports as disabled unless the state is
/// force-enabled.
///
/// # Examples
///
/// ```
/// use work_priority::state::{Tier, TierBands};
///
/// let bands = TierBands::default().with_first(0.8);
/// assert!(bands.validate().is_ok());
/// assert_eq!(bands.tier_for(0.79, false), Tier::Second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBands {
    /// Lower bound of tier 1.
    pub first: f64,

    /// Lower bound of tier 2.
    pub second: f64,

    /// Lower bound of tier 3.
    pub third: f64,
}

impl Default for TierBands {
    fn default() -> Self {
        Self {
            first: 0.75,
            second: 0.5,
            third: 0.25,
        }
    }
}

impl TierBands {
    pub fn with_first(mut self, threshold: f64) -> Self {
        self.first = threshold;
        self
    }

    pub fn with_second(mut self, threshold: f64) -> Self {
        self.second = threshold;
        self
    }

    pub fn with_third(mut self, threshold: f64) -> Self {
        self.third = threshold;
        self
    }

    /// Validates the thresholds.
    ///
    /// Besides ordering, the band midpoints used by `from_tier` must stay
    /// inside the seeding ranges: tier 1 at least 0.8, tier 2 in
    /// `(0.4, 0.9)`, tier 4 in `(0.1, 0.5)`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, t) in [
            ("first", self.first),
            ("second", self.second),
            ("third", self.third),
        ] {
            if !t.is_finite() || t <= 0.0 || t >= 1.0 {
                return Err(format!("{name} threshold must be in (0, 1), got {t}"));
            }
        }
        if !(self.third < self.second && self.second < self.first) {
            return Err(format!(
                "thresholds must be strictly decreasing, got {} / {} / {}",
                self.first, self.second, self.third
            ));
        }
        // Seeded scores must stay recognizable as their tier.
        let first = self.representative(Tier::First);
        if first < 0.8 {
            return Err(format!("tier 1 representative {first} must be at least 0.8"));
        }
        let second = self.representative(Tier::Second);
        if !(second > 0.4 && second < 0.9) {
            return Err(format!("tier 2 representative {second} must be in (0.4, 0.9)"));
        }
        let fourth = self.representative(Tier::Fourth);
        if !(fourth > 0.1 && fourth < 0.5) {
            return Err(format!("tier 4 representative {fourth} must be in (0.1, 0.5)"));
        }
        Ok(())
    }

    /// Maps a score onto a tier. The score is clamped to `[0, 1]` first.
    pub fn tier_for(&self, value: f64, enabled: bool) -> Tier {
        let value = clamp01(value);
        if value >= self.first {
            Tier::First
        } else if value >= self.second {
            Tier::Second
        } else if value >= self.third {
            Tier::Third
        } else if value > 0.0 || enabled {
            Tier::Fourth
        } else {
            Tier::Disabled
        }
    }

    /// Returns the score used to represent a tier: the middle of its band.
    pub fn representative(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Disabled => 0.0,
            Tier::First => (self.first + 1.0) / 2.0,
            Tier::Second => (self.second + self.first) / 2.0,
            Tier::Third => (self.third + self.second) / 2.0,
            Tier::Fourth => self.third / 2.0,
        }
    }
}

/// Clamps to `[0, 1]`. NaN collapses to `0.0`.
pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
