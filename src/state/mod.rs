//! Scoring state and tier conversion.
//!
//! [`ConsiderationState`] is a bounded score in `[0, 1]` with two override
//! flags and an append-only justification log. It converts to and from the
//! host's discrete [`Tier`] scale through [`TierBands`]; for every valid tier
//! `t`, `from_tier(t).tier() == t`.

mod tier;
mod types;

pub(crate) use tier::clamp01;
pub use tier::{Tier, TierBands};
pub use types::{Adjustment, ConsiderationState, Justification};
