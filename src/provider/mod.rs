//! Read-only game state provider.
//!
//! Considerations learn about the host game exclusively through the
//! [`GameStateProvider`] trait: colony alerts, colony metrics, per-rule
//! settings weights, colony policy and actor attributes. Keeping the seam
//! narrow lets tests inject scenarios through [`GameStateSnapshot`] and
//! keeps the scoring core free of host dependencies.

mod snapshot;
mod types;

pub use snapshot::{GameStateSnapshot, SnapshotBuilder};
pub use types::{
    ActorAttributes, ActorId, Alert, GameStateProvider, Metric, Passion, Skill, WorkTypeId,
};
