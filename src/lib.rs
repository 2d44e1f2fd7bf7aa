//! Consideration-based work priority scoring.
//!
//! Scores how attractive one work type is to one colonist at one instant,
//! and exports the score as the host game's discrete priority tier:
//!
//! - **State**: [`ConsiderationState`](state::ConsiderationState), a score
//!   clamped to `[0, 1]` with always/never override flags and a
//!   justification log, convertible to and from [`Tier`](state::Tier).
//! - **Provider**: the read-only [`GameStateProvider`](provider::GameStateProvider)
//!   seam through which considerations see alerts, metrics, settings
//!   weights and actor attributes.
//! - **Considerations**: independent scoring rules, described as
//!   [`Consideration`](considerations::Consideration) steps.
//! - **Strategies**: ordered pipelines of considerations, one per work type
//!   plus a fallback.
//! - **Registry**: resolves a work type key to its strategy.
//!
//! # Example
//!
//! ```
//! use work_priority::provider::{ActorAttributes, ActorId, Alert, GameStateSnapshot, WorkTypeId};
//! use work_priority::registry::StrategyRegistry;
//! use work_priority::state::Tier;
//! use work_priority::strategy::work_types;
//!
//! let registry = StrategyRegistry::standard(
//!     work_types::ALL.iter().map(|k| WorkTypeId::new(*k)),
//! );
//! let snapshot = GameStateSnapshot::builder()
//!     .with_alert(Alert::HomeOnFire)
//!     .with_actor(ActorAttributes::new("alice"))
//!     .build();
//!
//! let actor = ActorId::new("alice");
//! let work = WorkTypeId::new(work_types::FIREFIGHTER);
//! let state = registry.evaluate(Some(&actor), Some(&work), &snapshot);
//!
//! assert_eq!(state.tier(), Tier::First);
//! for line in state.explain() {
//!     println!("{line}");
//! }
//! ```
//!
//! # Architecture
//!
//! Evaluation is synchronous and holds no shared mutable state. Strategies,
//! registries and snapshots are immutable once built and may be shared
//! across threads; each evaluation owns its own state.

pub mod considerations;
pub mod error;
pub mod provider;
pub mod registry;
pub mod state;
pub mod strategy;

pub use error::{PriorityError, PriorityResult};
