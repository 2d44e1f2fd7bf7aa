//! Library of considerations.
//!
//! A consideration is one named, independent scoring rule. Pipelines refer
//! to them through the [`Consideration`] descriptor (rule plus bound
//! parameters), which [`Consideration::apply`] replays against an
//! [`EvalContext`]. The rule bodies live in [`library`] and can also be
//! called directly.
//!
//! # Composition
//!
//! Rules compose only through the shared [`ConsiderationState`]:
//! `multiply`/`add` act on whatever value precedes them, and a `never_do`
//! freezes every later magnitude change. Placement in a pipeline is
//! therefore part of a rule's meaning.
//!
//! [`ConsiderationState`]: crate::state::ConsiderationState

pub mod library;
mod types;

pub use types::{Consideration, ConsiderationId, EvalContext};
