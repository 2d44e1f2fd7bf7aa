//! Work type strategies.
//!
//! A [`WorkTypeStrategy`] is the ordered pipeline of considerations that
//! scores one work type. Pipelines are plain data composed by a generic
//! runner; the fallback pipeline is just another instance with no key.
//!
//! - [`builtin_strategies`] / [`default_strategy`]: the standard pipelines
//! - [`StrategyRunner`]: evaluates a pipeline for one actor, or all work
//!   types of a registry at once

mod config;
mod pipelines;
mod runner;
mod types;

pub use config::RunnerConfig;
pub use pipelines::{builtin_strategies, default_strategy, work_types};
pub use runner::{Evaluation, StrategyRunner};
pub use types::WorkTypeStrategy;
