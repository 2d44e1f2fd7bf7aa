//! Strategy registry.
//!
//! Maps work type keys to their [`WorkTypeStrategy`], with a designated
//! default for everything else. Two forms are provided:
//!
//! - [`StrategyRegistry`]: built once from the full set of definitions and
//!   immutable afterwards. Preferred.
//! - [`RegistryCell`]: an uninitialized/ready gate for hosts whose
//!   definitions only become available after the first lookups.
//!
//! Registration of a strategy without a valid, defined key is rejected
//! (logged and skipped by the bulk builders) rather than failing the build.
//!
//! [`WorkTypeStrategy`]: crate::strategy::WorkTypeStrategy

mod cell;
mod store;

pub use cell::RegistryCell;
pub use store::{RegistryBuilder, StrategyRegistry};
