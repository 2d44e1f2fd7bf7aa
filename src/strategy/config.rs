//! Runner configuration.

use crate::state::TierBands;

/// Configuration for batch evaluation.
///
/// # Examples
///
/// ```
/// use work_priority::state::TierBands;
/// use work_priority::strategy::RunnerConfig;
///
/// let config = RunnerConfig::default()
///     .with_bands(TierBands::default().with_first(0.8))
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunnerConfig {
    /// Bands used to export tiers.
    pub bands: TierBands,

    /// Whether to evaluate work types in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            bands: TierBands::default(),
            parallel: false,
        }
    }
}

impl RunnerConfig {
    pub fn with_bands(mut self, bands: TierBands) -> Self {
        self.bands = bands;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.bands.validate()
    }
}
