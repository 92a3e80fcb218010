use serde::{Deserialize, Serialize};

/// Thresholds for the admission predictor, as ratios of rank to adjusted cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Used when a university has no recorded cutoff.
    pub default_cutoff: u32,
    pub very_high_ratio: f64,
    pub high_ratio: f64,
    pub moderate_ratio: f64,
    /// Ranks beyond `adjusted * reach_ratio` are dropped from results.
    pub reach_ratio: f64,
}

impl PredictorConfig {
    pub fn standard() -> Self {
        Self {
            default_cutoff: 40_000,
            very_high_ratio: 0.7,
            high_ratio: 1.0,
            moderate_ratio: 1.2,
            reach_ratio: 1.5,
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
