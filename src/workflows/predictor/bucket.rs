use serde::Serialize;

use super::config::PredictorConfig;

/// Admission likelihood band for a rank against an adjusted cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionChance {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl AdmissionChance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryHigh => "green",
            Self::High => "blue",
            Self::Moderate => "yellow",
            Self::Low => "red",
        }
    }

    pub(crate) fn classify(rank: u32, adjusted_cutoff: f64, config: &PredictorConfig) -> Self {
        let rank = f64::from(rank);
        if rank <= adjusted_cutoff * config.very_high_ratio {
            Self::VeryHigh
        } else if rank <= adjusted_cutoff * config.high_ratio {
            Self::High
        } else if rank <= adjusted_cutoff * config.moderate_ratio {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}
