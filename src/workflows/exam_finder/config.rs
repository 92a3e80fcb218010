use serde::{Deserialize, Serialize};

/// Scoring constants for the exam finder quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamFinderConfig {
    /// Normalization divisor. Raw scores can exceed it; percentages saturate.
    pub max_score: f32,
    pub match_cap: u8,
    pub recommended_limit: usize,
    pub backup_limit: usize,
    pub max_tags: usize,
}

impl ExamFinderConfig {
    pub fn standard() -> Self {
        Self {
            max_score: 25.0,
            match_cap: 99,
            recommended_limit: 3,
            backup_limit: 7,
            max_tags: 3,
        }
    }
}

impl Default for ExamFinderConfig {
    fn default() -> Self {
        Self::standard()
    }
}
