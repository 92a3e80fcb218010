//! Exam finder quiz: shortlist exams by stream, score them against the
//! student's answers, and split the ranking into recommended and backup tiers.

mod config;
mod filter;
mod policy;
pub mod profile;
mod rules;

pub use config::ExamFinderConfig;
pub use profile::{Budget, Comfort, LocationPreference, StudentProfile, Stream};
pub use rules::ScoreFactor;

use serde::Serialize;

use crate::workflows::catalog::{ExamCatalog, ExamCategory, ExamRecord};

const GENERIC_REASON: &str = "Good fit for your profile";

/// Stateless scorer; identical inputs always produce identical rankings.
#[derive(Debug, Clone, Default)]
pub struct ExamFinder {
    config: ExamFinderConfig,
}

impl ExamFinder {
    pub fn new(config: ExamFinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExamFinderConfig {
        &self.config
    }

    pub fn recommend(
        &self,
        exams: &[ExamRecord],
        profile: &StudentProfile,
    ) -> ExamRecommendations {
        let shortlist = filter::shortlist(exams, profile.stream);
        let considered = shortlist.exams.len();

        let mut ranked: Vec<ExamMatch> = shortlist
            .exams
            .into_iter()
            .map(|exam| self.score(exam, profile))
            .collect();
        // Stable: equal scores keep catalog order.
        ranked.sort_by(|left, right| right.score.cmp(&left.score));

        let (recommended, backups) = policy::tier(ranked, profile.wants_backup, &self.config);

        ExamRecommendations {
            recommended,
            backups,
            is_fallback: shortlist.is_fallback,
            considered,
        }
    }

    fn score(&self, exam: &ExamRecord, profile: &StudentProfile) -> ExamMatch {
        let (components, score) = rules::score_exam(exam, profile);

        let match_reason = components
            .iter()
            .find_map(|component| component.reason.clone())
            .unwrap_or_else(|| GENERIC_REASON.to_string());
        let tags = components
            .iter()
            .filter_map(|component| component.tag)
            .take(self.config.max_tags)
            .collect();

        ExamMatch {
            exam_id: exam.id.clone(),
            name: exam.name.clone(),
            category: exam.category,
            score,
            match_percentage: policy::match_percentage(score, &self.config),
            match_reason,
            tags,
            components,
        }
    }
}

/// Score the catalog with the standard weights.
pub fn score_exams(catalog: &ExamCatalog, profile: &StudentProfile) -> ExamRecommendations {
    ExamFinder::default().recommend(catalog.exams(), profile)
}

/// Discrete contribution to an exam's score, kept for transparent explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamMatch {
    pub exam_id: String,
    pub name: String,
    pub category: ExamCategory,
    pub score: i32,
    pub match_percentage: u8,
    pub match_reason: String,
    pub tags: Vec<&'static str>,
    pub components: Vec<ScoreComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamRecommendations {
    pub recommended: Vec<ExamMatch>,
    pub backups: Vec<ExamMatch>,
    /// Set when the stream matched nothing and the engineering pool was used.
    pub is_fallback: bool,
    pub considered: usize,
}

impl ExamRecommendations {
    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.backups.is_empty()
    }
}
