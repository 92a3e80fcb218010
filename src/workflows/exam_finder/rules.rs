use serde::Serialize;

use crate::workflows::catalog::{Difficulty, ExamCategory, ExamLevel, ExamRecord};

use super::profile::{Budget, Comfort, StudentProfile};
use super::ScoreComponent;

pub(crate) const TAG_HOME_STATE: &str = "Home State";
pub(crate) const TAG_TOP_TIER: &str = "Top Tier";
pub(crate) const TAG_BALANCED: &str = "Balanced";
pub(crate) const TAG_SAFE_BET: &str = "Safe Bet";
pub(crate) const TAG_EASY_ENTRY: &str = "Easy Entry";

/// Rule family that produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    RegionalAffinity,
    DifficultyFit,
    BudgetFit,
    RegionalExam,
}

/// Apply the weighted rules in their fixed order: region, difficulty, budget,
/// regional exam bonus.
pub(crate) fn score_exam(
    exam: &ExamRecord,
    profile: &StudentProfile,
) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::with_capacity(4);

    if let Some(component) = regional_affinity(exam, profile) {
        components.push(component);
    }
    components.push(difficulty_fit(exam.difficulty, profile.comfort));
    components.push(budget_fit(exam.category, profile.budget));

    let id = exam.id.to_ascii_lowercase();
    if id.contains("eamcet") || id.contains("eapcet") {
        components.push(ScoreComponent {
            factor: ScoreFactor::RegionalExam,
            points: 3,
            reason: None,
            tag: None,
        });
    }

    let total = components
        .iter()
        .map(|component| i32::from(component.points))
        .sum();
    (components, total)
}

fn regional_affinity(exam: &ExamRecord, profile: &StudentProfile) -> Option<ScoreComponent> {
    let component = |points: i16, tag: Option<&'static str>| ScoreComponent {
        factor: ScoreFactor::RegionalAffinity,
        points,
        reason: None,
        tag,
    };

    let Some(region) = profile.location.region() else {
        return Some(component(5, None));
    };

    if exam.home_region == Some(region) {
        Some(component(8, Some(TAG_HOME_STATE)))
    } else if exam.level == ExamLevel::National {
        Some(component(5, None))
    } else if exam.home_region == Some(region.other()) {
        Some(component(-3, None))
    } else {
        None
    }
}

fn difficulty_fit(difficulty: Difficulty, comfort: Comfort) -> ScoreComponent {
    let (points, reason, tag) = match (comfort, difficulty) {
        (Comfort::Competitive, Difficulty::Hard) => {
            (7, "Matches your competitive ambition", TAG_TOP_TIER)
        }
        (Comfort::Competitive, Difficulty::Medium) => {
            (4, "A solid challenge that keeps you sharp", TAG_BALANCED)
        }
        (Comfort::Competitive, Difficulty::Easy) => {
            (-2, "May not stretch your competitive ambition", TAG_EASY_ENTRY)
        }
        (Comfort::Moderate, Difficulty::Hard) => {
            (3, "A stretch goal worth attempting", TAG_TOP_TIER)
        }
        (Comfort::Moderate, Difficulty::Medium) => (
            7,
            "Perfect difficulty balance for your preparation",
            TAG_BALANCED,
        ),
        (Comfort::Moderate, Difficulty::Easy) => {
            (5, "Comfortable entry with strong odds", TAG_SAFE_BET)
        }
        (Comfort::Easy, Difficulty::Hard) => {
            (-2, "Much tougher than your preferred pace", TAG_TOP_TIER)
        }
        (Comfort::Easy, Difficulty::Medium) => {
            (3, "A manageable step up from your comfort zone", TAG_BALANCED)
        }
        (Comfort::Easy, Difficulty::Easy) => {
            (7, "Straightforward entry that suits your pace", TAG_EASY_ENTRY)
        }
    };

    ScoreComponent {
        factor: ScoreFactor::DifficultyFit,
        points,
        reason: Some(reason.to_string()),
        tag: Some(tag),
    }
}

fn budget_fit(category: ExamCategory, budget: Budget) -> ScoreComponent {
    let points = match (category, budget) {
        (ExamCategory::Government, Budget::Low) => 5,
        (ExamCategory::Government, Budget::Medium) => 4,
        (ExamCategory::Government, Budget::High) => 2,
        (ExamCategory::PrivateEngineering, Budget::Low) => 1,
        (ExamCategory::PrivateEngineering, Budget::Medium) => 4,
        (ExamCategory::PrivateEngineering, Budget::High) => 5,
        (ExamCategory::Management | ExamCategory::Design, Budget::Low) => 1,
        (ExamCategory::Management | ExamCategory::Design, Budget::Medium) => 3,
        (ExamCategory::Management | ExamCategory::Design, Budget::High) => 4,
        (ExamCategory::Global, Budget::Low | Budget::Medium) => 1,
        (ExamCategory::Global, Budget::High) => 5,
        (ExamCategory::SkillBased, Budget::Low) => 4,
        (ExamCategory::SkillBased, Budget::Medium) => 3,
        (ExamCategory::SkillBased, Budget::High) => 1,
    };

    let reason = (points >= 4).then(|| "Fees fit your budget".to_string());

    ScoreComponent {
        factor: ScoreFactor::BudgetFit,
        points,
        reason,
        tag: None,
    }
}
