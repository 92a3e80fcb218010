use serde::{Deserialize, Serialize};

use crate::workflows::catalog::{CourseLevel, Region, ReservationCategory, ScholarshipEligibility};

/// What the student tells us about themselves. Unknown values fail any clause
/// that constrains them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentCircumstances {
    #[serde(default)]
    pub family_income: Option<u64>,
    pub category: ReservationCategory,
    #[serde(default)]
    pub home_state: Option<Region>,
    #[serde(default)]
    pub percentage: Option<f32>,
    #[serde(default)]
    pub level: Option<CourseLevel>,
}

/// First clause a student fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Ineligibility {
    #[error("family income above the {limit} limit")]
    IncomeAboveLimit { limit: u64 },
    #[error("category {} not covered", .0.label())]
    Category(ReservationCategory),
    #[error("state of residence not covered")]
    State,
    #[error("marks below the required {required}%")]
    MarksBelowMinimum { required: f32 },
    #[error("course level not covered")]
    Level,
}

/// Checks every clause; on success returns one reason per constrained clause.
pub(crate) fn check(
    eligibility: &ScholarshipEligibility,
    student: &StudentCircumstances,
) -> Result<Vec<String>, Ineligibility> {
    let mut reasons = Vec::new();

    if let Some(limit) = eligibility.max_family_income {
        match student.family_income {
            Some(income) if income <= limit => {
                reasons.push(format!("Family income within ₹{} limit", group_inr(limit)));
            }
            _ => return Err(Ineligibility::IncomeAboveLimit { limit }),
        }
    }

    if !eligibility.categories.is_empty() {
        if !eligibility.categories.contains(&student.category) {
            return Err(Ineligibility::Category(student.category));
        }
        reasons.push(format!("Open to {} students", student.category.label()));
    }

    if !eligibility.states.is_empty() {
        match student.home_state {
            Some(state) if eligibility.states.contains(&state) => {
                reasons.push(format!("For {} residents", state.label()));
            }
            _ => return Err(Ineligibility::State),
        }
    }

    if let Some(required) = eligibility.min_percentage {
        match student.percentage {
            Some(marks) if marks >= required => {
                reasons.push(format!("Meets minimum {required}% marks"));
            }
            _ => return Err(Ineligibility::MarksBelowMinimum { required }),
        }
    }

    if !eligibility.levels.is_empty() {
        match student.level {
            Some(level) if eligibility.levels.contains(&level) => {
                reasons.push(format!("Offered for {} study", level.label()));
            }
            _ => return Err(Ineligibility::Level),
        }
    }

    if reasons.is_empty() {
        reasons.push("Open to all students".to_string());
    }

    Ok(reasons)
}

/// Indian digit grouping: 250000 -> "2,50,000".
fn group_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
