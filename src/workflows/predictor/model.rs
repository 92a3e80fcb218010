use crate::workflows::catalog::{Region, ReservationCategory};

use super::query::{Branch, Gender, RankQuery};

/// Higher multipliers mean a laxer effective cutoff for that group.
pub(crate) fn category_multiplier(category: ReservationCategory) -> f64 {
    match category {
        ReservationCategory::Oc => 1.0,
        ReservationCategory::Ews => 1.15,
        ReservationCategory::Bc => 1.5,
        ReservationCategory::Sc => 3.2,
        ReservationCategory::St => 3.5,
    }
}

pub(crate) fn branch_multiplier(branch: Option<Branch>) -> f64 {
    match branch {
        None | Some(Branch::Cse) => 1.0,
        Some(Branch::It) => 1.1,
        Some(Branch::Ece) => 1.3,
        Some(Branch::Eee) => 1.8,
        Some(Branch::Chemical) => 2.2,
        Some(Branch::Mechanical) => 2.5,
        Some(Branch::Civil) => 3.0,
    }
}

pub(crate) fn gender_multiplier(gender: Option<Gender>) -> f64 {
    match gender {
        None | Some(Gender::Male) => 1.0,
        Some(Gender::Female) => 1.1,
    }
}

/// Recorded cutoff scaled for the query's category, branch and gender.
pub(crate) fn adjusted_cutoff(base_cutoff: u32, query: &RankQuery) -> f64 {
    f64::from(base_cutoff)
        * category_multiplier(query.category)
        * branch_multiplier(query.branch)
        * gender_multiplier(query.gender)
}

/// Whole-number cutoff for reporting. Multipliers top out near 12x, so any
/// `u32` base scaled by them fits in a `u64` without saturating.
pub(crate) fn reported_cutoff(adjusted: f64) -> u64 {
    adjusted.round().max(0.0) as u64
}

/// State implied by the exam name ("TS EAMCET", "AP-EAPCET", "TSEAMCET").
pub(crate) fn exam_state(exam_name: &str) -> Option<Region> {
    exam_name
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .find_map(|token| {
            let token = token.to_ascii_uppercase();
            match token.as_str() {
                "TS" | "TG" | "TELANGANA" => Some(Region::Telangana),
                "AP" | "ANDHRA" => Some(Region::AndhraPradesh),
                _ if token.starts_with("TSE") => Some(Region::Telangana),
                _ if token.starts_with("APE") => Some(Region::AndhraPradesh),
                _ => None,
            }
        })
}
