//! Scholarship eligibility matching over the bundled scholarship catalog.

mod eligibility;

pub use eligibility::{Ineligibility, StudentCircumstances};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::workflows::catalog::{Scholarship, ScholarshipCatalog};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScholarshipMatch {
    pub scholarship_id: String,
    pub name: String,
    pub provider: String,
    pub amount: String,
    pub deadline: NaiveDate,
    pub days_left: i64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScholarshipMatches {
    pub matches: Vec<ScholarshipMatch>,
    /// Scholarships whose deadline passed before `today`.
    pub expired: usize,
    pub ineligible: usize,
}

/// Open scholarships the student qualifies for, soonest deadline first.
/// Same-day deadlines list the larger parsed amount first; unparseable
/// amounts sort last.
pub fn match_scholarships(
    catalog: &ScholarshipCatalog,
    student: &StudentCircumstances,
    today: NaiveDate,
) -> ScholarshipMatches {
    let mut expired = 0;
    let mut ineligible = 0;
    let mut eligible: Vec<(&Scholarship, Vec<String>)> = Vec::new();

    for scholarship in catalog.scholarships() {
        if scholarship.deadline < today {
            expired += 1;
            continue;
        }

        match eligibility::check(&scholarship.eligibility, student) {
            Ok(reasons) => eligible.push((scholarship, reasons)),
            Err(reason) => {
                trace!(scholarship = %scholarship.id, %reason, "scholarship skipped");
                ineligible += 1;
            }
        }
    }

    eligible.sort_by(|(left, _), (right, _)| {
        left.deadline
            .cmp(&right.deadline)
            .then_with(|| right.amount_value().cmp(&left.amount_value()))
    });

    let matches = eligible
        .into_iter()
        .map(|(scholarship, reasons)| ScholarshipMatch {
            scholarship_id: scholarship.id.clone(),
            name: scholarship.name.clone(),
            provider: scholarship.provider.clone(),
            amount: scholarship.amount.clone(),
            deadline: scholarship.deadline,
            days_left: (scholarship.deadline - today).num_days(),
            reasons,
        })
        .collect();

    ScholarshipMatches {
        matches,
        expired,
        ineligible,
    }
}
