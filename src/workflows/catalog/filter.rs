use serde::{Deserialize, Serialize};

use super::domain::{
    ExamCategory, ExamLevel, ExamRecord, NaacGrade, Region, UniversityKind, UniversityRecord,
};
use super::normalizer::search_key;

/// Directory filter for the university listing. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversityFilter {
    pub state: Option<Region>,
    pub kind: Option<UniversityKind>,
    pub min_naac: Option<NaacGrade>,
    pub max_tuition: Option<u64>,
    pub search: Option<String>,
}

impl UniversityFilter {
    pub fn matches(&self, university: &UniversityRecord) -> bool {
        if self.state.is_some_and(|state| state != university.state) {
            return false;
        }
        if self.kind.is_some_and(|kind| kind != university.kind) {
            return false;
        }
        if self
            .min_naac
            .is_some_and(|grade| university.naac_grade < grade)
        {
            return false;
        }
        if let Some(limit) = self.max_tuition {
            // Unpriced entries cannot be shown to fit a budget.
            match university.tuition_amount() {
                Some(amount) if amount <= limit => {}
                _ => return false,
            }
        }

        matches_search(
            self.search.as_deref(),
            &[university.id.as_str(), university.name.as_str()],
        )
    }
}

/// Directory filter for the exam listing. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamFilter {
    pub category: Option<ExamCategory>,
    pub level: Option<ExamLevel>,
    pub search: Option<String>,
}

impl ExamFilter {
    pub fn matches(&self, exam: &ExamRecord) -> bool {
        if self.category.is_some_and(|category| category != exam.category) {
            return false;
        }
        if self.level.is_some_and(|level| level != exam.level) {
            return false;
        }

        let mut fields = vec![exam.id.as_str(), exam.name.as_str()];
        fields.extend(exam.courses.iter().map(String::as_str));
        matches_search(self.search.as_deref(), &fields)
    }
}

fn matches_search(search: Option<&str>, fields: &[&str]) -> bool {
    let needle = match search.map(search_key) {
        Some(needle) if !needle.is_empty() => needle,
        _ => return true,
    };

    fields
        .iter()
        .any(|field| search_key(field).contains(&needle))
}
