//! Rank-based admission predictor.
//!
//! Each university's latest recorded cutoff is scaled by category, branch and
//! gender multipliers, then the student's rank is bucketed against it.

mod bucket;
mod config;
mod model;
pub mod query;

pub use bucket::AdmissionChance;
pub use config::PredictorConfig;
pub use query::{AdmissionRequest, Branch, Gender, RankInput, RankQuery};

use serde::Serialize;

use crate::workflows::catalog::{
    NaacGrade, Region, UniversityCatalog, UniversityKind, UniversityRecord,
};

#[derive(Debug, Clone, Default)]
pub struct AdmissionPredictor {
    config: PredictorConfig,
}

impl AdmissionPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn predict(
        &self,
        universities: &[UniversityRecord],
        query: &RankQuery,
    ) -> AdmissionPredictions {
        let state_filter = model::exam_state(&query.exam_name);
        let candidates: Vec<&UniversityRecord> = universities
            .iter()
            .filter(|university| state_filter.map_or(true, |state| university.state == state))
            .collect();
        let considered = candidates.len();

        let matches: Vec<AdmissionMatch> = candidates
            .into_iter()
            .filter_map(|university| self.assess(university, query))
            .collect();
        let excluded = considered - matches.len();

        // Partition only: the rest keeps catalog order.
        let (mut ordered, rest): (Vec<_>, Vec<_>) = matches
            .into_iter()
            .partition(|candidate| candidate.chance == AdmissionChance::VeryHigh);
        ordered.extend(rest);

        AdmissionPredictions {
            computed: true,
            state_filter,
            considered,
            excluded,
            matches: ordered,
        }
    }

    /// Lenient entry point for form input: a missing, zero or unparseable rank
    /// yields an empty, not-computed result instead of an error.
    pub fn predict_request(
        &self,
        universities: &[UniversityRecord],
        request: AdmissionRequest,
    ) -> AdmissionPredictions {
        match request.into_query() {
            Some(query) => self.predict(universities, &query),
            None => AdmissionPredictions::not_computed(),
        }
    }

    fn assess(
        &self,
        university: &UniversityRecord,
        query: &RankQuery,
    ) -> Option<AdmissionMatch> {
        let base_cutoff = university
            .latest_cutoff()
            .unwrap_or(self.config.default_cutoff);
        let adjusted = model::adjusted_cutoff(base_cutoff, query);

        if f64::from(query.rank) > adjusted * self.config.reach_ratio {
            return None;
        }

        let chance = AdmissionChance::classify(query.rank, adjusted, &self.config);

        Some(AdmissionMatch {
            university_id: university.id.clone(),
            name: university.name.clone(),
            state: university.state,
            kind: university.kind,
            naac_grade: university.naac_grade,
            base_cutoff,
            adjusted_cutoff: model::reported_cutoff(adjusted),
            chance,
            chance_label: chance.label(),
            color: chance.color(),
            tuition: university.tuition_amount(),
        })
    }
}

pub fn predict_admission(catalog: &UniversityCatalog, query: &RankQuery) -> AdmissionPredictions {
    AdmissionPredictor::default().predict(catalog.universities(), query)
}

pub fn predict_admission_raw(
    catalog: &UniversityCatalog,
    request: AdmissionRequest,
) -> AdmissionPredictions {
    AdmissionPredictor::default().predict_request(catalog.universities(), request)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionMatch {
    pub university_id: String,
    pub name: String,
    pub state: Region,
    pub kind: UniversityKind,
    pub naac_grade: NaacGrade,
    pub base_cutoff: u32,
    pub adjusted_cutoff: u64,
    pub chance: AdmissionChance,
    pub chance_label: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuition: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionPredictions {
    /// False when the request carried no usable rank.
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_filter: Option<Region>,
    pub considered: usize,
    /// Universities dropped as out of reach.
    pub excluded: usize,
    pub matches: Vec<AdmissionMatch>,
}

impl AdmissionPredictions {
    pub fn not_computed() -> Self {
        Self {
            computed: false,
            state_filter: None,
            considered: 0,
            excluded: 0,
            matches: Vec::new(),
        }
    }
}
