use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::catalog::{CatalogSet, ExamFilter, ExamRecord, UniversityFilter, UniversityRecord};
use super::exam_finder::{ExamFinder, ExamFinderConfig, ExamRecommendations, StudentProfile};
use super::predictor::{
    AdmissionPredictions, AdmissionPredictor, AdmissionRequest, PredictorConfig,
};
use super::scholarships::{self, ScholarshipMatches, StudentCircumstances};

/// Service composing the shared catalogs with the exam finder, admission
/// predictor and scholarship matcher. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalogs: Arc<CatalogSet>,
    exam_finder: ExamFinder,
    predictor: AdmissionPredictor,
}

impl RecommendationService {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self::with_config(
            catalogs,
            ExamFinderConfig::standard(),
            PredictorConfig::standard(),
        )
    }

    pub fn with_config(
        catalogs: Arc<CatalogSet>,
        exam_finder: ExamFinderConfig,
        predictor: PredictorConfig,
    ) -> Self {
        Self {
            catalogs,
            exam_finder: ExamFinder::new(exam_finder),
            predictor: AdmissionPredictor::new(predictor),
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(CatalogSet::standard()))
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn recommend_exams(&self, profile: &StudentProfile) -> ExamRecommendations {
        let result = self
            .exam_finder
            .recommend(self.catalogs.exams.exams(), profile);
        debug!(
            stream = ?profile.stream,
            considered = result.considered,
            recommended = result.recommended.len(),
            backups = result.backups.len(),
            fallback = result.is_fallback,
            "exam recommendations scored"
        );
        result
    }

    pub fn list_exams(&self, filter: &ExamFilter) -> Vec<ExamRecord> {
        self.catalogs
            .exams
            .filter(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn exam(&self, exam_id: &str) -> Option<&ExamRecord> {
        self.catalogs.exams.get(exam_id)
    }

    pub fn predict_admission(&self, request: AdmissionRequest) -> AdmissionPredictions {
        let result = self
            .predictor
            .predict_request(self.catalogs.universities.universities(), request);
        debug!(
            computed = result.computed,
            state = ?result.state_filter,
            considered = result.considered,
            excluded = result.excluded,
            matches = result.matches.len(),
            "admission chances predicted"
        );
        result
    }

    pub fn list_universities(&self, filter: &UniversityFilter) -> Vec<UniversityRecord> {
        self.catalogs
            .universities
            .filter(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn university(&self, university_id: &str) -> Option<&UniversityRecord> {
        self.catalogs.universities.get(university_id)
    }

    pub fn match_scholarships(
        &self,
        student: &StudentCircumstances,
        today: NaiveDate,
    ) -> ScholarshipMatches {
        let result = scholarships::match_scholarships(&self.catalogs.scholarships, student, today);
        debug!(
            %today,
            matches = result.matches.len(),
            expired = result.expired,
            ineligible = result.ineligible,
            "scholarships matched"
        );
        result
    }
}
