use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{ExamFilter, UniversityFilter};
use super::exam_finder::StudentProfile;
use super::predictor::AdmissionRequest;
use super::scholarships::StudentCircumstances;
use super::service::RecommendationService;

/// Scholarship match body; `as_of` pins the deadline check to a given day.
#[derive(Debug, Clone, Deserialize)]
pub struct ScholarshipMatchRequest {
    #[serde(flatten)]
    pub student: StudentCircumstances,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Router builder exposing the guidance endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/exams/recommendations", post(recommend_exams_handler))
        .route("/api/v1/exams", get(list_exams_handler))
        .route("/api/v1/exams/:exam_id", get(exam_handler))
        .route("/api/v1/admissions/predictions", post(predict_admission_handler))
        .route("/api/v1/universities", get(list_universities_handler))
        .route("/api/v1/universities/:university_id", get(university_handler))
        .route("/api/v1/scholarships/matches", post(match_scholarships_handler))
        .with_state(service)
}

pub(crate) async fn recommend_exams_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(profile): Json<StudentProfile>,
) -> Response {
    let recommendations = service.recommend_exams(&profile);
    (StatusCode::OK, Json(recommendations)).into_response()
}

pub(crate) async fn list_exams_handler(
    State(service): State<Arc<RecommendationService>>,
    Query(filter): Query<ExamFilter>,
) -> Response {
    let exams = service.list_exams(&filter);
    (StatusCode::OK, Json(json!({ "count": exams.len(), "exams": exams }))).into_response()
}

pub(crate) async fn exam_handler(
    State(service): State<Arc<RecommendationService>>,
    Path(exam_id): Path<String>,
) -> Response {
    match service.exam(&exam_id) {
        Some(exam) => (StatusCode::OK, Json(exam)).into_response(),
        None => not_found("exam", &exam_id),
    }
}

pub(crate) async fn predict_admission_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<AdmissionRequest>,
) -> Response {
    let predictions = service.predict_admission(request);
    (StatusCode::OK, Json(predictions)).into_response()
}

pub(crate) async fn list_universities_handler(
    State(service): State<Arc<RecommendationService>>,
    Query(filter): Query<UniversityFilter>,
) -> Response {
    let universities = service.list_universities(&filter);
    let payload = json!({
        "count": universities.len(),
        "universities": universities,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn university_handler(
    State(service): State<Arc<RecommendationService>>,
    Path(university_id): Path<String>,
) -> Response {
    match service.university(&university_id) {
        Some(university) => (StatusCode::OK, Json(university)).into_response(),
        None => not_found("university", &university_id),
    }
}

pub(crate) async fn match_scholarships_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<ScholarshipMatchRequest>,
) -> Response {
    let today = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let matches = service.match_scholarships(&request.student, today);
    (StatusCode::OK, Json(matches)).into_response()
}

fn not_found(kind: &str, id: &str) -> Response {
    let payload = json!({
        "error": format!("{kind} not found"),
        "id": id,
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}
