use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::catalog::{
    CatalogSet, CourseLevel, CutoffEntry, Difficulty, ExamCategory, ExamLevel, ExamRecord,
    NaacGrade, Region, ReservationCategory, UniversityKind, UniversityRecord,
};
use crate::workflows::exam_finder::{Budget, Comfort, LocationPreference, StudentProfile, Stream};
use crate::workflows::scholarships::StudentCircumstances;
use crate::workflows::{recommendation_router, RecommendationService};

pub(super) fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Telangana engineering exam recorded as private engineering, medium difficulty.
pub(super) fn home_state_exam() -> ExamRecord {
    ExamRecord::new(
        "ts-eamcet",
        "TS EAMCET",
        ExamCategory::PrivateEngineering,
        ExamLevel::State,
        Difficulty::Medium,
        list(&["B.Tech"]),
        list(&["Osmania University, Hyderabad"]),
    )
}

pub(super) fn exam(
    id: &str,
    category: ExamCategory,
    level: ExamLevel,
    difficulty: Difficulty,
    courses: &[&str],
) -> ExamRecord {
    ExamRecord::new(
        id,
        id.to_uppercase(),
        category,
        level,
        difficulty,
        list(courses),
        Vec::new(),
    )
}

pub(super) fn profile(
    stream: Stream,
    comfort: Comfort,
    budget: Budget,
    location: LocationPreference,
    wants_backup: bool,
) -> StudentProfile {
    StudentProfile {
        stream,
        comfort,
        budget,
        location,
        wants_backup,
    }
}

pub(super) fn telangana_engineer() -> StudentProfile {
    profile(
        Stream::Engineering,
        Comfort::Moderate,
        Budget::Medium,
        LocationPreference::Telangana,
        false,
    )
}

/// Every combination of quiz answers.
pub(super) fn all_profiles() -> Vec<StudentProfile> {
    let streams = [
        Stream::Engineering,
        Stream::Medical,
        Stream::Management,
        Stream::Design,
        Stream::Global,
        Stream::Skills,
    ];
    let comforts = [Comfort::Competitive, Comfort::Moderate, Comfort::Easy];
    let budgets = [Budget::Low, Budget::Medium, Budget::High];
    let locations = [
        LocationPreference::Telangana,
        LocationPreference::AndhraPradesh,
        LocationPreference::Anywhere,
    ];

    let mut profiles = Vec::new();
    for stream in streams {
        for comfort in comforts {
            for budget in budgets {
                for location in locations {
                    for wants_backup in [false, true] {
                        profiles.push(profile(stream, comfort, budget, location, wants_backup));
                    }
                }
            }
        }
    }
    profiles
}

pub(super) fn university(id: &str, state: Region, cutoff: Option<u32>) -> UniversityRecord {
    let cutoffs = cutoff
        .map(|rank| vec![CutoffEntry { year: 2024, rank }])
        .unwrap_or_default();
    UniversityRecord::new(
        id,
        id.to_uppercase(),
        state,
        UniversityKind::Private,
        NaacGrade::A,
        cutoffs,
        "₹1,00,000 per year",
    )
}

pub(super) fn telangana_sc_student() -> StudentCircumstances {
    StudentCircumstances {
        family_income: Some(180_000),
        category: ReservationCategory::Sc,
        home_state: Some(Region::Telangana),
        percentage: Some(85.0),
        level: Some(CourseLevel::Undergraduate),
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn standard_service() -> Arc<RecommendationService> {
    Arc::new(RecommendationService::new(Arc::new(CatalogSet::standard())))
}

pub(super) fn standard_router() -> axum::Router {
    recommendation_router(standard_service())
}

pub(super) fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request builds")
}

pub(super) fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
