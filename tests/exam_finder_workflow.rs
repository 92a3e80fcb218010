use campus_compass::workflows::catalog::{ExamCatalog, ExamCategory};
use campus_compass::workflows::exam_finder::{
    score_exams, Budget, Comfort, LocationPreference, StudentProfile, Stream,
};

fn answers(stream: Stream, location: LocationPreference, wants_backup: bool) -> StudentProfile {
    StudentProfile {
        stream,
        comfort: Comfort::Competitive,
        budget: Budget::High,
        location,
        wants_backup,
    }
}

#[test]
fn competitive_engineer_sees_top_tier_exams_first() {
    let catalog = ExamCatalog::standard();

    let result = score_exams(
        &catalog,
        &answers(Stream::Engineering, LocationPreference::Anywhere, true),
    );

    assert!(!result.is_fallback);
    assert_eq!(result.recommended.len(), 3);
    let top = &result.recommended[0];
    assert!(top.tags.contains(&"Top Tier"), "top pick tags: {:?}", top.tags);
    assert_eq!(top.match_reason, "Matches your competitive ambition");
    for pair in result.recommended.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    if let (Some(last), Some(first_backup)) = (result.recommended.last(), result.backups.first()) {
        assert!(last.score >= first_backup.score);
    }
}

#[test]
fn every_match_explains_itself() {
    let catalog = ExamCatalog::standard();

    let result = score_exams(
        &catalog,
        &answers(Stream::Design, LocationPreference::AndhraPradesh, true),
    );

    for found in result.recommended.iter().chain(&result.backups) {
        assert!(!found.match_reason.is_empty());
        assert!(found.tags.len() <= 3);
        let total: i32 = found
            .components
            .iter()
            .map(|component| i32::from(component.points))
            .sum();
        assert_eq!(total, found.score, "{} components drift", found.exam_id);
    }
    assert!(result
        .recommended
        .iter()
        .all(|found| found.category == ExamCategory::Design));
}

#[test]
fn recommendations_serialize_for_clients() {
    let catalog = ExamCatalog::standard();
    let result = score_exams(
        &catalog,
        &answers(Stream::Global, LocationPreference::Telangana, false),
    );

    let payload = serde_json::to_value(&result).expect("serializes");

    assert_eq!(payload["is_fallback"], serde_json::json!(false));
    assert!(payload["recommended"][0]["components"][0]["factor"].is_string());
    assert_eq!(payload["backups"], serde_json::json!([]));
}
