use super::common::*;
use crate::workflows::catalog::{Difficulty, ExamCatalog, ExamCategory, ExamLevel, ExamRecord};
use crate::workflows::exam_finder::{
    score_exams, Budget, Comfort, ExamFinder, ExamFinderConfig, LocationPreference, ScoreFactor,
    Stream,
};

#[test]
fn home_state_exam_is_recommended_with_balanced_reason() {
    let catalog = ExamCatalog::new(vec![
        exam(
            "jee-advanced",
            ExamCategory::Government,
            ExamLevel::National,
            Difficulty::Hard,
            &["B.Tech"],
        ),
        home_state_exam(),
    ]);

    let result = score_exams(&catalog, &telangana_engineer());

    assert!(!result.is_fallback);
    let top = &result.recommended[0];
    assert_eq!(top.exam_id, "ts-eamcet");
    assert_eq!(top.score, 22);
    assert_eq!(top.match_percentage, 88);
    assert!(top.tags.contains(&"Home State"));
    assert!(top.tags.contains(&"Balanced"));
    assert!(top.match_reason.contains("Perfect difficulty balance"));
    assert!(top
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::RegionalExam && component.points == 3));
}

#[test]
fn scoring_is_idempotent() {
    let catalog = ExamCatalog::standard();
    for profile in all_profiles() {
        assert_eq!(
            score_exams(&catalog, &profile),
            score_exams(&catalog, &profile),
            "profile {profile:?} scored differently on a second run"
        );
    }
}

#[test]
fn match_percentages_stay_within_cap() {
    let catalog = ExamCatalog::standard();
    for profile in all_profiles() {
        let result = score_exams(&catalog, &profile);
        for found in result.recommended.iter().chain(&result.backups) {
            assert!(
                found.match_percentage <= 99,
                "{} scored {}% for {profile:?}",
                found.exam_id,
                found.match_percentage
            );
        }
    }
}

#[test]
fn tier_sizes_respect_limits() {
    let catalog = ExamCatalog::standard();
    for profile in all_profiles() {
        let result = score_exams(&catalog, &profile);
        assert!(result.recommended.len() <= 3);
        assert!(result.backups.len() <= 7);
        assert!(result.recommended.len() + result.backups.len() <= result.considered);
        if !profile.wants_backup {
            assert!(result.backups.is_empty());
        }
    }
}

#[test]
fn stream_without_matches_falls_back_to_engineering_pool() {
    let catalog = ExamCatalog::new(vec![
        exam(
            "sat",
            ExamCategory::Global,
            ExamLevel::International,
            Difficulty::Medium,
            &["Undergraduate (US)"],
        ),
        exam(
            "cat",
            ExamCategory::Management,
            ExamLevel::National,
            Difficulty::Hard,
            &["MBA"],
        ),
        exam(
            "jee-main",
            ExamCategory::Government,
            ExamLevel::National,
            Difficulty::Hard,
            &["B.Tech"],
        ),
        exam(
            "viteee",
            ExamCategory::PrivateEngineering,
            ExamLevel::University,
            Difficulty::Medium,
            &["B.Tech"],
        ),
    ]);
    let medical = profile(
        Stream::Medical,
        Comfort::Easy,
        Budget::High,
        LocationPreference::Anywhere,
        true,
    );

    let result = score_exams(&catalog, &medical);

    assert!(result.is_fallback);
    assert_eq!(result.considered, 2);
    for found in result.recommended.iter().chain(&result.backups) {
        assert!(matches!(
            found.category,
            ExamCategory::Government | ExamCategory::PrivateEngineering
        ));
    }
}

#[test]
fn medical_stream_ranks_home_state_exam_first() {
    let medical = profile(
        Stream::Medical,
        Comfort::Moderate,
        Budget::Low,
        LocationPreference::Telangana,
        true,
    );

    let result = score_exams(&ExamCatalog::standard(), &medical);

    assert!(!result.is_fallback);
    assert_eq!(result.considered, 3);
    assert_eq!(result.recommended[0].exam_id, "ts-eamcet");
    assert_eq!(result.recommended[0].score, 23);
    assert!(result.backups.is_empty());
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = ExamCatalog::new(vec![
        exam(
            "first",
            ExamCategory::PrivateEngineering,
            ExamLevel::National,
            Difficulty::Medium,
            &["B.Tech"],
        ),
        exam(
            "second",
            ExamCategory::PrivateEngineering,
            ExamLevel::National,
            Difficulty::Medium,
            &["B.Tech"],
        ),
    ]);

    let result = score_exams(&catalog, &telangana_engineer());

    let ids: Vec<&str> = result
        .recommended
        .iter()
        .map(|found| found.exam_id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn custom_limits_shrink_tiers() {
    let finder = ExamFinder::new(ExamFinderConfig {
        recommended_limit: 1,
        backup_limit: 1,
        ..ExamFinderConfig::standard()
    });
    let mut answers = telangana_engineer();
    answers.wants_backup = true;

    let result = finder.recommend(ExamCatalog::standard().exams(), &answers);

    assert_eq!(result.recommended.len(), 1);
    assert_eq!(result.backups.len(), 1);
}

#[test]
fn national_exam_with_home_state_colleges_earns_home_bonus() {
    let bits = ExamRecord::new(
        "bitsat",
        "BITSAT",
        ExamCategory::PrivateEngineering,
        ExamLevel::National,
        Difficulty::Hard,
        list(&["B.E"]),
        list(&["BITS Pilani, Hyderabad Campus"]),
    );
    let answers = profile(
        Stream::Engineering,
        Comfort::Competitive,
        Budget::High,
        LocationPreference::Telangana,
        true,
    );

    let result = score_exams(&ExamCatalog::new(vec![bits]), &answers);

    let found = &result.recommended[0];
    assert_eq!(found.score, 20);
    assert!(found.tags.contains(&"Home State"));
    assert!(found.components.iter().any(|component| {
        component.factor == ScoreFactor::RegionalAffinity && component.points == 8
    }));
}

#[test]
fn national_exam_spanning_both_states_keeps_flat_bonus() {
    let answers = profile(
        Stream::Engineering,
        Comfort::Competitive,
        Budget::High,
        LocationPreference::Telangana,
        true,
    );

    let result = score_exams(&ExamCatalog::standard(), &answers);

    let jee = result
        .recommended
        .iter()
        .chain(&result.backups)
        .find(|found| found.exam_id == "jee-main")
        .expect("jee-main scored");
    assert!(!jee.tags.contains(&"Home State"));
    assert!(jee.components.iter().any(|component| {
        component.factor == ScoreFactor::RegionalAffinity && component.points == 5
    }));
}
