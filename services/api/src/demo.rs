use crate::infra::load_service;
use campus_compass::config::AppConfig;
use campus_compass::error::AppError;
use campus_compass::workflows::catalog::{CourseLevel, Region, ReservationCategory};
use campus_compass::workflows::exam_finder::{
    Budget, Comfort, ExamMatch, ExamRecommendations, LocationPreference, StudentProfile, Stream,
};
use campus_compass::workflows::predictor::{
    AdmissionMatch, AdmissionPredictions, AdmissionRequest, Branch, Gender, RankInput,
};
use campus_compass::workflows::scholarships::{ScholarshipMatches, StudentCircumstances};
use campus_compass::workflows::RecommendationService;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct ExamArgs {
    /// Stream of interest (engineering, medical, management, design, global, skills)
    #[arg(long)]
    pub(crate) stream: Stream,
    /// Preferred exam difficulty (competitive, moderate, easy)
    #[arg(long)]
    pub(crate) comfort: Comfort,
    /// Fee budget (low, medium, high)
    #[arg(long)]
    pub(crate) budget: Budget,
    /// Home state preference (telangana, andhra-pradesh, anywhere)
    #[arg(long, default_value = "anywhere")]
    pub(crate) location: LocationPreference,
    /// Also list backup exams beyond the top recommendations
    #[arg(long)]
    pub(crate) backup: bool,
    /// Print the raw JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AdmissionArgs {
    /// Entrance exam rank; digit grouping commas are accepted
    #[arg(long)]
    pub(crate) rank: String,
    /// Reservation category (OC, BC, SC, ST, EWS)
    #[arg(long)]
    pub(crate) category: ReservationCategory,
    /// Exam name, e.g. "TS EAMCET"; state exams limit results to that state
    #[arg(long)]
    pub(crate) exam: String,
    /// Preferred branch (CSE, IT, ECE, EEE, Chemical, Mechanical, Civil)
    #[arg(long)]
    pub(crate) branch: Option<Branch>,
    #[arg(long)]
    pub(crate) gender: Option<Gender>,
    /// Print the raw JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScholarshipArgs {
    /// Reservation category (OC, BC, SC, ST, EWS)
    #[arg(long)]
    pub(crate) category: ReservationCategory,
    /// Annual family income in rupees
    #[arg(long)]
    pub(crate) income: Option<u64>,
    /// State of residence
    #[arg(long)]
    pub(crate) state: Option<Region>,
    /// Latest qualifying exam percentage
    #[arg(long)]
    pub(crate) percentage: Option<f32>,
    /// Course level applying for (intermediate, ug, pg)
    #[arg(long)]
    pub(crate) level: Option<CourseLevel>,
    /// Deadline reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the raw JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Deadline reference date for the scholarship step (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_exam_recommendation(args: ExamArgs) -> Result<(), AppError> {
    let service = load_service(&AppConfig::load()?)?;
    let profile = StudentProfile {
        stream: args.stream,
        comfort: args.comfort,
        budget: args.budget,
        location: args.location,
        wants_backup: args.backup,
    };

    let result = service.recommend_exams(&profile);
    if args.json {
        print_json(&result);
    } else {
        render_exam_recommendations(&result);
    }
    Ok(())
}

pub(crate) fn run_admission_prediction(args: AdmissionArgs) -> Result<(), AppError> {
    let service = load_service(&AppConfig::load()?)?;
    let request = AdmissionRequest {
        rank: Some(RankInput::Text(args.rank)),
        category: args.category,
        exam_name: args.exam,
        branch: args.branch,
        gender: args.gender,
    };

    let result = service.predict_admission(request);
    if args.json {
        print_json(&result);
    } else {
        render_admission_predictions(&result);
    }
    Ok(())
}

pub(crate) fn run_scholarship_match(args: ScholarshipArgs) -> Result<(), AppError> {
    let service = load_service(&AppConfig::load()?)?;
    let student = StudentCircumstances {
        family_income: args.income,
        category: args.category,
        home_state: args.state,
        percentage: args.percentage,
        level: args.level,
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let result = service.match_scholarships(&student, today);
    if args.json {
        print_json(&result);
    } else {
        render_scholarship_matches(&result, today);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = load_service(&AppConfig::load()?)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Campus Compass demo");
    demo_walkthrough(&service, today);
    Ok(())
}

fn demo_walkthrough(service: &RecommendationService, today: NaiveDate) {
    let profile = StudentProfile {
        stream: Stream::Engineering,
        comfort: Comfort::Moderate,
        budget: Budget::Medium,
        location: LocationPreference::Telangana,
        wants_backup: true,
    };
    println!("\nExam finder: engineering aspirant from Telangana, moderate pace, medium budget");
    render_exam_recommendations(&service.recommend_exams(&profile));

    let request = AdmissionRequest {
        rank: Some(RankInput::Text("5,000".to_string())),
        category: ReservationCategory::Bc,
        exam_name: "TS EAMCET".to_string(),
        branch: Some(Branch::Cse),
        gender: Some(Gender::Female),
    };
    println!("\nAdmission predictor: TS EAMCET rank 5,000, BC, CSE");
    render_admission_predictions(&service.predict_admission(request));

    let student = StudentCircumstances {
        family_income: Some(180_000),
        category: ReservationCategory::Bc,
        home_state: Some(Region::Telangana),
        percentage: Some(86.5),
        level: Some(CourseLevel::Undergraduate),
    };
    println!("\nScholarships: BC student, ₹1.8L family income, 86.5%");
    render_scholarship_matches(&service.match_scholarships(&student, today), today);
}

fn render_exam_recommendations(result: &ExamRecommendations) {
    if result.is_fallback {
        println!("No exams matched that stream; showing engineering exams instead.");
    }
    if result.is_empty() {
        println!("- no exams to recommend");
        return;
    }

    println!("Recommended ({} considered):", result.considered);
    for found in &result.recommended {
        println!("{}", exam_line(found));
    }
    if !result.backups.is_empty() {
        println!("Backups:");
        for found in &result.backups {
            println!("{}", exam_line(found));
        }
    }
}

fn exam_line(found: &ExamMatch) -> String {
    let tags = if found.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", found.tags.join(", "))
    };
    format!(
        "- {} ({}%): {}{}",
        found.name, found.match_percentage, found.match_reason, tags
    )
}

fn render_admission_predictions(result: &AdmissionPredictions) {
    if !result.computed {
        println!("- enter a positive rank to see admission chances");
        return;
    }
    if let Some(state) = result.state_filter {
        println!("Showing {} universities only", state.label());
    }
    if result.matches.is_empty() {
        println!("- no universities within reach of this rank");
    }
    for found in &result.matches {
        println!("{}", admission_line(found));
    }
    if result.excluded > 0 {
        println!("({} universities out of reach)", result.excluded);
    }
}

fn admission_line(found: &AdmissionMatch) -> String {
    format!(
        "- {}: {} chance (cutoff {} adjusted to {}, NAAC {:?})",
        found.name, found.chance_label, found.base_cutoff, found.adjusted_cutoff, found.naac_grade
    )
}

fn render_scholarship_matches(result: &ScholarshipMatches, today: NaiveDate) {
    println!("As of {today}:");
    if result.matches.is_empty() {
        println!("- no open scholarships match");
    }
    for found in &result.matches {
        println!(
            "- {} ({}) | {} | closes {} ({} days)",
            found.name, found.provider, found.amount, found.deadline, found.days_left
        );
        for reason in &found.reasons {
            println!("    * {reason}");
        }
    }
    if result.expired > 0 {
        println!("({} scholarships already closed)", result.expired);
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("payload unavailable: {err}"),
    }
}
