use crate::demo::{
    run_admission_prediction, run_demo, run_exam_recommendation, run_scholarship_match,
    AdmissionArgs, DemoArgs, ExamArgs, ScholarshipArgs,
};
use crate::server;
use campus_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Campus Compass",
    about = "Exam recommendations, admission chances and scholarship matches for students",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Entrance exam guidance
    Exams {
        #[command(subcommand)]
        command: ExamCommand,
    },
    /// Rank-based admission chances
    Admissions {
        #[command(subcommand)]
        command: AdmissionCommand,
    },
    /// Scholarship eligibility
    Scholarships {
        #[command(subcommand)]
        command: ScholarshipCommand,
    },
    /// Walk through every workflow with a sample student
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ExamCommand {
    /// Score the exam catalog against quiz answers
    Recommend(ExamArgs),
}

#[derive(Subcommand, Debug)]
enum AdmissionCommand {
    /// Estimate admission chances for a rank
    Predict(AdmissionArgs),
}

#[derive(Subcommand, Debug)]
enum ScholarshipCommand {
    /// List open scholarships the student qualifies for
    Match(ScholarshipArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Exams {
            command: ExamCommand::Recommend(args),
        } => run_exam_recommendation(args),
        Command::Admissions {
            command: AdmissionCommand::Predict(args),
        } => run_admission_prediction(args),
        Command::Scholarships {
            command: ScholarshipCommand::Match(args),
        } => run_scholarship_match(args),
        Command::Demo(args) => run_demo(args),
    }
}
