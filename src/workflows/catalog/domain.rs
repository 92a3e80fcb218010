use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::normalizer::{choice_key, digits_amount};
use super::region::infer_home_region;

/// Raised when a free-text value does not name a known enumeration variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ChoiceParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ChoiceParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.trim().to_string(),
        }
    }
}

/// States covered by the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Telangana,
    AndhraPradesh,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Telangana => "Telangana",
            Self::AndhraPradesh => "Andhra Pradesh",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Telangana => Self::AndhraPradesh,
            Self::AndhraPradesh => Self::Telangana,
        }
    }
}

impl FromStr for Region {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "telangana" | "ts" | "tg" => Ok(Self::Telangana),
            "andhrapradesh" | "andhra" | "ap" => Ok(Self::AndhraPradesh),
            _ => Err(ChoiceParseError::new("region", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamCategory {
    Government,
    PrivateEngineering,
    Management,
    Design,
    Global,
    SkillBased,
}

impl ExamCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::PrivateEngineering => "Private Engineering",
            Self::Management => "Management",
            Self::Design => "Design",
            Self::Global => "Global",
            Self::SkillBased => "Skill Based",
        }
    }
}

impl FromStr for ExamCategory {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "government" => Ok(Self::Government),
            "privateengineering" | "private" => Ok(Self::PrivateEngineering),
            "management" => Ok(Self::Management),
            "design" => Ok(Self::Design),
            "global" => Ok(Self::Global),
            "skillbased" | "skills" => Ok(Self::SkillBased),
            _ => Err(ChoiceParseError::new("exam category", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamLevel {
    State,
    National,
    University,
    International,
}

impl FromStr for ExamLevel {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "state" => Ok(Self::State),
            "national" => Ok(Self::National),
            "university" => Ok(Self::University),
            "international" => Ok(Self::International),
            _ => Err(ChoiceParseError::new("exam level", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "easy" => Ok(Self::Easy),
            "medium" | "moderate" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ChoiceParseError::new("difficulty", value)),
        }
    }
}

/// Entrance exam reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: String,
    pub name: String,
    pub category: ExamCategory,
    pub level: ExamLevel,
    pub difficulty: Difficulty,
    pub courses: Vec<String>,
    pub colleges: Vec<String>,
    /// Resolved once when the record is built, never per query.
    pub home_region: Option<Region>,
}

impl ExamRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ExamCategory,
        level: ExamLevel,
        difficulty: Difficulty,
        courses: Vec<String>,
        colleges: Vec<String>,
    ) -> Self {
        let id = id.into();
        let home_region = infer_home_region(&id, &colleges);

        Self {
            id,
            name: name.into(),
            category,
            level,
            difficulty,
            courses,
            colleges,
            home_region,
        }
    }

    pub fn with_home_region(mut self, region: Option<Region>) -> Self {
        self.home_region = region;
        self
    }

    /// True when any course name contains one of the lowercase needles.
    pub fn offers_any(&self, needles: &[&str]) -> bool {
        self.courses.iter().any(|course| {
            let course = course.to_ascii_lowercase();
            needles.iter().any(|needle| course.contains(needle))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversityKind {
    Government,
    Private,
    Deemed,
    Autonomous,
}

impl FromStr for UniversityKind {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "government" | "state" | "public" => Ok(Self::Government),
            "private" => Ok(Self::Private),
            "deemed" => Ok(Self::Deemed),
            "autonomous" => Ok(Self::Autonomous),
            _ => Err(ChoiceParseError::new("university type", value)),
        }
    }
}

/// NAAC accreditation grade, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NaacGrade {
    Ungraded,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B++")]
    BPlusPlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A++")]
    APlusPlus,
}

impl NaacGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ungraded => "Ungraded",
            Self::C => "C",
            Self::B => "B",
            Self::BPlus => "B+",
            Self::BPlusPlus => "B++",
            Self::A => "A",
            Self::APlus => "A+",
            Self::APlusPlus => "A++",
        }
    }
}

impl FromStr for NaacGrade {
    type Err = ChoiceParseError;

    /// Unrecognised grades rank below every accredited grade.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let grade = value.trim().to_ascii_uppercase();
        Ok(match grade.as_str() {
            "A++" => Self::APlusPlus,
            "A+" => Self::APlus,
            "A" => Self::A,
            "B++" => Self::BPlusPlus,
            "B+" => Self::BPlus,
            "B" => Self::B,
            "C" => Self::C,
            _ => Self::Ungraded,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffEntry {
    pub year: i32,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub tuition: String,
}

/// University directory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub id: String,
    pub name: String,
    pub state: Region,
    pub kind: UniversityKind,
    pub naac_grade: NaacGrade,
    /// Most recent year first.
    pub cutoffs: Vec<CutoffEntry>,
    pub fees: FeeSchedule,
}

impl UniversityRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        state: Region,
        kind: UniversityKind,
        naac_grade: NaacGrade,
        mut cutoffs: Vec<CutoffEntry>,
        tuition: impl Into<String>,
    ) -> Self {
        cutoffs.sort_by(|left, right| right.year.cmp(&left.year));

        Self {
            id: id.into(),
            name: name.into(),
            state,
            kind,
            naac_grade,
            cutoffs,
            fees: FeeSchedule {
                tuition: tuition.into(),
            },
        }
    }

    pub fn latest_cutoff(&self) -> Option<u32> {
        self.cutoffs.first().map(|entry| entry.rank)
    }

    pub fn tuition_amount(&self) -> Option<u64> {
        digits_amount(&self.fees.tuition)
    }
}

/// Reservation category used by admission cutoffs and scholarship eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationCategory {
    #[serde(rename = "OC")]
    Oc,
    #[serde(rename = "BC")]
    Bc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "EWS")]
    Ews,
}

impl ReservationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oc => "OC",
            Self::Bc => "BC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Ews => "EWS",
        }
    }
}

impl FromStr for ReservationCategory {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "oc" | "general" | "open" => Ok(Self::Oc),
            "bc" | "obc" => Ok(Self::Bc),
            "sc" => Ok(Self::Sc),
            "st" => Ok(Self::St),
            "ews" => Ok(Self::Ews),
            _ => Err(ChoiceParseError::new("reservation category", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Intermediate,
    Undergraduate,
    Postgraduate,
}

impl CourseLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Undergraduate => "Undergraduate",
            Self::Postgraduate => "Postgraduate",
        }
    }
}

impl FromStr for CourseLevel {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "intermediate" | "inter" => Ok(Self::Intermediate),
            "undergraduate" | "ug" => Ok(Self::Undergraduate),
            "postgraduate" | "pg" => Ok(Self::Postgraduate),
            _ => Err(ChoiceParseError::new("course level", value)),
        }
    }
}

/// Conditions a student must satisfy; empty lists mean "open to all".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScholarshipEligibility {
    pub max_family_income: Option<u64>,
    pub categories: Vec<ReservationCategory>,
    pub states: Vec<Region>,
    pub min_percentage: Option<f32>,
    pub levels: Vec<CourseLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub amount: String,
    pub deadline: NaiveDate,
    pub eligibility: ScholarshipEligibility,
}

impl Scholarship {
    pub fn amount_value(&self) -> Option<u64> {
        digits_amount(&self.amount)
    }
}
