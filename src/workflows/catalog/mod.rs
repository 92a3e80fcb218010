//! Immutable reference catalogs: bundled standard data plus CSV overrides.

pub mod domain;
mod filter;
pub(crate) mod normalizer;
mod parser;
mod region;
mod seed;

pub use domain::{
    ChoiceParseError, CourseLevel, CutoffEntry, Difficulty, ExamCategory, ExamLevel, ExamRecord,
    FeeSchedule, NaacGrade, Region, ReservationCategory, Scholarship, ScholarshipEligibility,
    UniversityKind, UniversityRecord,
};
pub use filter::{ExamFilter, UniversityFilter};
pub use parser::FieldParseError;

use crate::config::CatalogConfig;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Field(FieldParseError),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog file: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Field(err) => write!(f, "invalid catalog record: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Field(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<FieldParseError> for CatalogImportError {
    fn from(err: FieldParseError) -> Self {
        Self::Field(err)
    }
}

/// Reads catalog CSV exports. List cells use `;`, cutoffs use `year:rank`.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn exams_from_path<P: AsRef<Path>>(path: P) -> Result<ExamCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::exams_from_reader(file)
    }

    pub fn exams_from_reader<R: Read>(reader: R) -> Result<ExamCatalog, CatalogImportError> {
        Ok(ExamCatalog::new(parser::parse_exams(reader)?))
    }

    pub fn universities_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<UniversityCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::universities_from_reader(file)
    }

    pub fn universities_from_reader<R: Read>(
        reader: R,
    ) -> Result<UniversityCatalog, CatalogImportError> {
        Ok(UniversityCatalog::new(parser::parse_universities(reader)?))
    }
}

#[derive(Debug, Clone)]
pub struct ExamCatalog {
    exams: Vec<ExamRecord>,
}

impl ExamCatalog {
    pub fn new(exams: Vec<ExamRecord>) -> Self {
        Self { exams }
    }

    pub fn standard() -> Self {
        Self::new(seed::standard_exams())
    }

    pub fn exams(&self) -> &[ExamRecord] {
        &self.exams
    }

    pub fn get(&self, id: &str) -> Option<&ExamRecord> {
        self.exams.iter().find(|exam| exam.id == id)
    }

    pub fn filter(&self, filter: &ExamFilter) -> Vec<&ExamRecord> {
        self.exams.iter().filter(|exam| filter.matches(exam)).collect()
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct UniversityCatalog {
    universities: Vec<UniversityRecord>,
}

impl UniversityCatalog {
    pub fn new(universities: Vec<UniversityRecord>) -> Self {
        Self { universities }
    }

    pub fn standard() -> Self {
        Self::new(seed::standard_universities())
    }

    pub fn universities(&self) -> &[UniversityRecord] {
        &self.universities
    }

    pub fn get(&self, id: &str) -> Option<&UniversityRecord> {
        self.universities
            .iter()
            .find(|university| university.id == id)
    }

    pub fn filter(&self, filter: &UniversityFilter) -> Vec<&UniversityRecord> {
        self.universities
            .iter()
            .filter(|university| filter.matches(university))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ScholarshipCatalog {
    scholarships: Vec<Scholarship>,
}

impl ScholarshipCatalog {
    pub fn new(scholarships: Vec<Scholarship>) -> Self {
        Self { scholarships }
    }

    pub fn standard() -> Self {
        Self::new(seed::standard_scholarships())
    }

    pub fn scholarships(&self) -> &[Scholarship] {
        &self.scholarships
    }

    pub fn len(&self) -> usize {
        self.scholarships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scholarships.is_empty()
    }
}

/// Every catalog the service reads, loaded once at startup.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    pub exams: ExamCatalog,
    pub universities: UniversityCatalog,
    pub scholarships: ScholarshipCatalog,
}

impl CatalogSet {
    pub fn standard() -> Self {
        Self {
            exams: ExamCatalog::standard(),
            universities: UniversityCatalog::standard(),
            scholarships: ScholarshipCatalog::standard(),
        }
    }

    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogImportError> {
        let exams = match &config.exams_csv {
            Some(path) => CatalogImporter::exams_from_path(path)?,
            None => ExamCatalog::standard(),
        };
        let universities = match &config.universities_csv {
            Some(path) => CatalogImporter::universities_from_path(path)?,
            None => UniversityCatalog::standard(),
        };
        let scholarships = ScholarshipCatalog::standard();

        info!(
            exams = exams.len(),
            universities = universities.len(),
            scholarships = scholarships.len(),
            "reference catalogs loaded"
        );

        Ok(Self {
            exams,
            universities,
            scholarships,
        })
    }
}
