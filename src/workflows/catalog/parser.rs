use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::domain::{ChoiceParseError, CutoffEntry, ExamRecord, NaacGrade, Region, UniversityRecord};
use super::normalizer::split_list;
use super::CatalogImportError;

/// A CSV cell that names an unknown enumeration value.
#[derive(Debug, thiserror::Error)]
#[error("line {line}: invalid {field}: {source}")]
pub struct FieldParseError {
    pub line: u64,
    pub field: &'static str,
    #[source]
    pub source: ChoiceParseError,
}

pub(crate) fn parse_exams<R: Read>(reader: R) -> Result<Vec<ExamRecord>, CatalogImportError> {
    parse_rows::<R, ExamRow, _>(reader, ExamRow::into_record)
}

pub(crate) fn parse_universities<R: Read>(
    reader: R,
) -> Result<Vec<UniversityRecord>, CatalogImportError> {
    parse_rows::<R, UniversityRow, _>(reader, UniversityRow::into_record)
}

fn parse_rows<R, Row, T>(
    reader: R,
    convert: fn(Row, u64) -> Result<T, FieldParseError>,
) -> Result<Vec<T>, CatalogImportError>
where
    R: Read,
    Row: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map(|position| position.line()).unwrap_or(0);
        let row: Row = raw.deserialize(Some(&headers))?;
        records.push(convert(row, line)?);
    }

    Ok(records)
}

fn field<T>(line: u64, field: &'static str, value: &str) -> Result<T, FieldParseError>
where
    T: FromStr<Err = ChoiceParseError>,
{
    value
        .parse()
        .map_err(|source| FieldParseError { line, field, source })
}

#[derive(Debug, Deserialize)]
struct ExamRow {
    id: String,
    name: String,
    category: String,
    level: String,
    difficulty: String,
    #[serde(default)]
    courses: String,
    #[serde(default)]
    colleges: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    home_region: Option<String>,
}

impl ExamRow {
    fn into_record(self, line: u64) -> Result<ExamRecord, FieldParseError> {
        let record = ExamRecord::new(
            self.id,
            self.name,
            field(line, "category", &self.category)?,
            field(line, "level", &self.level)?,
            field(line, "difficulty", &self.difficulty)?,
            split_list(&self.courses),
            split_list(&self.colleges),
        );

        match self.home_region {
            Some(region) => {
                let region: Region = field(line, "home_region", &region)?;
                Ok(record.with_home_region(Some(region)))
            }
            None => Ok(record),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UniversityRow {
    id: String,
    name: String,
    state: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    naac_grade: String,
    #[serde(default)]
    cutoffs: String,
    #[serde(default)]
    tuition: String,
}

impl UniversityRow {
    fn into_record(self, line: u64) -> Result<UniversityRecord, FieldParseError> {
        let naac_grade: NaacGrade = field(line, "naac_grade", &self.naac_grade)?;

        Ok(UniversityRecord::new(
            self.id,
            self.name,
            field(line, "state", &self.state)?,
            field(line, "type", &self.kind)?,
            naac_grade,
            parse_cutoffs(&self.cutoffs),
            self.tuition,
        ))
    }
}

/// `2024:4000;2023:4200`. Entries with a missing or non-numeric part are skipped.
fn parse_cutoffs(value: &str) -> Vec<CutoffEntry> {
    split_list(value)
        .iter()
        .filter_map(|entry| {
            let (year, rank) = entry.split_once(':')?;
            Some(CutoffEntry {
                year: year.trim().parse().ok()?,
                rank: rank.trim().replace(',', "").parse().ok()?,
            })
        })
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::domain::{ExamCategory, UniversityKind};
    use std::io::Cursor;

    #[test]
    fn cutoffs_skip_malformed_entries() {
        let entries = parse_cutoffs("2024:4,000; 2023:n/a; broken; 2022:5100");
        assert_eq!(
            entries,
            vec![
                CutoffEntry {
                    year: 2024,
                    rank: 4000
                },
                CutoffEntry {
                    year: 2022,
                    rank: 5100
                },
            ]
        );
    }

    #[test]
    fn exam_rows_split_lists_and_infer_region() {
        let csv = "id,name,category,level,difficulty,courses,colleges\n\
ts-ecet,TS ECET,Government,State,Easy,B.Tech (Lateral); B.Pharm,Osmania University\n";
        let exams = parse_exams(Cursor::new(csv)).expect("parse");
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].category, ExamCategory::Government);
        assert_eq!(exams[0].courses.len(), 2);
        assert_eq!(exams[0].home_region, Some(Region::Telangana));
    }

    #[test]
    fn explicit_home_region_overrides_inference() {
        let csv = "id,name,category,level,difficulty,courses,colleges,home_region\n\
gitam-gat,GITAM GAT,Private Engineering,University,Easy,B.Tech,GITAM Hyderabad,Andhra Pradesh\n";
        let exams = parse_exams(Cursor::new(csv)).expect("parse");
        assert_eq!(exams[0].home_region, Some(Region::AndhraPradesh));
    }

    #[test]
    fn unknown_enum_reports_line_and_field() {
        let csv = "id,name,category,level,difficulty\n\
a,A,Government,State,Easy\n\
b,B,Astrology,State,Easy\n";
        let error = parse_exams(Cursor::new(csv)).expect_err("category is unknown");
        match error {
            CatalogImportError::Field(err) => {
                assert_eq!(err.line, 3);
                assert_eq!(err.field, "category");
                assert_eq!(err.source.value, "Astrology");
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn university_rows_order_cutoffs_and_grade() {
        let csv = "id,name,state,type,naac_grade,cutoffs,tuition\n\
cbit,CBIT,TS,Autonomous,A++,2023:4300;2024:4000,\"₹1,40,000\"\n";
        let universities = parse_universities(Cursor::new(csv)).expect("parse");
        let cbit = &universities[0];
        assert_eq!(cbit.kind, UniversityKind::Autonomous);
        assert_eq!(cbit.naac_grade, NaacGrade::APlusPlus);
        assert_eq!(cbit.latest_cutoff(), Some(4000));
        assert_eq!(cbit.tuition_amount(), Some(140_000));
    }
}
