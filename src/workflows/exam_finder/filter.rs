use crate::workflows::catalog::{ExamCategory, ExamRecord};

use super::profile::Stream;

pub(crate) struct Shortlist<'a> {
    pub exams: Vec<&'a ExamRecord>,
    pub is_fallback: bool,
}

/// Keep exams that fit the chosen stream. When nothing fits, widen to
/// government and private engineering exams and flag the substitution.
pub(crate) fn shortlist(exams: &[ExamRecord], stream: Stream) -> Shortlist<'_> {
    let matching: Vec<&ExamRecord> = exams
        .iter()
        .filter(|exam| fits_stream(exam, stream))
        .collect();

    if !matching.is_empty() {
        return Shortlist {
            exams: matching,
            is_fallback: false,
        };
    }

    Shortlist {
        exams: exams
            .iter()
            .filter(|exam| {
                matches!(
                    exam.category,
                    ExamCategory::Government | ExamCategory::PrivateEngineering
                )
            })
            .collect(),
        is_fallback: true,
    }
}

fn fits_stream(exam: &ExamRecord, stream: Stream) -> bool {
    match stream {
        Stream::Engineering => {
            !exam.offers_any(&["mbbs"])
                && (exam.category == ExamCategory::PrivateEngineering
                    || exam.offers_any(&["b.tech", "b.e", "b.arch"]))
        }
        Stream::Medical => exam.offers_any(&["mbbs", "bds", "pharm", "nursing"]),
        Stream::Management => {
            exam.category == ExamCategory::Management || exam.offers_any(&["mba", "bba", "pgdm"])
        }
        Stream::Design => {
            exam.category == ExamCategory::Design || exam.offers_any(&["b.des", "design"])
        }
        Stream::Global => exam.category == ExamCategory::Global,
        Stream::Skills => {
            exam.category == ExamCategory::SkillBased
                || exam.offers_any(&["diploma", "certificate"])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::ExamCatalog;

    fn ids(shortlist: &Shortlist<'_>) -> Vec<String> {
        shortlist.exams.iter().map(|exam| exam.id.clone()).collect()
    }

    #[test]
    fn engineering_excludes_medical_exams() {
        let catalog = ExamCatalog::standard();
        let shortlist = shortlist(catalog.exams(), Stream::Engineering);
        let ids = ids(&shortlist);
        assert!(!shortlist.is_fallback);
        assert!(ids.contains(&"ts-eamcet".to_string()));
        assert!(ids.contains(&"bitsat".to_string()));
        assert!(!ids.contains(&"neet-ug".to_string()));
        assert!(!ids.contains(&"cat".to_string()));
    }

    #[test]
    fn medical_picks_up_pharmacy_and_nursing() {
        let catalog = ExamCatalog::standard();
        let ids = ids(&shortlist(catalog.exams(), Stream::Medical));
        assert_eq!(ids, vec!["ts-eamcet", "ap-eapcet", "neet-ug"]);
    }

    #[test]
    fn empty_stream_falls_back_to_engineering_pool() {
        let catalog = ExamCatalog::new(
            ExamCatalog::standard()
                .exams()
                .iter()
                .filter(|exam| exam.category != ExamCategory::Global)
                .cloned()
                .collect(),
        );
        let shortlist = shortlist(catalog.exams(), Stream::Global);
        assert!(shortlist.is_fallback);
        assert!(!shortlist.exams.is_empty());
        assert!(shortlist.exams.iter().all(|exam| matches!(
            exam.category,
            ExamCategory::Government | ExamCategory::PrivateEngineering
        )));
    }
}
