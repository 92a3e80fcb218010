use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::workflows::catalog::normalizer::choice_key;
use crate::workflows::catalog::{ChoiceParseError, ReservationCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "ECE")]
    Ece,
    #[serde(rename = "EEE")]
    Eee,
    Chemical,
    Mechanical,
    Civil,
}

impl FromStr for Branch {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "cse" | "computerscience" => Ok(Self::Cse),
            "it" | "informationtechnology" => Ok(Self::It),
            "ece" | "electronics" => Ok(Self::Ece),
            "eee" | "electrical" => Ok(Self::Eee),
            "chemical" | "che" => Ok(Self::Chemical),
            "mechanical" | "mech" => Ok(Self::Mechanical),
            "civil" => Ok(Self::Civil),
            _ => Err(ChoiceParseError::new("branch", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(ChoiceParseError::new("gender", value)),
        }
    }
}

/// Validated predictor input. `rank` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankQuery {
    pub rank: u32,
    pub category: ReservationCategory,
    pub exam_name: String,
    pub branch: Option<Branch>,
    pub gender: Option<Gender>,
}

impl RankQuery {
    /// Builds a query only when the rank is a positive integer.
    pub fn new(
        rank: u32,
        category: ReservationCategory,
        exam_name: impl Into<String>,
    ) -> Option<Self> {
        (rank > 0).then(|| Self {
            rank,
            category,
            exam_name: exam_name.into(),
            branch: None,
            gender: None,
        })
    }

    pub fn with_branch(mut self, branch: Option<Branch>) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }
}

/// Rank as typed into the form: a number or free text. Any other JSON value
/// is kept as-is and never yields a rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RankInput {
    /// Positive integer rank, tolerating surrounding whitespace and digit
    /// grouping commas. Anything else reads as "no rank entered".
    pub fn positive_rank(&self) -> Option<u32> {
        let rank = match self {
            RankInput::Number(value) => u32::try_from(*value).ok()?,
            RankInput::Text(raw) => raw.trim().replace(',', "").parse::<u32>().ok()?,
            RankInput::Other(_) => return None,
        };
        (rank > 0).then_some(rank)
    }
}

/// Raw predictor request as submitted by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRequest {
    pub rank: Option<RankInput>,
    pub category: ReservationCategory,
    #[serde(default)]
    pub exam_name: String,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl AdmissionRequest {
    pub fn into_query(self) -> Option<RankQuery> {
        let rank = self.rank.as_ref()?.positive_rank()?;
        RankQuery::new(rank, self.category, self.exam_name).map(|query| {
            query
                .with_branch(self.branch)
                .with_gender(self.gender)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rank: Option<RankInput>) -> AdmissionRequest {
        AdmissionRequest {
            rank,
            category: ReservationCategory::Oc,
            exam_name: "TS EAMCET".to_string(),
            branch: Some(Branch::Cse),
            gender: None,
        }
    }

    #[test]
    fn rank_input_accepts_numbers_and_grouped_text() {
        assert_eq!(RankInput::Number(5000).positive_rank(), Some(5000));
        assert_eq!(RankInput::Text(" 12,500 ".to_string()).positive_rank(), Some(12_500));
    }

    #[test]
    fn rank_input_rejects_non_positive_or_garbage() {
        assert_eq!(RankInput::Number(0).positive_rank(), None);
        assert_eq!(RankInput::Number(-3).positive_rank(), None);
        assert_eq!(RankInput::Text("top 100".to_string()).positive_rank(), None);
        assert_eq!(RankInput::Text(String::new()).positive_rank(), None);
    }

    #[test]
    fn into_query_carries_optional_adjustments() {
        let query = request(Some(RankInput::Text("4200".to_string())))
            .into_query()
            .expect("valid rank");
        assert_eq!(query.rank, 4200);
        assert_eq!(query.branch, Some(Branch::Cse));
        assert!(request(None).into_query().is_none());
    }

    #[test]
    fn request_deserializes_string_or_number_rank() {
        let from_number: AdmissionRequest =
            serde_json::from_str(r#"{"rank":5000,"category":"SC","exam_name":"AP EAPCET"}"#)
                .expect("numeric rank");
        assert_eq!(from_number.rank, Some(RankInput::Number(5000)));
        assert_eq!(from_number.category, ReservationCategory::Sc);

        let from_text: AdmissionRequest = serde_json::from_str(
            r#"{"rank":"abc","category":"OC","exam_name":"TS EAMCET","branch":"Civil","gender":"Female"}"#,
        )
        .expect("text rank");
        assert!(from_text.into_query().is_none());
    }

    #[test]
    fn fractional_or_boolean_rank_deserializes_without_a_rank() {
        for raw in ["5000.5", "true", "[5000]"] {
            let body = format!(r#"{{"rank":{raw},"category":"OC","exam_name":"TS EAMCET"}}"#);
            let parsed: AdmissionRequest = serde_json::from_str(&body).expect("lenient rank");
            assert!(matches!(parsed.rank, Some(RankInput::Other(_))));
            assert!(parsed.into_query().is_none(), "{raw} produced a rank");
        }
    }
}
