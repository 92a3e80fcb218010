use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::workflows::catalog::normalizer::choice_key;
use crate::workflows::catalog::{ChoiceParseError, Region};

/// Career field picked in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    Engineering,
    Medical,
    Management,
    Design,
    Global,
    Skills,
}

impl FromStr for Stream {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "engineering" => Ok(Self::Engineering),
            "medical" | "medicine" => Ok(Self::Medical),
            "management" => Ok(Self::Management),
            "design" => Ok(Self::Design),
            "global" | "abroad" => Ok(Self::Global),
            "skills" | "skillbased" => Ok(Self::Skills),
            _ => Err(ChoiceParseError::new("stream", value)),
        }
    }
}

/// Appetite for competitive exams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comfort {
    Competitive,
    Moderate,
    Easy,
}

impl FromStr for Comfort {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "competitive" => Ok(Self::Competitive),
            "moderate" => Ok(Self::Moderate),
            "easy" => Ok(Self::Easy),
            _ => Err(ChoiceParseError::new("comfort level", value)),
        }
    }
}

/// Tuition tier the family can afford.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl FromStr for Budget {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ChoiceParseError::new("budget", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationPreference {
    Telangana,
    AndhraPradesh,
    Anywhere,
}

impl LocationPreference {
    pub const fn region(self) -> Option<Region> {
        match self {
            Self::Telangana => Some(Region::Telangana),
            Self::AndhraPradesh => Some(Region::AndhraPradesh),
            Self::Anywhere => None,
        }
    }
}

impl FromStr for LocationPreference {
    type Err = ChoiceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match choice_key(value).as_str() {
            "anywhere" | "any" => Ok(Self::Anywhere),
            _ => match value.parse::<Region>() {
                Ok(Region::Telangana) => Ok(Self::Telangana),
                Ok(Region::AndhraPradesh) => Ok(Self::AndhraPradesh),
                Err(_) => Err(ChoiceParseError::new("location", value)),
            },
        }
    }
}

/// Completed quiz answers; every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub stream: Stream,
    pub comfort: Comfort,
    pub budget: Budget,
    pub location: LocationPreference,
    pub wants_backup: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_parse_loosely() {
        assert_eq!("Engineering".parse::<Stream>(), Ok(Stream::Engineering));
        assert_eq!("skill-based".parse::<Stream>(), Ok(Stream::Skills));
        assert_eq!(" competitive ".parse::<Comfort>(), Ok(Comfort::Competitive));
        assert_eq!("HIGH".parse::<Budget>(), Ok(Budget::High));
        assert_eq!(
            "Andhra Pradesh".parse::<LocationPreference>(),
            Ok(LocationPreference::AndhraPradesh)
        );
        assert_eq!(
            "anywhere".parse::<LocationPreference>(),
            Ok(LocationPreference::Anywhere)
        );
    }

    #[test]
    fn unknown_choice_names_the_field() {
        let error = "astronomy".parse::<Stream>().expect_err("unknown stream");
        assert_eq!(error.to_string(), "unknown stream 'astronomy'");
        let error = "mars".parse::<LocationPreference>().expect_err("unknown");
        assert_eq!(error.kind, "location");
    }

    #[test]
    fn profile_deserializes_from_quiz_payload() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{"stream":"Engineering","comfort":"Moderate","budget":"Medium","location":"Telangana","wants_backup":true}"#,
        )
        .expect("valid payload");
        assert_eq!(profile.location.region(), Some(Region::Telangana));
        assert!(profile.wants_backup);
    }
}
