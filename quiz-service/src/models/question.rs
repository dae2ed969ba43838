use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown difficulty: {}", s))
    }
}

/// A trivia question as stored in the `questions` collection.
///
/// Documents written by other tools are read as-is: missing fields fall back
/// to empty values and `_id` may be any BSON value. Required fields are
/// enforced by `validate`, which guards every write. `correct_answer` is not
/// required to appear in `answers`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    #[serde(default)]
    #[validate(length(min = 10, message = "Question must be at least 10 characters"))]
    pub question: String,
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 5,
        message = "A question must have between 2 and 5 answers."
    ))]
    pub answers: Vec<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Correct answer is required"))]
    pub correct_answer: String,
    #[serde(default)]
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,
}

fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    if Difficulty::from_str(value).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("enum");
    err.message = Some("Difficulty must be one of Easy, Medium, Hard".into());
    Err(err)
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        answers: &[&str],
        correct_answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: None,
            question: question.into(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            correct_answer: correct_answer.into(),
            difficulty: difficulty.as_str().to_string(),
        }
    }

    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    /// Assigns a fresh ObjectId unless the record already has an id.
    pub fn ensure_id(&mut self) {
        self.id.get_or_insert_with(|| Bson::ObjectId(ObjectId::new()));
    }
}
