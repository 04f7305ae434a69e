// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ScoringError;

/// The four supported question types.
///
/// Serialized with the exact tags the authoring side stores
/// (`"Multichoice"`, `"TrueFalse"`, `"SingleWord"`, `"Essay"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    Multichoice,
    TrueFalse,
    SingleWord,
    Essay,
}

/// One option of a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    #[serde(rename = "optionText", default)]
    pub option_text: String,

    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
}

/// A question record as stored by the authoring side.
///
/// Flat wire shape: every type-specific payload field is optional and only
/// the one matching `questionType` is expected to be populated. Unknown
/// fields (subject, topic, difficulty, ...) are ignored; the scoring pass
/// does not need them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionRecord {
    #[serde(default)]
    pub question: String,

    #[serde(rename = "questionType")]
    pub question_type: QuestionType,

    /// Declared weight of the question in the exam. Validated positive but
    /// not applied by the scoring pass, which uses the submitted answer's
    /// own weight instead.
    #[serde(default = "default_mark")]
    #[validate(range(exclusive_min = 0.0))]
    pub mark: f64,

    /// Configured penalty for a wrong answer. Validated non-negative but
    /// never subtracted by the scoring pass.
    #[serde(rename = "negativeMark", default)]
    #[validate(range(min = 0.0))]
    pub negative_mark: f64,

    #[serde(rename = "multiOptions", default)]
    pub multi_options: Vec<ChoiceOption>,

    #[serde(rename = "selectedOneValue", default)]
    pub selected_one_value: Option<String>,

    #[serde(rename = "singleWordAnswers", default)]
    pub single_word_answers: Vec<String>,

    #[serde(default)]
    pub essay: Option<String>,
}

fn default_mark() -> f64 {
    1.0
}

/// Correct-answer payload, keyed by question type.
///
/// Built from a [`QuestionRecord`] at the scoring boundary so each scorer
/// receives exactly the payload shape its type requires; a missing payload
/// field becomes the empty value and scores 0 rather than failing the batch.
#[derive(Debug, Clone)]
pub enum AnswerKey {
    Multichoice { options: Vec<ChoiceOption> },
    TrueFalse { value: String },
    SingleWord { accepted: Vec<String> },
    Essay { reference: String },
}

impl AnswerKey {
    pub fn question_type(&self) -> QuestionType {
        match self {
            AnswerKey::Multichoice { .. } => QuestionType::Multichoice,
            AnswerKey::TrueFalse { .. } => QuestionType::TrueFalse,
            AnswerKey::SingleWord { .. } => QuestionType::SingleWord,
            AnswerKey::Essay { .. } => QuestionType::Essay,
        }
    }
}

/// A validated question, ready for the scoring pass.
#[derive(Debug, Clone)]
pub struct Question {
    pub text: String,
    pub mark: f64,
    pub negative_mark: f64,
    pub key: AnswerKey,
}

impl QuestionRecord {
    /// Boundary validation and conversion into the typed form.
    ///
    /// A record that fails validation aborts the whole scoring batch; this
    /// is the only place malformed question data is rejected.
    pub fn to_question(&self) -> Result<Question, ScoringError> {
        self.validate()?;

        let key = match self.question_type {
            QuestionType::Multichoice => AnswerKey::Multichoice {
                options: self.multi_options.clone(),
            },
            QuestionType::TrueFalse => AnswerKey::TrueFalse {
                value: self.selected_one_value.clone().unwrap_or_default(),
            },
            QuestionType::SingleWord => AnswerKey::SingleWord {
                accepted: self.single_word_answers.clone(),
            },
            QuestionType::Essay => AnswerKey::Essay {
                reference: self.essay.clone().unwrap_or_default(),
            },
        };

        Ok(Question {
            text: self.question.clone(),
            mark: self.mark,
            negative_mark: self.negative_mark,
            key,
        })
    }
}
