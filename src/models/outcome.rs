// src/models/outcome.rs

use serde::Serialize;

use crate::error::ScoringError;
use crate::models::answer::SubmittedAnswer;
use crate::models::question::QuestionType;

/// Display projection of a question's correct answer, shaped per type:
/// the texts of the correct options for multiple choice, the stored value
/// for true/false, the accepted word list for single word, and the
/// reference text for essays.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Texts(Vec<String>),
    Text(String),
}

/// Per-question scoring record returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub question: String,

    #[serde(rename = "questionType")]
    pub question_type: QuestionType,

    /// Weighted score: the raw 0-10 score scaled by `weight / 10`.
    pub score: f64,

    /// True only for a perfect raw score; essay partial credit never
    /// counts as correct.
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,

    pub weight: f64,

    /// The submitted answer, echoed back as received.
    #[serde(rename = "userAnswer")]
    pub user_answer: SubmittedAnswer,

    #[serde(rename = "correctAnswer")]
    pub correct_answer: CorrectAnswer,
}

/// A fully graded exam.
#[derive(Debug, Clone)]
pub struct ScoredExam {
    pub total_score: f64,
    pub results: Vec<ScoreResult>,
}

impl ScoredExam {
    /// The exam total formatted to two decimal places, as reported to the
    /// caller.
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total_score)
    }
}

/// Wire envelope for a scoring request: either the graded exam or a single
/// batch-level failure with no partial results.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScoringOutcome {
    Graded {
        success: bool,
        score: String,
        result: Vec<ScoreResult>,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl ScoringOutcome {
    pub fn graded(exam: ScoredExam) -> Self {
        ScoringOutcome::Graded {
            success: true,
            score: exam.formatted_total(),
            result: exam.results,
        }
    }

    pub fn failed(err: ScoringError) -> Self {
        ScoringOutcome::Failed {
            success: false,
            error: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScoringOutcome::Graded { .. })
    }
}

impl From<Result<ScoredExam, ScoringError>> for ScoringOutcome {
    fn from(result: Result<ScoredExam, ScoringError>) -> Self {
        match result {
            Ok(exam) => ScoringOutcome::graded(exam),
            Err(err) => ScoringOutcome::failed(err),
        }
    }
}
