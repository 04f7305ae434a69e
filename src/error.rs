// src/error.rs

use std::fmt;

/// Batch-level scoring error.
///
/// Any variant aborts the whole aggregation pass: the caller receives a
/// single failure envelope and no partial per-question results. Per-question
/// problems (missing answer, missing payload) are handled locally inside the
/// aggregator and never surface here.
#[derive(Debug)]
pub enum ScoringError {
    /// A question record failed boundary validation (e.g. non-positive mark).
    InvalidQuestion(String),

    /// The submission document could not be interpreted at all.
    InvalidSubmission(String),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::InvalidQuestion(msg) => write!(f, "invalid question data: {}", msg),
            ScoringError::InvalidSubmission(msg) => write!(f, "invalid submission: {}", msg),
        }
    }
}

impl std::error::Error for ScoringError {}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        ScoringError::InvalidSubmission(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ScoringError {
    fn from(err: validator::ValidationErrors) -> Self {
        ScoringError::InvalidQuestion(err.to_string())
    }
}

/// Failure of a single essay-grading oracle call.
///
/// Never escapes the essay scorer: every variant degrades to a zero
/// composite so one bad oracle call cannot fail the exam submission.
#[derive(Debug)]
pub enum GraderError {
    /// Transport-level failure (connect, TLS, body read).
    Transport(String),

    /// The oracle answered with a non-success HTTP status.
    Status(u16),

    /// The response body did not match the expected shape.
    MalformedResponse(String),

    /// The call exceeded the configured deadline (seconds).
    Timeout(u64),
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::Transport(msg) => write!(f, "oracle transport error: {}", msg),
            GraderError::Status(code) => write!(f, "oracle returned HTTP {}", code),
            GraderError::MalformedResponse(msg) => {
                write!(f, "malformed oracle response: {}", msg)
            }
            GraderError::Timeout(secs) => write!(f, "oracle call timed out after {}s", secs),
        }
    }
}

impl std::error::Error for GraderError {}

impl From<reqwest::Error> for GraderError {
    fn from(err: reqwest::Error) -> Self {
        GraderError::Transport(err.to_string())
    }
}
