// src/models/answer.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::text::is_blank;

/// One submitted answer, as sent by the exam-taking client.
///
/// Flat wire shape mirroring [`super::question::QuestionRecord`]: only the
/// field matching the paired question's type is expected to be populated.
/// The loosely-typed fields (`trueFalseAnswer`, `singleWords`) keep their
/// raw JSON form here and are coerced by the accessor methods below, so the
/// scorers themselves never see malformed shapes. Unrecognized fields are
/// preserved and echoed back in the result's `userAnswer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmittedAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(rename = "multiChoices", skip_serializing_if = "Vec::is_empty")]
    pub multi_choices: Vec<i64>,

    #[serde(rename = "trueFalseAnswer", skip_serializing_if = "Value::is_null")]
    pub true_false_answer: Value,

    #[serde(rename = "singleWords", skip_serializing_if = "Value::is_null")]
    pub single_words: Value,

    #[serde(rename = "submitEssay", skip_serializing_if = "Option::is_none")]
    pub submit_essay: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl SubmittedAnswer {
    /// Per-answer weight multiplier. Absent and `0` both fall back to 1,
    /// matching the stored submission format's historical behavior.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w != 0.0 => w,
            _ => 1.0,
        }
    }

    /// Selected option indices for a multiple-choice question.
    pub fn multi_choice_selection(&self) -> &[i64] {
        &self.multi_choices
    }

    /// The true/false submission coerced to a string; blank when absent
    /// or empty.
    pub fn true_false_value(&self) -> String {
        if is_blank(&self.true_false_answer) {
            return String::new();
        }
        scalar_to_string(&self.true_false_answer)
    }

    /// The single-word submission coerced to a word list. A scalar value
    /// becomes a one-element list; anything else non-array becomes empty.
    pub fn single_word_entries(&self) -> Vec<String> {
        if is_blank(&self.single_words) {
            return Vec::new();
        }
        match &self.single_words {
            Value::Array(items) => items.iter().map(scalar_to_string).collect(),
            scalar @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
                vec![scalar_to_string(scalar)]
            }
            _ => Vec::new(),
        }
    }

    /// The submitted essay text; blank when absent.
    pub fn essay_text(&self) -> &str {
        self.submit_essay.as_deref().unwrap_or_default()
    }
}

/// Stringifies a scalar JSON value the way the scorers expect; non-scalar
/// values become the empty string and score 0 downstream.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
