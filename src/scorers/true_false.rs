// src/scorers/true_false.rs

use crate::scorers::FULL_SCORE;

/// Scores a true/false submission by case- and whitespace-insensitive
/// string equality. A blank submission or a blank stored answer scores 0.
pub fn score_true_false(submitted: &str, correct: &str) -> f64 {
    if submitted.trim().is_empty() || correct.trim().is_empty() {
        return 0.0;
    }

    if submitted.trim().to_lowercase() == correct.trim().to_lowercase() {
        FULL_SCORE
    } else {
        0.0
    }
}
