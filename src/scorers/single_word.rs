// src/scorers/single_word.rs

use std::collections::HashSet;

use crate::scorers::FULL_SCORE;
use crate::utils::text::normalize;

/// Scores a single-word submission by strict set equality over normalized
/// words (order-independent, case- and punctuation-insensitive).
///
/// Entries that normalize to the empty string are dropped from both sides.
/// When every accepted entry is blank the question is treated as optional:
/// an equally blank submission scores full marks, anything else 0. A
/// synonym, misspelling, or one extra or missing word scores 0; there is
/// no partial credit.
pub fn score_single_word(words: &[String], accepted: &[String]) -> f64 {
    if accepted.is_empty() {
        tracing::debug!("single word: no accepted answers defined, scoring 0");
        return 0.0;
    }

    let correct: HashSet<String> = accepted
        .iter()
        .map(|w| normalize(w))
        .filter(|w| !w.is_empty())
        .collect();

    let submitted: HashSet<String> = words
        .iter()
        .map(|w| normalize(w))
        .filter(|w| !w.is_empty())
        .collect();

    if correct.is_empty() {
        // Optional/blank question: full marks only for a blank submission.
        return if submitted.is_empty() { FULL_SCORE } else { 0.0 };
    }

    if submitted.len() != correct.len() {
        tracing::debug!(
            "single word: {} submitted vs {} accepted, scoring 0",
            submitted.len(),
            correct.len()
        );
        return 0.0;
    }

    for word in &submitted {
        if !correct.contains(word) {
            tracing::debug!("single word: '{}' not accepted, scoring 0", word);
            return 0.0;
        }
    }

    FULL_SCORE
}
