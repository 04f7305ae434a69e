// src/scorers/multi_choice.rs

use std::collections::HashSet;

use crate::models::question::ChoiceOption;
use crate::scorers::FULL_SCORE;

/// Scores a multiple-choice submission by exact set comparison.
///
/// The submitted indices (duplicates collapse) must equal the set of
/// indices whose option is flagged correct. No partial credit: a subset,
/// superset, or disjoint selection scores 0. A question with no options
/// always scores 0.
pub fn score_multi_choice(selected: &[i64], options: &[ChoiceOption]) -> f64 {
    if options.is_empty() {
        tracing::debug!("multichoice: no options defined, scoring 0");
        return 0.0;
    }

    let correct: HashSet<i64> = options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.is_correct)
        .map(|(idx, _)| idx as i64)
        .collect();

    let chosen: HashSet<i64> = selected.iter().copied().collect();

    if chosen.len() != correct.len() {
        tracing::debug!(
            "multichoice: {} selected vs {} correct, scoring 0",
            chosen.len(),
            correct.len()
        );
        return 0.0;
    }

    for choice in &chosen {
        if !correct.contains(choice) {
            tracing::debug!("multichoice: incorrect choice {}, scoring 0", choice);
            return 0.0;
        }
    }

    FULL_SCORE
}
