// src/scorers/essay.rs

use serde::Serialize;

use crate::grader::EssayGrader;

/// Weight of the grammar sub-score in the composite.
const GRAMMAR_WEIGHT: f64 = 0.1;
/// Weight of the concept-understanding sub-score in the composite.
const CONCEPT_WEIGHT: f64 = 0.6;
/// Weight of the completeness sub-score in the composite.
const COMPLETENESS_WEIGHT: f64 = 0.3;

/// The three sub-scores the grading oracle returns for one essay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EssaySubScores {
    pub grammar: f64,
    pub concept: f64,
    pub completeness: f64,
}

impl EssaySubScores {
    /// Parses the oracle's `"g,c,p"` verdict.
    ///
    /// Tolerant by design: surrounding whitespace is ignored, a token that
    /// fails to parse as a finite number becomes 0, missing tokens become
    /// 0, and surplus tokens beyond the third are discarded. Out-of-range
    /// values are kept as-is; the composite does not clamp.
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.trim().split(',').map(|token| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        });

        Self {
            grammar: tokens.next().unwrap_or(0.0),
            concept: tokens.next().unwrap_or(0.0),
            completeness: tokens.next().unwrap_or(0.0),
        }
    }

    /// Weighted blend of the sub-scores, rounded to two decimals.
    ///
    /// Concept understanding dominates: this grades knowledge, not prose.
    pub fn composite(&self) -> f64 {
        let blended = self.grammar * GRAMMAR_WEIGHT
            + self.concept * CONCEPT_WEIGHT
            + self.completeness * COMPLETENESS_WEIGHT;
        (blended * 100.0).round() / 100.0
    }
}

/// Composite essay score plus the sub-scores it was blended from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EssayScore {
    pub score: f64,
    #[serde(flatten)]
    pub sub_scores: EssaySubScores,
}

impl EssayScore {
    fn zero() -> Self {
        Self {
            score: 0.0,
            sub_scores: EssaySubScores::default(),
        }
    }
}

/// Scores one essay against its reference answer.
///
/// A blank submission or blank reference scores 0 without consulting the
/// oracle. Any oracle failure (transport, status, parse, timeout) also
/// degrades to a zero composite: essay grading never aborts the exam
/// submission, it only loses the points.
pub async fn score_essay(grader: &dyn EssayGrader, reference: &str, submission: &str) -> EssayScore {
    if submission.trim().is_empty() || reference.trim().is_empty() {
        return EssayScore::zero();
    }

    match grader.grade(reference, submission).await {
        Ok(sub_scores) => EssayScore {
            score: sub_scores.composite(),
            sub_scores,
        },
        Err(err) => {
            tracing::error!("essay grading failed, scoring 0: {}", err);
            EssayScore::zero()
        }
    }
}
