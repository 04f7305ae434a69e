// src/engine.rs

use std::sync::Arc;

use crate::error::ScoringError;
use crate::grader::EssayGrader;
use crate::models::answer::SubmittedAnswer;
use crate::models::outcome::{CorrectAnswer, ScoreResult, ScoredExam, ScoringOutcome};
use crate::models::question::{AnswerKey, QuestionRecord};
use crate::scorers::{self, essay, multi_choice, single_word, true_false};

/// Scores one exam submission end to end.
///
/// Stateless apart from the injected essay-grading oracle: each call is a
/// single sequential pass over the questions, and only essay questions
/// suspend (one oracle call each).
pub struct ScoringEngine {
    grader: Arc<dyn EssayGrader>,
}

impl ScoringEngine {
    pub fn new(grader: Arc<dyn EssayGrader>) -> Self {
        Self { grader }
    }

    /// Scores `answers` against `questions`, paired positionally.
    ///
    /// Walks indices `0..declared_question_count`, so answers beyond the
    /// exam's declared length are ignored. An index with no question or no
    /// answer contributes nothing and emits no result entry. A question
    /// record that fails boundary validation aborts the whole batch with
    /// `Err`; no partial results are returned in that case.
    pub async fn score_exam(
        &self,
        answers: &[Option<SubmittedAnswer>],
        questions: &[QuestionRecord],
        declared_question_count: usize,
    ) -> Result<ScoredExam, ScoringError> {
        let mut total_score = 0.0;
        let mut results = Vec::new();

        for i in 0..declared_question_count {
            let Some(record) = questions.get(i) else {
                tracing::debug!("no question at index {}, skipping", i);
                continue;
            };
            let Some(answer) = answers.get(i).and_then(|a| a.as_ref()) else {
                tracing::debug!("no answer at index {}, skipping", i);
                continue;
            };

            let question = record.to_question()?;
            let weight = answer.effective_weight();

            let raw_score = match &question.key {
                AnswerKey::Multichoice { options } => {
                    multi_choice::score_multi_choice(answer.multi_choice_selection(), options)
                }
                AnswerKey::TrueFalse { value } => {
                    true_false::score_true_false(&answer.true_false_value(), value)
                }
                AnswerKey::SingleWord { accepted } => {
                    single_word::score_single_word(&answer.single_word_entries(), accepted)
                }
                AnswerKey::Essay { reference } => {
                    essay::score_essay(self.grader.as_ref(), reference, answer.essay_text())
                        .await
                        .score
                }
            };

            // The weight caps the question's contribution; the raw score
            // scales it as a fraction of 10.
            let weighted_score = raw_score * weight / 10.0;
            total_score += weighted_score;

            results.push(ScoreResult {
                question: question.text.clone(),
                question_type: question.key.question_type(),
                score: weighted_score,
                is_correct: raw_score == scorers::FULL_SCORE,
                weight,
                user_answer: answer.clone(),
                correct_answer: display_answer(&question.key),
            });
        }

        tracing::info!(
            "scored {} of {} declared questions, total {:.2}",
            results.len(),
            declared_question_count,
            total_score
        );

        Ok(ScoredExam {
            total_score,
            results,
        })
    }

    /// Like [`ScoringEngine::score_exam`], collapsed into the wire
    /// envelope: a batch failure becomes `success: false` with no partial
    /// results.
    pub async fn score_exam_outcome(
        &self,
        answers: &[Option<SubmittedAnswer>],
        questions: &[QuestionRecord],
        declared_question_count: usize,
    ) -> ScoringOutcome {
        match self
            .score_exam(answers, questions, declared_question_count)
            .await
        {
            Ok(exam) => ScoringOutcome::graded(exam),
            Err(err) => {
                tracing::error!("scoring batch failed: {}", err);
                ScoringOutcome::failed(err)
            }
        }
    }
}

/// Type-appropriate rendering of the correct answer for result records.
fn display_answer(key: &AnswerKey) -> CorrectAnswer {
    match key {
        AnswerKey::Multichoice { options } => CorrectAnswer::Texts(
            options
                .iter()
                .filter(|option| option.is_correct)
                .map(|option| option.option_text.clone())
                .collect(),
        ),
        AnswerKey::TrueFalse { value } => CorrectAnswer::Text(value.clone()),
        AnswerKey::SingleWord { accepted } => CorrectAnswer::Texts(accepted.clone()),
        AnswerKey::Essay { reference } => CorrectAnswer::Text(reference.clone()),
    }
}
