// src/grader.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::GraderError;
use crate::scorers::essay::EssaySubScores;

/// External essay-grading oracle.
///
/// Injected into the scoring engine at construction time so tests can
/// substitute a deterministic stub and production can swap oracles without
/// touching the composite formula.
#[async_trait]
pub trait EssayGrader: Send + Sync {
    /// Judges `submission` against `reference` and returns the three
    /// sub-scores. Implementations report failures via [`GraderError`];
    /// the essay scorer turns any failure into a zero composite.
    async fn grade(&self, reference: &str, submission: &str)
    -> Result<EssaySubScores, GraderError>;
}

/// Grading oracle backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiGrader {
    client: reqwest::Client,
    config: Config,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiGrader {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Grading instruction sent to the oracle: relevance gate first, then
    /// three 0-10 sub-scores, answered as a bare comma-separated triple.
    fn build_prompt(reference: &str, submission: &str) -> String {
        format!(
            r#"Evaluate the student's answer by comparing it to the correct answer and scoring it based on the following criteria:

1. **Relevance to Correct Answer:** If the student's response is unrelated to the correct answer, assign 0 to all categories. If related, proceed with evaluation.

2. **Grammar (0-10):** Assess sentence structure, spelling, and punctuation.

3. **Concept Understanding (0-10):** Rate how well the student demonstrates knowledge of the topic.

4. **Completeness (0-10):** Evaluate how thoroughly the student answers the question.

Provide only three numerical scores separated by commas, in the format: "8,7,9".

**Correct Answer:** {reference}
**Student Answer:** {submission}"#
        )
    }
}

#[async_trait]
impl EssayGrader for OpenAiGrader {
    async fn grade(
        &self,
        reference: &str,
        submission: &str,
    ) -> Result<EssaySubScores, GraderError> {
        let url = format!(
            "{}/chat/completions",
            self.config.openai_base_url.trim_end_matches('/')
        );

        let body = json!({
            "model": self.config.essay_model,
            "messages": [
                {
                    "role": "user",
                    "content": Self::build_prompt(reference, submission),
                }
            ],
            "max_tokens": 20,
        });

        let request = self
            .client
            .post(&url)
            .bearer_auth(&self.config.openai_api_key)
            .json(&body)
            .send();

        // Hard deadline on the whole call; a slow oracle scores like a
        // failed one.
        let response =
            tokio::time::timeout(Duration::from_secs(self.config.essay_timeout_secs), request)
                .await
                .map_err(|_| GraderError::Timeout(self.config.essay_timeout_secs))??;

        if !response.status().is_success() {
            return Err(GraderError::Status(response.status().as_u16()));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GraderError::MalformedResponse(e.to_string()))?;

        let verdict = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| GraderError::MalformedResponse("no choices in response".to_string()))?;

        tracing::debug!("oracle verdict: {:?}", verdict);

        Ok(EssaySubScores::parse(verdict))
    }
}
