// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Default chat-completions endpoint base.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default grading model.
const DEFAULT_ESSAY_MODEL: &str = "gpt-4o-mini";
/// Default hard deadline for one oracle call, in seconds.
const DEFAULT_ESSAY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub essay_model: String,
    pub essay_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .expect("OPENAI_API_KEY must be set");

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let essay_model = env::var("ESSAY_MODEL")
            .unwrap_or_else(|_| DEFAULT_ESSAY_MODEL.to_string());

        let essay_timeout_secs = env::var("ESSAY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ESSAY_TIMEOUT_SECS);

        Self {
            openai_api_key,
            openai_base_url,
            essay_model,
            essay_timeout_secs,
        }
    }
}
