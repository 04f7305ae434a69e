// src/lib.rs

pub mod config;
pub mod engine;
pub mod error;
pub mod grader;
pub mod models;
pub mod scorers;
pub mod utils;

// Re-export specific items for convenience if needed
pub use engine::ScoringEngine;
pub use grader::{EssayGrader, OpenAiGrader};
pub use models::outcome::ScoringOutcome;
