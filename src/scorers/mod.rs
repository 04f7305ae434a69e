// src/scorers/mod.rs

pub mod essay;
pub mod multi_choice;
pub mod single_word;
pub mod true_false;

/// Raw score of a perfect answer. The three deterministic scorers return
/// exactly 0 or this; only the essay composite is continuous in between.
pub const FULL_SCORE: f64 = 10.0;
