// src/models/mod.rs

pub mod answer;
pub mod outcome;
pub mod question;
