//! A seeded trivia quiz that gets more chaotic with every question.

pub mod chaos;
pub mod config;
pub mod quiz;
