pub mod bank;
pub mod generator;
pub mod params;
pub mod rng;
pub mod session;

use std::fmt;

/// Sentinel stored in the answer log for a question that was never answered.
pub const UNANSWERED: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DifficultyTier {
    Mild,
    Medium,
    Extreme,
}

impl DifficultyTier {
    /// Tier order used when stratifying a quiz.
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Mild,
        DifficultyTier::Medium,
        DifficultyTier::Extreme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyTier::Mild => "mild",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Extreme => "extreme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Science,
    History,
    Nature,
    Space,
    HumanBody,
    Food,
    Sport,
    Film,
    Country,
    Animals,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Science,
        Category::History,
        Category::Nature,
        Category::Space,
        Category::HumanBody,
        Category::Food,
        Category::Sport,
        Category::Film,
        Category::Country,
        Category::Animals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Science => "Science",
            Category::History => "History",
            Category::Nature => "Nature",
            Category::Space => "Space",
            Category::HumanBody => "Human Body",
            Category::Food => "Food",
            Category::Sport => "Sport",
            Category::Film => "Film",
            Category::Country => "Country",
            Category::Animals => "Animals",
        }
    }

    /// Case-insensitive lookup by label. Anything unknown is `None`, never an error.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the compiled-in question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_option_index: usize,
    pub tier: DifficultyTier,
    pub category: Category,
}

impl QuestionRecord {
    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct_option_index]
    }

    /// `answer` is an answer-log entry, so the sentinel is never correct.
    pub fn is_correct(&self, answer: i32) -> bool {
        answer != UNANSWERED && answer == self.correct_option_index as i32
    }
}
