use log::{error, info, warn};
use rand::Rng;

use super::generator::{generate_quiz, DEFAULT_SEED};
use super::params::QuizParams;
use super::{bank, Category, QuestionRecord, UNANSWERED};

pub const MAX_QUESTIONS: usize = 50;

/// Everything one chat needs to walk through a quiz. Lives inside the dialogue
/// state, so questions are kept as ids and resolved against the bank on access.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuizSession {
    seed: u32,
    question_count: usize,
    categories: Vec<Category>,
    question_ids: Vec<u32>,
    answers: Vec<i32>,
    current_index: usize,
    selected_answer: Option<usize>,
    completed: bool,
    started: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            question_count: MAX_QUESTIONS,
            categories: Vec::new(),
            question_ids: Vec::new(),
            answers: Vec::new(),
            current_index: 0,
            selected_answer: None,
            completed: false,
            started: false,
        }
    }
}

/// Absent or zero means a full quiz; anything else is kept within 1..=50.
pub fn clamp_count(count: Option<usize>) -> usize {
    match count {
        None | Some(0) => MAX_QUESTIONS,
        Some(n) => n.clamp(1, MAX_QUESTIONS),
    }
}

impl QuizSession {
    /// Starts a fresh quiz. Without a seed a random one in [0, 1_000_000) is picked.
    pub fn initialize(&mut self, seed: Option<u32>, count: Option<usize>, categories: Vec<Category>) {
        self.seed = seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..1_000_000));
        self.question_count = clamp_count(count);
        self.categories = categories;
        self.regenerate();

        self.answers.clear();
        self.current_index = 0;
        self.selected_answer = None;
        self.completed = false;
        self.started = true;

        info!(
            "Quiz initialized: seed={}, count={}, categories={:?}, generated={}",
            self.seed,
            self.question_count,
            self.categories,
            self.question_ids.len()
        );
    }

    /// Rebuilds the quiz described by a share code. Answers carried by the code
    /// are loaded and reconciled; a code with answers is treated as finished.
    pub fn load_from_params(&mut self, params: &QuizParams) {
        self.seed = params.seed;
        // A shared count is taken literally, so 0 still yields one question.
        self.question_count = params.count.clamp(1, MAX_QUESTIONS);
        self.categories = params.categories.clone();
        self.regenerate();

        self.current_index = 0;
        self.selected_answer = None;
        self.started = true;
        self.completed = !params.answers.is_empty();
        self.load_answers(params.answers.clone());

        info!(
            "Quiz loaded from params: seed={}, count={}, categories={:?}, generated={}",
            self.seed,
            self.question_count,
            self.categories,
            self.question_ids.len()
        );
    }

    fn regenerate(&mut self) {
        self.question_ids = generate_quiz(bank::all(), self.seed, self.question_count, &self.categories)
            .iter()
            .map(|q| q.id)
            .collect();
    }

    pub fn select_answer(&mut self, answer_index: usize) {
        self.selected_answer = Some(answer_index);
    }

    /// Appends the pending selection to the answer log. False if nothing was selected.
    pub fn submit_answer(&mut self) -> bool {
        match self.selected_answer.take() {
            Some(answer) => {
                self.answers.push(answer as i32);
                true
            }
            None => false,
        }
    }

    /// Moves on; returns true once the last question has been passed.
    pub fn next_question(&mut self) -> bool {
        if self.current_index + 1 < self.question_ids.len() {
            self.current_index += 1;
            false
        } else {
            self.completed = true;
            true
        }
    }

    pub fn go_to_question(&mut self, index: usize) {
        if index < self.question_ids.len() {
            self.current_index = index;
            self.selected_answer = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn params(&self) -> QuizParams {
        QuizParams {
            seed: self.seed,
            count: self.question_count,
            categories: self.categories.clone(),
            answers: self.answers.clone(),
        }
    }

    /// Pads the answer log with the unanswered sentinel or trims it so that it
    /// lines up with the questions.
    pub fn validate_answers_length(&mut self) {
        let questions = self.question_ids.len();
        let answers = self.answers.len();
        if questions == answers {
            return;
        }
        warn!("Length mismatch! Questions: {}, Answers: {}", questions, answers);
        if answers < questions {
            warn!("Padding {} missing answers with {}", questions - answers, UNANSWERED);
            self.answers.resize(questions, UNANSWERED);
        } else {
            warn!("Trimming {} extra answers", answers - questions);
            self.answers.truncate(questions);
        }
    }

    pub fn load_answers(&mut self, answers: Vec<i32>) {
        self.answers = answers;
        if !self.answers.is_empty() {
            self.validate_answers_length();
        }
    }

    /// Accepts a JSON array of answer indexes. Entries that are not integers
    /// count as unanswered; a string that is not JSON clears the log.
    pub fn load_answers_from_str(&mut self, answers: &str) {
        match serde_json::from_str::<serde_json::Value>(answers) {
            Ok(serde_json::Value::Array(items)) => {
                let parsed = items
                    .iter()
                    .map(|item| {
                        item.as_i64()
                            .and_then(|n| i32::try_from(n).ok())
                            .unwrap_or(UNANSWERED)
                    })
                    .collect();
                self.answers = parsed;
                self.validate_answers_length();
            }
            Ok(other) => warn!("Ignoring answers that are not a list: {}", other),
            Err(err) => {
                error!("Failed to parse answers: {}", err);
                self.answers.clear();
            }
        }
    }

    pub fn questions(&self) -> Vec<&'static QuestionRecord> {
        self.question_ids.iter().filter_map(|id| bank::find(*id)).collect()
    }

    pub fn current_question(&self) -> Option<&'static QuestionRecord> {
        self.question_ids
            .get(self.current_index)
            .and_then(|id| bank::find(*id))
    }

    pub fn answers(&self) -> &[i32] {
        &self.answers
    }

    /// Answer-log entry for a question, or the sentinel if there is none yet.
    pub fn answer_at(&self, index: usize) -> i32 {
        self.answers.get(index).copied().unwrap_or(UNANSWERED)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn has_questions(&self) -> bool {
        !self.question_ids.is_empty()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.question_ids.len()
    }

    /// Percentage of the way through, counting the current question.
    pub fn progress(&self) -> f64 {
        if self.question_ids.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.question_ids.len() as f64 * 100.0
    }

    pub fn score(&self) -> usize {
        self.questions()
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| question.is_correct(**answer))
            .count()
    }

    pub fn percentage(&self) -> u32 {
        if self.question_ids.is_empty() {
            return 0;
        }
        (self.score() as f64 / self.question_ids.len() as f64 * 100.0).round() as u32
    }
}
