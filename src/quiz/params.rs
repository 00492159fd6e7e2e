//! Share codes: everything needed to rebuild a quiz (and optionally its answers)
//! in one line of text, e.g. `12345:10:Science,Space:[0,2,-1]`.

use std::fmt;
use std::str::FromStr;

use super::session::MAX_QUESTIONS;
use super::Category;

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("the share code is empty")]
    Empty,
    #[error("invalid seed {0:?}")]
    InvalidSeed(String),
    #[error("invalid question count {0:?}")]
    InvalidCount(String),
    #[error("invalid answer list: {0}")]
    InvalidAnswers(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct QuizParams {
    pub seed: u32,
    pub count: usize,
    pub categories: Vec<Category>,
    pub answers: Vec<i32>,
}

impl fmt::Display for QuizParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let categories = self
            .categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}:{}:{}", self.seed, self.count, categories)?;
        if !self.answers.is_empty() {
            let answers = self
                .answers
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(",");
            write!(f, ":[{}]", answers)?;
        }
        Ok(())
    }
}

impl FromStr for QuizParams {
    type Err = ParamsError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ParamsError::Empty);
        }
        let mut parts = code.splitn(4, ':');

        let seed_part = parts.next().unwrap_or_default().trim();
        let seed = seed_part
            .parse::<u32>()
            .map_err(|_| ParamsError::InvalidSeed(seed_part.to_string()))?;

        // A bare seed replays a full quiz.
        let count = match parts.next().map(str::trim) {
            None | Some("") => MAX_QUESTIONS,
            Some(count_part) => count_part
                .parse::<usize>()
                .map_err(|_| ParamsError::InvalidCount(count_part.to_string()))?,
        };

        // Unknown labels are dropped rather than rejected.
        let categories = parts
            .next()
            .unwrap_or_default()
            .split(',')
            .filter_map(Category::from_label)
            .collect();

        let answers = match parts.next().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(answers_part) => serde_json::from_str::<Vec<i32>>(answers_part)?,
        };

        Ok(Self {
            seed,
            count,
            categories,
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_full_code() {
        let params = QuizParams {
            seed: 12345,
            count: 10,
            categories: vec![Category::Science, Category::HumanBody],
            answers: vec![0, 2, -1],
        };
        assert_eq!(params.to_string(), "12345:10:Science,Human Body:[0,2,-1]");
        assert_eq!(params.to_string().parse::<QuizParams>().unwrap(), params);
    }

    #[test]
    fn omits_answers_when_there_are_none() {
        let params = QuizParams {
            seed: 7,
            count: 50,
            categories: Vec::new(),
            answers: Vec::new(),
        };
        assert_eq!(params.to_string(), "7:50:");
    }

    #[test]
    fn seed_alone_is_enough() {
        let params: QuizParams = "424242".parse().unwrap();
        assert_eq!(params.seed, 424242);
        assert_eq!(params.count, MAX_QUESTIONS);
        assert!(params.categories.is_empty());
        assert!(params.answers.is_empty());
    }

    #[test]
    fn unknown_categories_are_dropped() {
        let params: QuizParams = "1:5:space,Astrology,food".parse().unwrap();
        assert_eq!(params.categories, vec![Category::Space, Category::Food]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("".parse::<QuizParams>(), Err(ParamsError::Empty)));
        assert!(matches!("abc:5".parse::<QuizParams>(), Err(ParamsError::InvalidSeed(_))));
        assert!(matches!("-3:5".parse::<QuizParams>(), Err(ParamsError::InvalidSeed(_))));
        assert!(matches!("3:five".parse::<QuizParams>(), Err(ParamsError::InvalidCount(_))));
        assert!(matches!("3:5::[1,".parse::<QuizParams>(), Err(ParamsError::InvalidAnswers(_))));
    }
}
