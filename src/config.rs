//! Settings read from the environment at startup. `main` loads `.env` first.

use crate::quiz::session::MAX_QUESTIONS;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite file holding every chat's dialogue state.
    pub db_path: String,
    /// Offered first on the question-count keyboard.
    pub default_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // teloxide reads the token itself in `Bot::from_env`; fail early with a clear message.
        if std::env::var("TELOXIDE_TOKEN").is_err() {
            return Err(ConfigError::MissingVar("TELOXIDE_TOKEN".to_string()));
        }

        let db_path = std::env::var("QUIZ_DB_PATH").unwrap_or_else(|_| "db.sqlite".to_string());

        let default_count = match std::env::var("QUIZ_DEFAULT_COUNT") {
            Ok(raw) => parse_count(&raw)?,
            Err(_) => 10,
        };

        Ok(Self {
            db_path,
            default_count,
        })
    }
}

fn parse_count(raw: &str) -> Result<usize, ConfigError> {
    let invalid = || {
        ConfigError::InvalidValue(
            "QUIZ_DEFAULT_COUNT".to_string(),
            format!("'{}' is not a number between 1 and {}", raw, MAX_QUESTIONS),
        )
    };
    let count = raw.trim().parse::<usize>().map_err(|_| invalid())?;
    if count == 0 || count > MAX_QUESTIONS {
        return Err(invalid());
    }
    Ok(count)
}
