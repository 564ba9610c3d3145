use std::path::PathBuf;

use crate::db::Database;
use crate::error::{KazikeError, Result};
use crate::matching::DEFAULT_MATCH_LIMIT;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub match_limit: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("KAZIKE_DB")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Database::default_path);

        let match_limit = match lookup("KAZIKE_MATCH_LIMIT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(KazikeError::Config(format!(
                        "KAZIKE_MATCH_LIMIT must be a positive integer, got '{}'",
                        raw
                    )));
                }
            },
            None => DEFAULT_MATCH_LIMIT,
        };

        Ok(Config {
            db_path,
            match_limit,
            log_level: lookup("KAZIKE_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
