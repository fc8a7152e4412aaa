use crate::errors::{ReviewError, ReviewResult};

pub const DEFAULT_LANGUAGE: &str = "C#";

/// Review-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Language label written into the prompt, e.g. "C#".
    pub language: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ReviewConfig {
    /// Reads `REVIEW_LANGUAGE` (default `C#`).
    pub fn from_env() -> ReviewResult<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    pub fn from_env_with<F>(lookup: F) -> ReviewResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("REVIEW_LANGUAGE") {
            None => Ok(Self::default()),
            Some(v) if v.trim().is_empty() => Err(ReviewError::Config(
                "REVIEW_LANGUAGE is set but empty".to_string(),
            )),
            Some(v) => Ok(Self {
                language: v.trim().to_string(),
            }),
        }
    }
}
