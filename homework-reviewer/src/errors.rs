//! Crate-wide error type for homework-reviewer.
//!
//! Both upstream crates already classify their failures; this type only
//! tells the caller which side of the pipeline failed.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Root error type for the review pipeline.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Listing or downloading repository files failed.
    #[error("failed to fetch repository sources: {0}")]
    Fetch(#[from] git_repo_fetcher::GitRepoFetcherError),

    /// The chat-completion call failed or returned an unexpected shape.
    #[error("failed to obtain review from LLM: {0}")]
    Llm(#[from] ai_llm_service::AiLlmError),

    /// Review settings are invalid.
    #[error("invalid review config: {0}")]
    Config(String),
}
