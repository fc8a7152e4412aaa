//! Crate-wide error hierarchy for git-repo-fetcher.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type GitRepoFetcherResult<T> = Result<T, GitRepoFetcherError>;

/// Root error type for the git-repo-fetcher crate.
#[derive(Debug, Error)]
pub enum GitRepoFetcherError {
    /// Provider (GitHub) related failure.
    #[error(transparent)]
    Provider(#[from] GitRepoFetcherProviderError),

    /// Configuration problems (bad base URL, empty suffix).
    #[error(transparent)]
    Config(#[from] GitRepoFetcherConfigError),
}

/// Provider-specific error used inside the provider layer.
#[derive(Debug, Error)]
pub enum GitRepoFetcherProviderError {
    /// Unauthorized (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// Forbidden (HTTP 403).
    #[error("forbidden")]
    Forbidden,

    /// Not found (HTTP 404).
    #[error("not found")]
    NotFound,

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited,

    /// Gateway / server error (HTTP 5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Other HTTP status (non-2xx) not covered by specific variants.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// Unexpected/invalid shape of provider response.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Configuration and setup errors.
#[derive(Debug, Error)]
pub enum GitRepoFetcherConfigError {
    /// Invalid base API URL.
    #[error("invalid base api url: {0}")]
    InvalidBaseUrl(String),

    /// Source suffix filter is empty.
    #[error("source suffix must not be empty")]
    EmptySuffix,
}

// ===== Conversions for `?` ergonomics at the crate root =====

impl From<reqwest::Error> for GitRepoFetcherError {
    fn from(e: reqwest::Error) -> Self {
        GitRepoFetcherError::Provider(GitRepoFetcherProviderError::from(e))
    }
}

// ===== Mapping from reqwest::Error into GitRepoFetcherProviderError =====

impl From<reqwest::Error> for GitRepoFetcherProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return GitRepoFetcherProviderError::Timeout;
        }

        if let Some(status) = e.status() {
            let code = status.as_u16();
            return match code {
                401 => GitRepoFetcherProviderError::Unauthorized,
                403 => GitRepoFetcherProviderError::Forbidden,
                404 => GitRepoFetcherProviderError::NotFound,
                429 => GitRepoFetcherProviderError::RateLimited,
                500..=599 => GitRepoFetcherProviderError::Server(code),
                _ => GitRepoFetcherProviderError::HttpStatus(code),
            };
        }

        if e.is_decode() {
            return GitRepoFetcherProviderError::InvalidResponse(e.to_string());
        }

        GitRepoFetcherProviderError::Network(e.to_string())
    }
}
