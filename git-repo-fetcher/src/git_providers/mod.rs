//! Repository content providers.
//!
//! Only GitHub is supported. [`ProviderConfig`] carries everything the
//! client needs; [`ProviderConfig::from_env`] reads it from the environment.

pub mod types;
pub use types::*;

pub mod github;

use crate::errors::{GitRepoFetcherConfigError, GitRepoFetcherResult};

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_SOURCE_SUFFIX: &str = ".cs";

/// User agent sent with every request; GitHub rejects requests without one.
pub const USER_AGENT: &str = "HomeworkChecker";

/// Runtime configuration for the provider client.
#[derive(Clone)]
pub struct ProviderConfig {
    /// API base, e.g. "https://api.github.com".
    pub base_api: String,
    /// Optional access token; anonymous access when `None`.
    pub token: Option<String>,
    /// Only listing entries whose path ends with this suffix are fetched.
    pub source_suffix: String,
}

impl ProviderConfig {
    /// Reads `GITHUB_API_URL`, `GITHUB_TOKEN` and `REVIEW_SOURCE_SUFFIX`
    /// from the process environment.
    pub fn from_env() -> GitRepoFetcherResult<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Same as [`ProviderConfig::from_env`] with an arbitrary lookup.
    ///
    /// # Errors
    /// - [`GitRepoFetcherConfigError::InvalidBaseUrl`] if the base is not http/https
    pub fn from_env_with<F>(lookup: F) -> GitRepoFetcherResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_api = non_empty("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_GITHUB_API.into());
        let token = non_empty("GITHUB_TOKEN");
        let source_suffix =
            non_empty("REVIEW_SOURCE_SUFFIX").unwrap_or_else(|| DEFAULT_SOURCE_SUFFIX.into());

        let cfg = Self {
            base_api,
            token,
            source_suffix,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks the base URL scheme and the suffix.
    pub fn validate(&self) -> GitRepoFetcherResult<()> {
        let base = self.base_api.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(GitRepoFetcherConfigError::InvalidBaseUrl(self.base_api.clone()).into());
        }
        if self.source_suffix.is_empty() {
            return Err(GitRepoFetcherConfigError::EmptySuffix.into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_api", &self.base_api)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("source_suffix", &self.source_suffix)
            .finish()
    }
}
