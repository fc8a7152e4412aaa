//! Seams between the review pipeline and its two remote services.
//!
//! Static dispatch only: the checker is generic over these traits, so no
//! `async-trait` and no `Box<dyn ...>`.

use std::future::Future;

use ai_llm_service::{AiLlmError, OpenAiService};
use git_repo_fetcher::{GitHubClient, GitRepoFetcherError, SourceFile};

use crate::prompt::SYSTEM_PROMPT;

/// Produces the source files of a repository, already filtered and downloaded.
pub trait SourceFetcher {
    fn list_source_files(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl Future<Output = Result<Vec<SourceFile>, GitRepoFetcherError>> + Send;
}

/// Sends one prompt to a chat model and returns the reply text.
pub trait ChatCompletion {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, AiLlmError>> + Send;
}

impl SourceFetcher for GitHubClient {
    async fn list_source_files(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<SourceFile>, GitRepoFetcherError> {
        GitHubClient::list_source_files(self, owner, repo).await
    }
}

impl ChatCompletion for OpenAiService {
    async fn complete(&self, prompt: &str) -> Result<String, AiLlmError> {
        self.generate(prompt, Some(SYSTEM_PROMPT)).await
    }
}
