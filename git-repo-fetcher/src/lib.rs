pub mod errors;
pub mod git_providers;

pub mod parser;

pub use errors::{GitRepoFetcherError, GitRepoFetcherResult};
pub use git_providers::github::GitHubClient;
pub use git_providers::types::{RepositoryReference, SourceFile, collect_code};
pub use git_providers::ProviderConfig;
pub use parser::parse_repo_url;
