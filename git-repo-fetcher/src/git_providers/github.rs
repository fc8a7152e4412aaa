//! GitHub provider (REST v3) for repository contents.
//!
//! Endpoints used:
//!   * GET /repos/{owner}/{repo}/contents/  (root listing)
//!   * GET {download_url}                   (raw file body, one per file)
//!
//! Pagination is not handled: the root listing is taken as returned.

use crate::errors::GitRepoFetcherResult;
use crate::git_providers::types::*;
use crate::git_providers::{ProviderConfig, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// GitHub HTTP client wrapper.
///
/// Holds one `reqwest::Client` reused for the listing and every download.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_api: String,      // "https://api.github.com"
    token: Option<String>, // sent as "Bearer <token>" to the API only
    source_suffix: String, // e.g. ".cs"
}

impl GitHubClient {
    /// Constructs a GitHub client with a shared HTTP instance.
    pub fn new(http: Client, cfg: ProviderConfig) -> Self {
        debug!(
            "Creating GitHubClient with base_api={}, suffix={}",
            cfg.base_api, cfg.source_suffix
        );
        Self {
            http,
            base_api: cfg.base_api.trim_end_matches('/').to_string(),
            token: cfg.token,
            source_suffix: cfg.source_suffix,
        }
    }

    /// Validates `cfg` and builds a client with the stable user agent.
    pub fn from_config(cfg: ProviderConfig) -> GitRepoFetcherResult<Self> {
        cfg.validate()?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::new(http, cfg))
    }

    /// Lists the repository root, keeps entries whose path ends with the
    /// configured suffix and downloads each one as text.
    ///
    /// Entries without a download URL are skipped. Downloads run one at a
    /// time in listing order. Any HTTP failure aborts the whole call.
    pub async fn list_source_files(
        &self,
        owner: &str,
        repo: &str,
    ) -> GitRepoFetcherResult<Vec<SourceFile>> {
        let entries = self.get_root_contents(owner, repo).await?;
        let listed = entries.len();

        let mut files = Vec::new();
        for entry in entries {
            if !entry.path.ends_with(&self.source_suffix) {
                continue;
            }
            let Some(url) = entry.download_url.filter(|u| !u.is_empty()) else {
                continue;
            };

            let content = self.download_text(&url).await?;
            files.push(SourceFile {
                path: entry.path,
                download_url: Some(url),
                content,
            });
        }

        info!(
            owner,
            repo,
            listed,
            fetched = files.len(),
            suffix = %self.source_suffix,
            "repository source files fetched"
        );

        Ok(files)
    }

    /// Fetches the root directory listing.
    async fn get_root_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> GitRepoFetcherResult<Vec<GitHubContentEntry>> {
        let url = format!("{}/repos/{}/{}/contents/", self.base_api, owner, repo);
        debug!("GitHub get_root_contents: {}", url);

        let mut req = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let entries: Vec<GitHubContentEntry> =
            req.send().await?.error_for_status()?.json().await?;

        Ok(entries)
    }

    /// Plain GET of a raw file URL, returning the body as text.
    async fn download_text(&self, url: &str) -> GitRepoFetcherResult<String> {
        debug!("GitHub download: {}", url);
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

/// Entry of the contents listing (subset).
#[derive(Debug, Deserialize)]
struct GitHubContentEntry {
    path: String,
    #[serde(default)]
    download_url: Option<String>,
}
