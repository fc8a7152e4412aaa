//! Provider-agnostic data model for repository references and fetched files.

use serde::{Deserialize, Serialize};

/// Owner/name pair identifying a repository on the provider.
///
/// Produced by [`crate::parser::parse_repo_url`]; no validation is applied,
/// so either part may be empty for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

/// A repository file selected by the suffix filter, with its text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Repo-relative path as reported by the listing.
    pub path: String,
    /// Raw download URL from the listing (always present for fetched files).
    pub download_url: Option<String>,
    /// Downloaded text content.
    pub content: String,
}

/// Joins file contents in order, each followed by a line break.
///
/// An empty slice yields an empty string.
pub fn collect_code(files: &[SourceFile]) -> String {
    let capacity = files.iter().map(|f| f.content.len() + 1).sum();
    let mut all_code = String::with_capacity(capacity);
    for f in files {
        all_code.push_str(&f.content);
        all_code.push('\n');
    }
    all_code
}
