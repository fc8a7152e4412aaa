//! Repository URL parsing.

use crate::git_providers::types::RepositoryReference;

/// Splits a repository URL on `/` and takes the last two segments as
/// owner and name.
///
/// The URL shape is not validated. A single-segment input yields an empty
/// owner; a trailing slash yields an empty name.
pub fn parse_repo_url(url: &str) -> RepositoryReference {
    let mut segments = url.rsplit('/');
    let name = segments.next().unwrap_or_default().to_string();
    let owner = segments.next().unwrap_or_default().to_string();
    RepositoryReference { owner, name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_url() {
        let r = parse_repo_url("https://github.com/owner/repo");
        assert_eq!(r.owner, "owner");
        assert_eq!(r.name, "repo");
    }

    #[test]
    fn takes_last_two_segments_only() {
        let r = parse_repo_url("https://github.com/rodion-m/homework_gpt_example");
        assert_eq!(r.owner, "rodion-m");
        assert_eq!(r.name, "homework_gpt_example");

        let r = parse_repo_url("owner/repo");
        assert_eq!(r.owner, "owner");
        assert_eq!(r.name, "repo");
    }

    #[test]
    fn malformed_input_is_not_rejected() {
        let r = parse_repo_url("repo");
        assert_eq!(r.owner, "");
        assert_eq!(r.name, "repo");

        let r = parse_repo_url("https://github.com/owner/repo/");
        assert_eq!(r.owner, "repo");
        assert_eq!(r.name, "");

        let r = parse_repo_url("");
        assert_eq!(r.owner, "");
        assert_eq!(r.name, "");
    }
}
