//! GitHub link metadata displayed on the project card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of hex digits shown for an abbreviated commit hash
const SHORT_SHA_LEN: usize = 7;

/// Latest commit on the linked repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubCommit {
    pub sha: String,
    pub author: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl GitHubCommit {
    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }
}

/// Abbreviate a commit hash for display
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

/// Metadata identifying a connected remote repository.
///
/// `avatar` and `repo_name` are never empty; use [`GitHubLinkInfo::new`] to
/// construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubLinkInfo {
    avatar: String,
    repo_name: String,
    last_commit: GitHubCommit,
}

impl GitHubLinkInfo {
    pub fn new(
        avatar: impl Into<String>,
        repo_name: impl Into<String>,
        last_commit: GitHubCommit,
    ) -> Result<Self> {
        let avatar = avatar.into();
        let repo_name = repo_name.into();

        if avatar.trim().is_empty() {
            return Err(Error::invalid_link_info("avatar is empty"));
        }
        if repo_name.trim().is_empty() {
            return Err(Error::invalid_link_info("repository name is empty"));
        }

        Ok(Self {
            avatar,
            repo_name,
            last_commit,
        })
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Repository name in `owner/name` form
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    pub fn last_commit(&self) -> &GitHubCommit {
        &self.last_commit
    }

    /// Browser URL of the repository
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repo_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn commit() -> GitHubCommit {
        GitHubCommit {
            sha: "3f1c2a9e8b7d6c5f4e3d2c1b0a9f8e7d6c5b4a39".to_string(),
            author: "octocat".to_string(),
            message: "Fix flaky test\n\nLonger body".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_link_info_requires_repo_name() {
        let err = GitHubLinkInfo::new("https://github.com/octocat.png", "  ", commit()).unwrap_err();
        assert!(matches!(err, Error::InvalidLinkInfo { .. }));
    }

    #[test]
    fn test_link_info_requires_avatar() {
        let err = GitHubLinkInfo::new("", "octocat/hello", commit()).unwrap_err();
        assert!(err.to_string().contains("avatar"));
    }

    #[test]
    fn test_link_info_accessors() {
        let link =
            GitHubLinkInfo::new("https://github.com/octocat.png", "octocat/hello", commit())
                .unwrap();
        assert_eq!(link.repo_name(), "octocat/hello");
        assert_eq!(link.repo_url(), "https://github.com/octocat/hello");
        assert_eq!(link.last_commit().author, "octocat");
    }

    #[test]
    fn test_commit_summary_is_first_line() {
        assert_eq!(commit().summary(), "Fix flaky test");
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(commit().short_sha(), "3f1c2a9");
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha(""), "");
    }
}
