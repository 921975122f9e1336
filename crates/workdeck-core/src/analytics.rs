//! Analytics event names

use std::fmt;

/// Named events captured by the project card. They carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticsEvent {
    PushToGitHubClicked,
    DownloadWorkspaceClicked,
}

impl AnalyticsEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsEvent::PushToGitHubClicked => "push_to_github_button_clicked",
            AnalyticsEvent::DownloadWorkspaceClicked => "download_workspace_button_clicked",
        }
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(
            AnalyticsEvent::PushToGitHubClicked.to_string(),
            "push_to_github_button_clicked"
        );
        assert_eq!(
            AnalyticsEvent::DownloadWorkspaceClicked.as_str(),
            "download_workspace_button_clicked"
        );
    }
}
