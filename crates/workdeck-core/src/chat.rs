//! Chat messages and the outbound session envelope

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Instruction script sent to the agent by the "Push to GitHub" action.
///
/// Sent verbatim, including the surrounding newlines.
pub const PUSH_TO_GITHUB_PROMPT: &str = "
Let's push the code to GitHub.
If we're currently on the openhands-workspace branch, please create a new branch with a descriptive name.
Commit any changes and push them to the remote repository.
Finally, open up a pull request using the GitHub API and the token in the GITHUB_TOKEN environment variable, then show me the URL of the pull request.
";

/// Format a timestamp the way the session expects (`2024-01-01T00:00:00.000Z`)
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A user-authored message as shown in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub image_urls: Vec<String>,
    /// ISO-8601 timestamp
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, image_urls: Vec<String>, timestamp: String) -> Self {
        Self {
            content: content.into(),
            image_urls,
            timestamp,
        }
    }

    /// A text-only message stamped with the current time
    pub fn user_now(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new(), iso_timestamp(Utc::now()))
    }
}

/// Action tag of an outbound event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Message,
}

/// Payload of a `message` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageArgs {
    pub content: String,
    pub image_urls: Vec<String>,
    pub timestamp: String,
}

/// Outbound event written to the agent session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEvent {
    pub action: ActionType,
    pub args: MessageArgs,
}

impl ClientEvent {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the session event carrying a chat message
pub fn create_chat_message(content: &str, image_urls: &[String], timestamp: &str) -> ClientEvent {
    ClientEvent {
        action: ActionType::Message,
        args: MessageArgs {
            content: content.to_string(),
            image_urls: image_urls.to_vec(),
            timestamp: timestamp.to_string(),
        },
    }
}

impl From<&ChatMessage> for ClientEvent {
    fn from(message: &ChatMessage) -> Self {
        create_chat_message(&message.content, &message.image_urls, &message.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prompt_lines() {
        let lines: Vec<&str> = PUSH_TO_GITHUB_PROMPT.trim().lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Let's push the code to GitHub.");
        assert!(lines[3].contains("GITHUB_TOKEN environment variable"));
        assert!(PUSH_TO_GITHUB_PROMPT.starts_with('\n'));
        assert!(PUSH_TO_GITHUB_PROMPT.ends_with(".\n"));
    }

    #[test]
    fn test_iso_timestamp_uses_millis_and_z() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(iso_timestamp(at), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_user_now_has_no_images() {
        let msg = ChatMessage::user_now("hello");
        assert!(msg.image_urls.is_empty());
        assert!(DateTime::parse_from_rfc3339(&msg.timestamp).is_ok());
    }

    #[test]
    fn test_event_wire_shape() {
        let event = create_chat_message("hi", &[], "2024-01-02T03:04:05.000Z");
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(value["action"], "message");
        assert_eq!(value["args"]["content"], "hi");
        assert_eq!(value["args"]["image_urls"], serde_json::json!([]));
        assert_eq!(value["args"]["timestamp"], "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_event_from_message_copies_fields() {
        let msg = ChatMessage::new("body", vec![], "2024-01-02T03:04:05.000Z".to_string());
        let event = ClientEvent::from(&msg);
        assert_eq!(event.args.content, msg.content);
        assert_eq!(event.args.timestamp, msg.timestamp);
    }
}
