//! Chat message types.
//!
//! Messages are ephemeral: the server builds them for the response payload
//! and never persists their bodies. Only the per-day usage counter
//! ([`crate::usage`]) survives a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
  User,
  Bot,
}

/// Reader reaction to a bot message. Client-side only; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
  Positive,
  Negative,
}

/// A single chat message as rendered by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub id:        Uuid,
  pub content:   String,
  pub sender:    Sender,
  pub timestamp: DateTime<Utc>,
  pub feedback:  Option<Feedback>,
  /// Free-text topic tag carried through from the request, if any.
  pub topic:     Option<String>,
}

impl Message {
  /// Build a user-authored message stamped with the current time.
  pub fn user(content: impl Into<String>, topic: Option<String>) -> Self {
    Self {
      id: Uuid::new_v4(),
      content: content.into(),
      sender: Sender::User,
      timestamp: Utc::now(),
      feedback: None,
      topic,
    }
  }

  /// Build a bot reply stamped with the current time.
  pub fn bot(content: impl Into<String>, topic: Option<String>) -> Self {
    Self {
      id: Uuid::new_v4(),
      content: content.into(),
      sender: Sender::Bot,
      timestamp: Utc::now(),
      feedback: None,
      topic,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bot_and_user_constructors_set_sender() {
    let m = Message::user("hello", None);
    assert_eq!(m.sender, Sender::User);
    assert!(m.feedback.is_none());

    let m = Message::bot("hi", Some("trinity".to_string()));
    assert_eq!(m.sender, Sender::Bot);
    assert_eq!(m.topic.as_deref(), Some("trinity"));
  }

  #[test]
  fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    assert_eq!(
      serde_json::to_string(&Feedback::Positive).unwrap(),
      "\"positive\""
    );
  }
}
