use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
  User,
  Coach,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
  pub sender: Sender,
  pub text: String,
}

impl ChatMessage {
  pub fn user(text: impl Into<String>) -> Self {
    Self {
      sender: Sender::User,
      text: text.into(),
    }
  }

  pub fn coach(text: impl Into<String>) -> Self {
    Self {
      sender: Sender::Coach,
      text: text.into(),
    }
  }
}
