//! Coaching chat session
//!
//! A two-state machine: `Idle` and `AwaitingResponse`. Submitting while idle
//! appends the user's message immediately and moves to awaiting; nothing else
//! can start an exchange until the pending one resolves. Each initiated
//! exchange ends in exactly one terminal mutation: the coach's reply on
//! success, a scripted fallback on any failure. Raw error text never reaches
//! the transcript.

use serde::Serialize;

use crate::api::ApiError;
use crate::models::ChatMessage;
use crate::state::AppState;

pub const COACH_GREETING: &str = "Hello! I'm your AI Recovery Coach. How do you feel today?";
pub const COACH_FALLBACK: &str = "Sorry, something went wrong. I can't respond right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPhase {
  Idle,
  AwaitingResponse,
}

/// The transcript is append-only for the lifetime of the session. `revision`
/// bumps on every transcript change so the webview knows when to scroll to
/// the newest message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
  pub transcript: Vec<ChatMessage>,
  pub phase: ChatPhase,
  pub revision: u64,
}

impl ChatSession {
  pub fn new() -> Self {
    Self {
      transcript: vec![ChatMessage::coach(COACH_GREETING)],
      phase: ChatPhase::Idle,
      revision: 0,
    }
  }

  /// Try to start an exchange. Returns the outgoing text if accepted, or
  /// `None` when the trimmed input is empty or an exchange is already in
  /// flight - in both cases nothing changes.
  pub fn begin_exchange(&mut self, input: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() || self.phase != ChatPhase::Idle {
      return None;
    }

    self.transcript.push(ChatMessage::user(text));
    self.phase = ChatPhase::AwaitingResponse;
    self.revision += 1;
    Some(text.to_string())
  }

  /// Apply the single terminal mutation for the pending exchange.
  pub fn complete_exchange(&mut self, reply: Result<String, ApiError>) {
    let text = match reply {
      Ok(text) => text,
      Err(e) => {
        eprintln!("Chat exchange failed: {e}");
        COACH_FALLBACK.to_string()
      }
    };

    self.transcript.push(ChatMessage::coach(text));
    self.phase = ChatPhase::Idle;
    self.revision += 1;
  }
}

impl Default for ChatSession {
  fn default() -> Self {
    Self::new()
  }
}

/// Run one chat turn. The lock is held only around the state mutations, so a
/// second submission arriving mid-flight observes `AwaitingResponse` and is
/// ignored.
pub async fn send_message(state: &AppState, input: String) -> ChatSession {
  let outgoing = state.chat.lock().await.begin_exchange(&input);

  let Some(text) = outgoing else {
    return state.chat.lock().await.clone();
  };

  let reply = state.api.send_chat(&text).await;

  let mut chat = state.chat.lock().await;
  chat.complete_exchange(reply);
  chat.clone()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
