//! Shared application state
//!
//! One record per view, each behind its own lock. Locks are never held
//! across an HTTP await; flows lock, mutate, release, then call out.

use tokio::sync::Mutex;

use crate::api::ApiClient;
use crate::chat::ChatSession;
use crate::dashboard::DashboardState;
use crate::progress::ProgressState;
use crate::view::View;

pub struct AppState {
  pub api: ApiClient,
  pub view: Mutex<View>,
  pub dashboard: Mutex<DashboardState>,
  pub progress: Mutex<ProgressState>,
  pub chat: Mutex<ChatSession>,
}

impl AppState {
  pub fn new(api: ApiClient) -> Self {
    Self {
      api,
      view: Mutex::new(View::default()),
      dashboard: Mutex::new(DashboardState::default()),
      progress: Mutex::new(ProgressState::default()),
      chat: Mutex::new(ChatSession::new()),
    }
  }
}
