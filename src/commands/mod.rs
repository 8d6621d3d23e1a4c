//! Thin command adapters between the webview and the flow modules.
//!
//! Each command returns a snapshot of the relevant view state; all logic
//! lives in the flow modules so it stays testable without Tauri.

use std::sync::Arc;
use tauri::State;

use crate::chat::{self, ChatSession};
use crate::dashboard::{self, DashboardState, WorkoutForm};
use crate::progress::{self, ProgressState};
use crate::state::AppState;
use crate::view::View;
use crate::wellness::{self, WellnessForm};

/// ---------------------------------------------------------------------------
/// Navigation
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_view(state: State<'_, Arc<AppState>>) -> Result<View, String> {
  Ok(*state.view.lock().await)
}

#[tauri::command]
pub async fn set_view(state: State<'_, Arc<AppState>>, view: View) -> Result<View, String> {
  *state.view.lock().await = view;
  Ok(view)
}

/// ---------------------------------------------------------------------------
/// Dashboard
/// ---------------------------------------------------------------------------

/// Initial dashboard load: workout history plus chart data
#[tauri::command]
pub async fn load_dashboard(state: State<'_, Arc<AppState>>) -> Result<DashboardState, String> {
  let app = state.inner().as_ref();
  dashboard::refresh_workouts(app).await;
  progress::refresh(app).await;
  Ok(app.dashboard.lock().await.clone())
}

#[tauri::command]
pub async fn get_dashboard(state: State<'_, Arc<AppState>>) -> Result<DashboardState, String> {
  Ok(state.dashboard.lock().await.clone())
}

#[tauri::command]
pub async fn submit_workout(
  state: State<'_, Arc<AppState>>,
  form: WorkoutForm,
) -> Result<DashboardState, String> {
  Ok(dashboard::submit_workout(state.inner().as_ref(), form).await)
}

/// ---------------------------------------------------------------------------
/// Wellness & Progress
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn submit_rating(
  state: State<'_, Arc<AppState>>,
  form: WellnessForm,
) -> Result<DashboardState, String> {
  let app = state.inner().as_ref();
  wellness::submit_rating(app, form).await;
  Ok(app.dashboard.lock().await.clone())
}

#[tauri::command]
pub async fn get_progress(state: State<'_, Arc<AppState>>) -> Result<ProgressState, String> {
  Ok(state.progress.lock().await.clone())
}

/// ---------------------------------------------------------------------------
/// Chat
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_chat(state: State<'_, Arc<AppState>>) -> Result<ChatSession, String> {
  Ok(state.chat.lock().await.clone())
}

#[tauri::command]
pub async fn send_chat_message(
  state: State<'_, Arc<AppState>>,
  input: String,
) -> Result<ChatSession, String> {
  Ok(chat::send_message(state.inner().as_ref(), input).await)
}
