mod api;
mod chat;
mod commands;
mod dashboard;
mod models;
mod progress;
mod state;
mod view;
mod wellness;

#[cfg(test)]
mod test_utils;

use api::ApiClient;
use state::AppState;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tauri::Builder::default()
    .setup(|app| {
      match ApiClient::from_env() {
        Ok(api) => {
          println!("API client ready ({})", api.base_url());
          app.handle().manage(Arc::new(AppState::new(api)));
        }
        Err(e) => {
          eprintln!("Failed to configure API client: {}", e);
        }
      }
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_view,
      commands::set_view,
      commands::load_dashboard,
      commands::get_dashboard,
      commands::submit_workout,
      commands::submit_rating,
      commands::get_progress,
      commands::get_chat,
      commands::send_chat_message,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
