//! Test utilities and helpers
//!
//! Factories for wire payloads and a ready-to-use [`AppState`] pointed at a
//! mock server.

use chrono::NaiveDate;
use serde_json::json;

use crate::api::{ApiClient, ApiConfig};
use crate::dashboard::WorkoutForm;
use crate::models::NewWorkout;
use crate::state::AppState;

/// Fixed calendar date used across fixtures
pub fn test_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// Build an [`ApiClient`] pointed at a mockito server URL
pub fn test_client(base_url: &str) -> ApiClient {
  ApiClient::new(ApiConfig {
    base_url: base_url.trim_end_matches('/').to_string(),
  })
  .expect("failed to build test client")
}

/// Fresh application state backed by a mock server
pub fn test_state(base_url: &str) -> AppState {
  AppState::new(test_client(base_url))
}

/// Submission payload with the fixed test date and no equipment
pub fn new_workout(workout_type: &str, intensity: i64, duration: i64) -> NewWorkout {
  NewWorkout {
    date: test_date(),
    workout_type: workout_type.to_string(),
    intensity,
    duration,
    equipment: None,
  }
}

/// A filled-in workout form matching [`new_workout`]
pub fn workout_form(workout_type: &str, intensity: i64, duration: i64) -> WorkoutForm {
  WorkoutForm {
    date: Some(test_date()),
    workout_type: workout_type.to_string(),
    duration_minutes: Some(duration),
    intensity,
    equipment: String::new(),
  }
}

/// JSON body for a stored workout with the given id
pub fn workout_json(id: i64) -> String {
  json!({
    "id": id,
    "date": "2024-01-15",
    "type": "Run",
    "intensity": 7,
    "duration": 60,
    "equipment": null
  })
  .to_string()
}
