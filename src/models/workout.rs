use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logged exercise session, as stored by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
  pub id: i64,
  pub date: NaiveDate,
  #[serde(rename = "type")]
  pub workout_type: String,
  pub intensity: i64,
  pub duration: i64,
  pub equipment: Option<String>,
}

/// For submitting new workouts (the remote service assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub date: NaiveDate,
  #[serde(rename = "type")]
  pub workout_type: String,
  pub intensity: i64,
  pub duration: i64,
  pub equipment: Option<String>,
}
