//! Workout submission flow and dashboard view state
//!
//! Submitting a workout is the one multi-step exchange in the app: persist
//! the workout, refresh the history cache, then request a recovery plan for
//! the same payload. Plan generation is only attempted after persistence
//! succeeds, and the loading flag brackets exactly the plan request.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::{NewWorkout, RecoveryPlan, Workout};
use crate::state::AppState;

/// ---------------------------------------------------------------------------
/// User-Facing Messages
/// ---------------------------------------------------------------------------

pub const FETCH_WORKOUTS_ERROR: &str = "Could not load workouts.";
pub const ADD_WORKOUT_ERROR: &str = "Could not add workout.";
pub const GENERATE_PLAN_ERROR: &str = "Could not generate a plan.";

const DEFAULT_INTENSITY: i64 = 5;

/// ---------------------------------------------------------------------------
/// Form State
/// ---------------------------------------------------------------------------

/// The workout entry form as the user sees it. `build` turns it into a
/// submission payload, applying defaults and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutForm {
  pub date: Option<NaiveDate>,
  #[serde(rename = "type")]
  pub workout_type: String,
  pub duration_minutes: Option<i64>,
  pub intensity: i64,
  pub equipment: String,
}

impl Default for WorkoutForm {
  fn default() -> Self {
    Self {
      date: None,
      workout_type: String::new(),
      duration_minutes: None,
      intensity: DEFAULT_INTENSITY,
      equipment: String::new(),
    }
  }
}

impl WorkoutForm {
  pub fn build(&self) -> Result<NewWorkout, String> {
    let workout_type = self.workout_type.trim();
    if workout_type.is_empty() {
      return Err("Workout type is required.".into());
    }

    let duration = match self.duration_minutes {
      Some(d) if d > 0 => d,
      _ => return Err("Duration is required.".into()),
    };

    let equipment = match self.equipment.trim() {
      "" => None,
      e => Some(e.to_string()),
    };

    Ok(NewWorkout {
      date: self.date.unwrap_or_else(|| Local::now().date_naive()),
      workout_type: workout_type.to_string(),
      intensity: self.intensity.clamp(1, 10),
      duration,
      equipment,
    })
  }
}

/// ---------------------------------------------------------------------------
/// View State
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
  pub workouts: Vec<Workout>,
  pub recovery_plan: Option<RecoveryPlan>,
  pub loading_plan: bool,
  pub error: Option<String>,
  pub form: WorkoutForm,
}

/// ---------------------------------------------------------------------------
/// Flows
/// ---------------------------------------------------------------------------

/// Fetch the workout history into the dashboard cache. Server ordering is
/// preserved; a failure surfaces in the shared error slot.
pub async fn refresh_workouts(state: &AppState) {
  match state.api.get_workouts().await {
    Ok(workouts) => {
      state.dashboard.lock().await.workouts = workouts;
    }
    Err(e) => {
      eprintln!("Failed to fetch workouts: {e}");
      state.dashboard.lock().await.error = Some(FETCH_WORKOUTS_ERROR.into());
    }
  }
}

/// Run the full submission flow and return the resulting dashboard state.
pub async fn submit_workout(state: &AppState, form: WorkoutForm) -> DashboardState {
  let payload = {
    let mut dash = state.dashboard.lock().await;
    dash.error = None;
    dash.recovery_plan = None;
    dash.form = form;

    match dash.form.build() {
      Ok(payload) => payload,
      Err(message) => {
        dash.error = Some(message);
        return dash.clone();
      }
    }
  };

  // Persist first. If this fails the flow aborts: no history refresh, no
  // plan request, and the loading flag never activates.
  if let Err(e) = state.api.create_workout(&payload).await {
    eprintln!("Failed to add workout: {e}");
    let mut dash = state.dashboard.lock().await;
    dash.error = Some(ADD_WORKOUT_ERROR.into());
    return dash.clone();
  }

  // A failed refresh is reported but does not block plan generation; the
  // workout itself is already saved.
  refresh_workouts(state).await;

  // The form resets on successful persistence regardless of plan outcome,
  // intensity back to its default.
  state.dashboard.lock().await.form = WorkoutForm::default();

  state.dashboard.lock().await.loading_plan = true;
  let plan_result = state.api.generate_plan(&payload).await;

  let mut dash = state.dashboard.lock().await;
  dash.loading_plan = false;
  match plan_result {
    Ok(plan) => dash.recovery_plan = Some(plan),
    Err(ApiError::Rejected(detail)) => dash.error = Some(detail),
    Err(e) => {
      eprintln!("Failed to generate plan: {e}");
      dash.error = Some(GENERATE_PLAN_ERROR.into());
    }
  }

  dash.clone()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
