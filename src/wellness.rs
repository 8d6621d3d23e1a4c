//! Daily wellness rating flow
//!
//! Persists a pain/recovery rating, then asks the progress aggregator to
//! re-fetch. The rating is never inserted into local state directly; the
//! re-fetch is the only way chart data changes.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::NewRating;
use crate::progress;
use crate::state::AppState;

pub const SAVE_RATING_ERROR: &str = "Could not save rating.";

const DEFAULT_SLIDER: i64 = 5;

/// The daily rating form: two 1-10 sliders and an optional date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessForm {
  pub date: Option<NaiveDate>,
  pub pain_level: i64,
  pub recovery_score: i64,
}

impl Default for WellnessForm {
  fn default() -> Self {
    Self {
      date: None,
      pain_level: DEFAULT_SLIDER,
      recovery_score: DEFAULT_SLIDER,
    }
  }
}

impl WellnessForm {
  pub fn build(&self) -> NewRating {
    NewRating {
      date: self.date.unwrap_or_else(|| Local::now().date_naive()),
      pain_level: self.pain_level.clamp(1, 10),
      recovery_score: self.recovery_score.clamp(1, 10),
    }
  }
}

/// Persist a rating. On success the progress data is refreshed in place; on
/// failure a single error string lands in the shared dashboard slot and no
/// local state changes.
pub async fn submit_rating(state: &AppState, form: WellnessForm) {
  let payload = form.build();
  state.dashboard.lock().await.error = None;

  match state.api.create_rating(&payload).await {
    Ok(_) => {
      progress::refresh(state).await;
    }
    Err(e) => {
      eprintln!("Failed to save rating: {e}");
      state.dashboard.lock().await.error = Some(SAVE_RATING_ERROR.into());
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
