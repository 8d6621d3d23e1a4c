//! Progress aggregation for the trend chart
//!
//! Reshapes the rating history into chart points: the date becomes a short
//! month-day label, everything else passes through unchanged, server
//! ordering preserved. A failed refresh keeps whatever was shown before.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Rating;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ProgressPoint {
  pub date: String,
  pub pain_level: i64,
  pub recovery_score: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressState {
  pub points: Vec<ProgressPoint>,
}

/// Short label for the chart axis, e.g. "Mar 5"
pub fn chart_label(date: NaiveDate) -> String {
  date.format("%b %-d").to_string()
}

fn to_point(rating: Rating) -> ProgressPoint {
  ProgressPoint {
    date: chart_label(rating.date),
    pain_level: rating.pain_level,
    recovery_score: rating.recovery_score,
  }
}

/// Re-fetch the rating history and rebuild the chart points.
///
/// Unlike the other flows, a fetch failure here is logged and otherwise
/// silent: the previous points stay in place and no user-facing error is
/// raised.
pub async fn refresh(state: &AppState) {
  match state.api.get_ratings().await {
    Ok(ratings) => {
      let points = ratings.into_iter().map(to_point).collect();
      state.progress.lock().await.points = points;
    }
    Err(e) => {
      eprintln!("Failed to fetch progress data: {e}");
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
