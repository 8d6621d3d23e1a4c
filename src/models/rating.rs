use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily self-reported pain/recovery measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
  pub id: i64,
  pub date: NaiveDate,
  pub pain_level: i64,
  pub recovery_score: i64,
}

/// For submitting new ratings (the remote service upserts by date)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRating {
  pub date: NaiveDate,
  pub pain_level: i64,
  pub recovery_score: i64,
}
