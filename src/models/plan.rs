use serde::{Deserialize, Serialize};

/// A generated recovery plan returned after a workout is logged.
///
/// Held only in dashboard state while displayed; never persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryPlan {
  pub title: String,
  pub duration_minutes: i64,
  pub exercises: Vec<String>,
  pub notes: String,
}
