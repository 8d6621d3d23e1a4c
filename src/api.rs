//! HTTP client for the Recovery Coach API
//!
//! Every remote operation the app performs goes through [`ApiClient`]: workout
//! and rating persistence, history fetches, plan generation, and chat turns.
//! The remote service is the source of truth for all stored data; this client
//! only holds read-through caches in view state.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

use crate::models::{NewRating, NewWorkout, Rating, RecoveryPlan, Workout};

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const API_URL_ENV: &str = "RECOVERY_COACH_API_URL";
const REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

impl ApiConfig {
  pub fn from_env() -> Result<Self, ApiError> {
    let raw =
      env::var(API_URL_ENV).map_err(|_| ApiError::MissingConfig(API_URL_ENV.into()))?;

    // An unset or garbage base URL would otherwise only show up as a failed
    // request later; validate it up front.
    let parsed = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

    Ok(Self {
      base_url: parsed.as_str().trim_end_matches('/').to_string(),
    })
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid API base URL: {0}")]
  InvalidBaseUrl(String),

  #[error("HTTP request failed: {0}")]
  Request(String),

  #[error("Server returned HTTP {0}")]
  Status(u16),

  /// Server-supplied rejection message (only `/api/generate-plan` documents
  /// a JSON error body with a `detail` field).
  #[error("{0}")]
  Rejected(String),

  #[error("Failed to parse response: {0}")]
  Parse(String),
}

impl From<reqwest::Error> for ApiError {
  fn from(e: reqwest::Error) -> Self {
    ApiError::Request(e.to_string())
  }
}

impl Serialize for ApiError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Wire Types (chat turn)
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  user_message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
  coach_response: String,
}

/// Optional error body on plan generation failures
#[derive(Debug, Deserialize)]
struct PlanErrorBody {
  detail: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Client
/// ---------------------------------------------------------------------------

pub struct ApiClient {
  client: Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
      .build()?;

    Ok(Self {
      client,
      base_url: config.base_url,
    })
  }

  /// Create a client from the `RECOVERY_COACH_API_URL` environment variable
  pub fn from_env() -> Result<Self, ApiError> {
    Self::new(ApiConfig::from_env()?)
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Fetch the full workout history (newest first, server ordering)
  pub async fn get_workouts(&self) -> Result<Vec<Workout>, ApiError> {
    let response = self
      .client
      .get(format!("{}/api/workouts", self.base_url))
      .send()
      .await?;

    parse_json(response).await
  }

  /// Persist a new workout; the created record comes back with its id
  pub async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, ApiError> {
    let response = self
      .client
      .post(format!("{}/api/workouts", self.base_url))
      .json(workout)
      .send()
      .await?;

    parse_json(response).await
  }

  /// Fetch the full rating history (server ordering)
  pub async fn get_ratings(&self) -> Result<Vec<Rating>, ApiError> {
    let response = self
      .client
      .get(format!("{}/api/ratings", self.base_url))
      .send()
      .await?;

    parse_json(response).await
  }

  /// Persist a daily rating (the server upserts by date)
  pub async fn create_rating(&self, rating: &NewRating) -> Result<Rating, ApiError> {
    let response = self
      .client
      .post(format!("{}/api/ratings", self.base_url))
      .json(rating)
      .send()
      .await?;

    parse_json(response).await
  }

  /// Request a recovery plan for a just-logged workout.
  ///
  /// Unlike the other endpoints, a failed response may carry a JSON body with
  /// a `detail` string; when present it is surfaced verbatim.
  pub async fn generate_plan(&self, workout: &NewWorkout) -> Result<RecoveryPlan, ApiError> {
    let response = self
      .client
      .post(format!("{}/api/generate-plan", self.base_url))
      .json(workout)
      .send()
      .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      if let Ok(error_body) = serde_json::from_str::<PlanErrorBody>(&body) {
        if let Some(detail) = error_body.detail {
          return Err(ApiError::Rejected(detail));
        }
      }
      return Err(ApiError::Status(status.as_u16()));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
  }

  /// Send one chat turn and return the coach's reply text
  pub async fn send_chat(&self, user_message: &str) -> Result<String, ApiError> {
    let response = self
      .client
      .post(format!("{}/api/chat", self.base_url))
      .json(&ChatRequest { user_message })
      .send()
      .await?;

    let reply: ChatReply = parse_json(response).await?;
    Ok(reply.coach_response)
  }
}

/// Check the status and decode a JSON body. Non-2xx responses are failures;
/// no JSON error body is assumed here.
async fn parse_json<T: serde::de::DeserializeOwned>(
  response: reqwest::Response,
) -> Result<T, ApiError> {
  let status = response.status();

  if !status.is_success() {
    return Err(ApiError::Status(status.as_u16()));
  }

  let body = response.text().await?;
  serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{new_workout, test_client};
  use chrono::NaiveDate;
  use serde_json::json;
  use serial_test::serial;

  #[test]
  #[serial]
  fn config_missing_env_is_an_error() {
    temp_env::with_var_unset(API_URL_ENV, || {
      let err = ApiConfig::from_env().unwrap_err();
      assert!(matches!(err, ApiError::MissingConfig(_)));
    });
  }

  #[test]
  #[serial]
  fn config_rejects_malformed_url() {
    temp_env::with_var(API_URL_ENV, Some("not a url"), || {
      let err = ApiConfig::from_env().unwrap_err();
      assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    });
  }

  #[test]
  #[serial]
  fn config_trims_trailing_slash() {
    temp_env::with_var(API_URL_ENV, Some("http://localhost:8000/"), || {
      let config = ApiConfig::from_env().unwrap();
      assert_eq!(config.base_url, "http://localhost:8000");
    });
  }

  #[tokio::test]
  async fn get_workouts_parses_history() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("GET", "/api/workouts")
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(
        json!([
          {"id": 2, "date": "2024-01-16", "type": "Swim", "intensity": 4, "duration": 45, "equipment": null},
          {"id": 1, "date": "2024-01-15", "type": "Run", "intensity": 7, "duration": 60, "equipment": "shoes"}
        ])
        .to_string(),
      )
      .create_async()
      .await;

    let api = test_client(&server.url());
    let workouts = api.get_workouts().await.unwrap();

    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0].workout_type, "Swim");
    assert_eq!(workouts[1].equipment.as_deref(), Some("shoes"));
  }

  #[tokio::test]
  async fn create_workout_posts_expected_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("POST", "/api/workouts")
      .match_header("content-type", "application/json")
      .match_body(mockito::Matcher::Json(json!({
        "date": "2024-01-15",
        "type": "Run",
        "intensity": 7,
        "duration": 60,
        "equipment": null
      })))
      .with_status(200)
      .with_body(
        json!({"id": 9, "date": "2024-01-15", "type": "Run", "intensity": 7, "duration": 60, "equipment": null})
          .to_string(),
      )
      .create_async()
      .await;

    let api = test_client(&server.url());
    let created = api
      .create_workout(&new_workout("Run", 7, 60))
      .await
      .unwrap();

    assert_eq!(created.id, 9);
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn non_success_status_is_a_failure_without_json_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("GET", "/api/ratings")
      .with_status(502)
      .with_body("bad gateway")
      .create_async()
      .await;

    let api = test_client(&server.url());
    let err = api.get_ratings().await.unwrap_err();

    assert!(matches!(err, ApiError::Status(502)));
  }

  #[tokio::test]
  async fn malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("GET", "/api/workouts")
      .with_status(200)
      .with_body("{not json")
      .create_async()
      .await;

    let api = test_client(&server.url());
    let err = api.get_workouts().await.unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)));
  }

  #[tokio::test]
  async fn generate_plan_surfaces_server_detail() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("POST", "/api/generate-plan")
      .with_status(500)
      .with_body(json!({"detail": "no equipment data"}).to_string())
      .create_async()
      .await;

    let api = test_client(&server.url());
    let err = api.generate_plan(&new_workout("Run", 7, 60)).await.unwrap_err();

    match err {
      ApiError::Rejected(detail) => assert_eq!(detail, "no equipment data"),
      other => panic!("expected Rejected, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn generate_plan_without_detail_falls_back_to_status() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("POST", "/api/generate-plan")
      .with_status(503)
      .with_body("service unavailable")
      .create_async()
      .await;

    let api = test_client(&server.url());
    let err = api.generate_plan(&new_workout("Run", 7, 60)).await.unwrap_err();

    assert!(matches!(err, ApiError::Status(503)));
  }

  #[tokio::test]
  async fn generate_plan_parses_plan_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("POST", "/api/generate-plan")
      .with_status(200)
      .with_body(
        json!({
          "title": "Post-Run Cool-Down",
          "duration_minutes": 20,
          "exercises": ["Quad stretch: 30 seconds per side", "Foam roll calves: 60 seconds per leg"],
          "notes": "Hydrate well."
        })
        .to_string(),
      )
      .create_async()
      .await;

    let api = test_client(&server.url());
    let plan = api.generate_plan(&new_workout("Run", 7, 60)).await.unwrap();

    assert_eq!(plan.title, "Post-Run Cool-Down");
    assert_eq!(plan.duration_minutes, 20);
    assert_eq!(plan.exercises.len(), 2);
  }

  #[tokio::test]
  async fn send_chat_round_trips_messages() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("POST", "/api/chat")
      .match_body(mockito::Matcher::Json(json!({"user_message": "hi"})))
      .with_status(200)
      .with_body(json!({"coach_response": "Hello there!"}).to_string())
      .create_async()
      .await;

    let api = test_client(&server.url());
    let reply = api.send_chat("hi").await.unwrap();

    assert_eq!(reply, "Hello there!");
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn create_rating_returns_created_record() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
      .mock("POST", "/api/ratings")
      .with_status(200)
      .with_body(
        json!({"id": 3, "date": "2024-01-15", "pain_level": 7, "recovery_score": 3}).to_string(),
      )
      .create_async()
      .await;

    let api = test_client(&server.url());
    let rating = NewRating {
      date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
      pain_level: 7,
      recovery_score: 3,
    };
    let created = api.create_rating(&rating).await.unwrap();

    assert_eq!(created.id, 3);
    assert_eq!(created.pain_level, 7);
    assert_eq!(created.recovery_score, 3);
  }
}
