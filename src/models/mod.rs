mod chat;
mod plan;
mod rating;
mod workout;

pub use chat::{ChatMessage, Sender};
pub use plan::RecoveryPlan;
pub use rating::{NewRating, Rating};
pub use workout::{NewWorkout, Workout};
