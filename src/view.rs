use serde::{Deserialize, Serialize};

/// The three mutually exclusive views. Navigation is a single piece of
/// state with no history stack or deep linking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
  #[default]
  Home,
  Dashboard,
  Chat,
}

impl View {
  /// Navigation controls are hidden on the landing view only
  pub fn shows_nav(&self) -> bool {
    !matches!(self, View::Home)
  }
}
