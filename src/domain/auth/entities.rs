use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a successfully authenticated identity
///
/// The stub backend performs no identity lookup: `name` echoes the submitted
/// username verbatim, and `id` is minted fresh for the attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier minted for this authentication
  pub id: Uuid,
  /// The authenticated username, exactly as entered
  pub name: String,
  /// Timestamp when the authentication succeeded
  pub authenticated_at: DateTime<Utc>,
}

impl User {
  /// Creates a user for a just-verified username
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      id: Uuid::new_v4(),
      name: name.into(),
      authenticated_at: Utc::now(),
    }
  }
}
