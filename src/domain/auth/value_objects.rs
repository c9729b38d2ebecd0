use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// The password text as typed, including the empty string
///
/// Held only for the duration of one authentication attempt. Memory is
/// zeroized on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  /// Wraps the raw password text; no validation is performed
  pub fn new(password: impl Into<String>) -> Self {
    Self(password.into())
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// True when the user has typed nothing
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// Implement Display without exposing the password
impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// Credentials Value Object
// ============================================================================

/// An ephemeral (username, password) pair snapshotted at submit time
///
/// Exists only as the argument of a single authentication attempt; it is
/// never stored.
#[derive(Debug, Clone)]
pub struct Credentials {
  username: String,
  password: Password,
}

impl Credentials {
  /// Pairs the latched username and password texts
  pub fn new(username: impl Into<String>, password: Password) -> Self {
    Self {
      username: username.into(),
      password,
    }
  }

  /// Returns the username as a string slice
  pub fn username(&self) -> &str {
    &self.username
  }

  /// Returns the password
  pub fn password(&self) -> &Password {
    &self.password
  }

  /// True when both fields are non-empty
  ///
  /// This is the only validation the flow performs. Which field is missing is
  /// intentionally not distinguished.
  pub fn is_complete(&self) -> bool {
    !self.username.is_empty() && !self.password.is_empty()
  }

  /// Consumes self and returns the username for the authenticated identity
  pub fn into_username(self) -> String {
    self.username
  }
}
