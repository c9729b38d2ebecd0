use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::User;

/// Main authentication error type
///
/// Every failure the flow can surface is one of these two values. The
/// `Display` string is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AuthError {
  /// Unspecified failure, also the fallback for any unexpected internal fault
  #[error("ERROR")]
  Default,

  /// Numbered failure, reserved for richer backend errors
  #[error("{0} Error")]
  Coded(u32),
}

/// Outcome of a single authentication attempt
///
/// Exactly one is produced per submit; failures travel as values, never as
/// faults.
pub type AuthResult = Result<User, AuthError>;
