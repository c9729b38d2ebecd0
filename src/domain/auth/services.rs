use async_trait::async_trait;

use super::entities::User;
use super::errors::{AuthError, AuthResult};
use super::ports::Authenticator;
use super::value_objects::Credentials;

/// Stub credential check standing in for a real verification backend
///
/// Accepts any credentials where both fields are non-empty and echoes the
/// username back as the authenticated identity. No hashing, no lookup, no
/// I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuthenticator;

impl StubAuthenticator {
  /// Creates a new instance of StubAuthenticator
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
  async fn authenticate(&self, credentials: Credentials) -> AuthResult {
    if !credentials.is_complete() {
      tracing::debug!("rejecting incomplete credentials");
      return Err(AuthError::Default);
    }

    Ok(User::new(credentials.into_username()))
  }
}
