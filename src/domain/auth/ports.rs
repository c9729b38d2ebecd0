use async_trait::async_trait;

use super::errors::AuthResult;
use super::value_objects::Credentials;

/// Service trait for credential verification
///
/// Implementations must produce exactly one outcome per call and then
/// complete; a rejected login is the `Err(AuthError)` value, never a panic.
/// The call may suspend (a real backend would perform a network round trip).
#[async_trait]
pub trait Authenticator: Send + Sync {
  /// Decides whether the supplied credentials identify a user
  async fn authenticate(&self, credentials: Credentials) -> AuthResult;
}
