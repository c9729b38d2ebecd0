//! Reactive login flow for a two-field login screen.
//!
//! UI widgets feed three event sinks (`username_changed`, `password_changed`,
//! `submit_triggered`); each submit latches the newest credential pair, runs a
//! single-flight authentication call, and publishes the outcome on a
//! broadcast result stream. A newer submit supersedes a still-pending one,
//! and the stream itself never faults: failures arrive as values.

pub mod adapters;
pub mod application;
pub mod domain;

// Re-export the public surface at the crate root
pub use adapters::screen::{LoginScreen, TracingScreen, bind_screen};
pub use application::login::{LoginController, LoginControllerConfig};
pub use domain::auth::{
  AuthError, AuthResult, Authenticator, Credentials, Password, StubAuthenticator, User,
};
