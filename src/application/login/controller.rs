use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;

use crate::domain::auth::errors::{AuthError, AuthResult};
use crate::domain::auth::ports::Authenticator;
use crate::domain::auth::value_objects::{Credentials, Password};

/// Configuration for a login controller instance
#[derive(Debug, Clone)]
pub struct LoginControllerConfig {
  /// Capacity of the result stream's broadcast buffer; a subscriber that
  /// falls further behind than this loses the oldest results
  pub result_buffer: usize,
}

impl Default for LoginControllerConfig {
  fn default() -> Self {
    Self { result_buffer: 16 }
  }
}

/// Raw UI events feeding the flow, applied strictly in arrival order
enum InputEvent {
  UsernameChanged(String),
  PasswordChanged(String),
  SubmitTriggered,
}

/// Login flow controller composing text-change and submit events into a
/// single authentication-result stream
///
/// The controller latches the most recent username and password texts. Each
/// submit snapshots both latches as of its arrival, calls the authenticator
/// once, and publishes the outcome on the result stream. A submit issued
/// while a prior call is still pending supersedes it: only the newest call's
/// outcome is ever delivered. The stream itself never faults; an
/// authenticator that panics is reported as `Err(AuthError::Default)`.
///
/// All three input sinks are synchronous and may be called from any thread;
/// a single internal queue serializes them, so a submit always observes the
/// latch values as of its own arrival.
pub struct LoginController {
  events: mpsc::UnboundedSender<InputEvent>,
  results: broadcast::Sender<AuthResult>,
}

impl LoginController {
  /// Creates a controller with the default configuration
  ///
  /// Spawns the flow loop onto the ambient tokio runtime; the loop ends when
  /// the controller is dropped.
  pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
    Self::with_config(authenticator, LoginControllerConfig::default())
  }

  /// Creates a controller with an explicit configuration
  pub fn with_config(authenticator: Arc<dyn Authenticator>, config: LoginControllerConfig) -> Self {
    let (events, queue) = mpsc::unbounded_channel();
    let (results, _) = broadcast::channel(config.result_buffer.max(1));

    tokio::spawn(run_flow(queue, results.clone(), authenticator));

    Self { events, results }
  }

  /// Reports the current username text
  pub fn username_changed(&self, text: impl Into<String>) {
    let _ = self.events.send(InputEvent::UsernameChanged(text.into()));
  }

  /// Reports the current password text
  pub fn password_changed(&self, text: impl Into<String>) {
    let _ = self.events.send(InputEvent::PasswordChanged(text.into()));
  }

  /// Reports a press of the login button
  pub fn submit_triggered(&self) {
    let _ = self.events.send(InputEvent::SubmitTriggered);
  }

  /// Subscribes to the authentication-result stream
  ///
  /// Each subscriber sees every result published after it subscribed, in
  /// submit order. The stream closes only once the controller and any
  /// in-flight attempt are gone.
  pub fn results(&self) -> broadcast::Receiver<AuthResult> {
    self.results.subscribe()
  }
}

/// The flow loop: owns the two latches and the in-flight attempt
async fn run_flow(
  mut queue: mpsc::UnboundedReceiver<InputEvent>,
  results: broadcast::Sender<AuthResult>,
  authenticator: Arc<dyn Authenticator>,
) {
  let mut username: Option<String> = None;
  let mut password: Option<String> = None;
  let mut in_flight: Option<CancellationToken> = None;

  while let Some(event) = queue.recv().await {
    match event {
      InputEvent::UsernameChanged(text) => username = Some(text),
      InputEvent::PasswordChanged(text) => password = Some(text),
      InputEvent::SubmitTriggered => {
        let (Some(name), Some(pass)) = (username.as_deref(), password.as_deref()) else {
          tracing::debug!("submit before both fields reported a value, ignoring");
          continue;
        };

        // Latest submit wins: withdraw interest in the pending attempt
        if let Some(token) = in_flight.take() {
          token.cancel();
        }

        let token = CancellationToken::new();
        in_flight = Some(token.clone());

        let credentials = Credentials::new(name, Password::new(pass));
        tokio::spawn(run_attempt(
          authenticator.clone(),
          credentials,
          token,
          results.clone(),
        ));
      }
    }
  }

  // Controller dropped: nothing may be delivered after this point
  if let Some(token) = in_flight.take() {
    token.cancel();
  }
}

/// A single authentication attempt, raced against its supersession token
async fn run_attempt(
  authenticator: Arc<dyn Authenticator>,
  credentials: Credentials,
  cancel: CancellationToken,
  results: broadcast::Sender<AuthResult>,
) {
  // catch_unwind keeps a panicking backend from faulting the stream; the
  // panic becomes the default failure value
  let call = AssertUnwindSafe(authenticator.authenticate(credentials)).catch_unwind();

  tokio::select! {
    // Biased so that a cancellation issued before completion always wins
    biased;
    _ = cancel.cancelled() => {
      tracing::debug!("authentication attempt superseded, suppressing outcome");
    }
    outcome = call => {
      let outcome = outcome.unwrap_or_else(|_| {
        tracing::warn!("authenticator panicked, reporting default failure");
        Err(AuthError::Default)
      });
      if results.send(outcome).is_err() {
        tracing::trace!("no subscribers for authentication result");
      }
    }
  }
}
