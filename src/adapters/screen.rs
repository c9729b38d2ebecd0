use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthResult;

/// Rendering half of the login screen
///
/// The flow drives exactly one of these two actions per authentication
/// result. Widget wiring stays with the implementor.
#[async_trait]
pub trait LoginScreen: Send {
  /// A login succeeded; transition to the main screen
  async fn navigate_to_main(&mut self, user: User);

  /// A login failed; surface the error message to the user
  async fn show_error(&mut self, message: String);
}

/// Subscribes a screen to the result stream for the life of the stream
///
/// Routes every result to one screen action. A subscriber that lags far
/// enough to lose results logs the skip and keeps rendering the newest
/// outcomes; the task ends when the stream closes.
pub fn bind_screen<S>(mut results: broadcast::Receiver<AuthResult>, mut screen: S) -> JoinHandle<()>
where
  S: LoginScreen + 'static,
{
  tokio::spawn(async move {
    loop {
      match results.recv().await {
        Ok(Ok(user)) => screen.navigate_to_main(user).await,
        Ok(Err(error)) => screen.show_error(error.to_string()).await,
        Err(broadcast::error::RecvError::Lagged(skipped)) => {
          tracing::warn!(skipped, "login screen lagged behind the result stream");
        }
        Err(broadcast::error::RecvError::Closed) => break,
      }
    }
  })
}

/// Screen adapter that renders transitions as log lines
///
/// Stands in for a real UI toolkit binding; useful in demos and while wiring
/// a frontend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingScreen;

#[async_trait]
impl LoginScreen for TracingScreen {
  async fn navigate_to_main(&mut self, user: User) {
    tracing::info!(user = %user.name, "navigating to main screen");
  }

  async fn show_error(&mut self, message: String) {
    tracing::info!(%message, "showing login error");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::login::LoginController;
  use crate::domain::auth::services::StubAuthenticator;
  use std::sync::Arc;
  use tokio::sync::mpsc;

  #[derive(Debug, PartialEq)]
  enum ScreenCall {
    NavigateToMain(String),
    ShowError(String),
  }

  /// Screen double that records the actions it was driven through
  struct RecordingScreen {
    calls: mpsc::UnboundedSender<ScreenCall>,
  }

  #[async_trait]
  impl LoginScreen for RecordingScreen {
    async fn navigate_to_main(&mut self, user: User) {
      let _ = self.calls.send(ScreenCall::NavigateToMain(user.name));
    }

    async fn show_error(&mut self, message: String) {
      let _ = self.calls.send(ScreenCall::ShowError(message));
    }
  }

  fn recording_screen() -> (RecordingScreen, mpsc::UnboundedReceiver<ScreenCall>) {
    let (calls, seen) = mpsc::unbounded_channel();
    (RecordingScreen { calls }, seen)
  }

  #[tokio::test]
  async fn test_success_routes_to_main_screen() {
    let controller = LoginController::new(Arc::new(StubAuthenticator::new()));
    let (screen, mut seen) = recording_screen();
    bind_screen(controller.results(), screen);

    controller.username_changed("alice");
    controller.password_changed("secret");
    controller.submit_triggered();

    assert_eq!(
      seen.recv().await.unwrap(),
      ScreenCall::NavigateToMain("alice".into())
    );
  }

  #[tokio::test]
  async fn test_failure_routes_to_error_display() {
    let controller = LoginController::new(Arc::new(StubAuthenticator::new()));
    let (screen, mut seen) = recording_screen();
    bind_screen(controller.results(), screen);

    controller.username_changed("");
    controller.password_changed("secret");
    controller.submit_triggered();

    assert_eq!(
      seen.recv().await.unwrap(),
      ScreenCall::ShowError("ERROR".into())
    );
  }

  #[tokio::test]
  async fn test_tracing_screen_renders_a_result() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let controller = LoginController::new(Arc::new(StubAuthenticator::new()));
    let binding = bind_screen(controller.results(), TracingScreen);
    let mut results = controller.results();

    controller.username_changed("alice");
    controller.password_changed("secret");
    controller.submit_triggered();

    // Let one result flow through the adapter, then shut the stream down
    results.recv().await.unwrap().unwrap();
    drop(controller);
    binding.await.unwrap();
  }

  #[tokio::test]
  async fn test_binding_ends_when_the_stream_closes() {
    let controller = LoginController::new(Arc::new(StubAuthenticator::new()));
    let (screen, _seen) = recording_screen();
    let binding = bind_screen(controller.results(), screen);

    drop(controller);

    binding.await.unwrap();
  }
}
