pub mod screen;

pub use screen::{LoginScreen, TracingScreen, bind_screen};
