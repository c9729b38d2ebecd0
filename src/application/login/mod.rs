pub mod controller;

pub use controller::{LoginController, LoginControllerConfig};
