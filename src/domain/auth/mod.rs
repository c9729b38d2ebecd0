pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::User;
pub use errors::{AuthError, AuthResult};
pub use ports::Authenticator;
pub use services::StubAuthenticator;
pub use value_objects::{Credentials, Password};
