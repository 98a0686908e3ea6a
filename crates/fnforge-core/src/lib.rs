//! fnforge-core - Core types and traits for the fnforge client toolkit.
//!
//! This crate holds everything that is independent of the HTTP transport:
//! the normalized error taxonomy, session state and its injectable store,
//! token and credential types, and the backend resource models.

pub mod credentials;
pub mod error;
pub mod models;
pub mod session;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind};
pub use models::{
    ApiToken, ExternalService, FunctionDef, FunctionUpdate, NewExternalService, NewFunction,
    UserProfile,
};
pub use session::{MemoryStore, Session, SessionStore};
pub use tokens::{AccessToken, RefreshToken};
pub use types::{BaseUrl, DEFAULT_BASE_URL};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
