//! fnforge-api - REST-backed client for the FnForge backend.
//!
//! All network traffic flows through one [`ApiClient`]: it attaches the
//! session's bearer token, transparently refreshes an expired access
//! token (retrying the original request exactly once), and normalizes
//! every failure into [`fnforge_core::Error`]. Domain surfaces
//! ([`AuthApi`], [`FunctionsApi`], [`ExternalApisApi`], [`TokenManager`])
//! are thin wrappers over it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use fnforge_api::{ApiClient, AuthApi, FunctionsApi};
//! use fnforge_core::{BaseUrl, Credentials, MemoryStore};
//!
//! # async fn example() -> fnforge_core::Result<()> {
//! let store = Arc::new(MemoryStore::new(BaseUrl::new("http://localhost:8000")?));
//! let client = ApiClient::new(store);
//!
//! let auth = AuthApi::new(client.clone());
//! let profile = auth.login(&Credentials::new("alice@example.com", "secret")).await?;
//! println!("Logged in as {}", profile.email);
//!
//! let functions = FunctionsApi::new(client);
//! for function in functions.list().await? {
//!     println!("{}: active={}", function.name, function.is_active);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod endpoints;
mod external;
mod functions;
mod tokens;

pub use auth::{AuthApi, Registration};
pub use client::ApiClient;
pub use external::ExternalApisApi;
pub use functions::FunctionsApi;
pub use tokens::{CreatedToken, TokenManager};

// Re-exported so callers of [`ApiClient::request`] don't need a direct
// reqwest dependency.
pub use reqwest::header::HeaderMap;
pub use reqwest::Method;
