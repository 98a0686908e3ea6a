//! Backend endpoint paths and request/response types.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST: exchange credentials for a token pair.
pub const LOGIN: &str = "/api/auth/login/";

/// POST: create a new account.
pub const REGISTER: &str = "/api/auth/register/";

/// POST: blacklist the refresh token server-side.
pub const LOGOUT: &str = "/api/auth/logout/";

/// POST: exchange a refresh token for a new access token.
pub const TOKEN_REFRESH: &str = "/api/auth/token/refresh/";

/// GET: the authenticated user's profile.
pub const PROFILE: &str = "/api/auth/profile/";

/// GET: list functions; POST: create one.
pub const FUNCTIONS: &str = "/api/functions/";

/// GET: list external services; POST: register one.
pub const EXTERNAL_APIS: &str = "/api/external-apis/";

/// POST: discover the schema behind an external database connection.
pub const EXTERNAL_APIS_INTROSPECT: &str = "/api/external-apis/introspect/";

pub fn function_path(id: &str) -> String {
    format!("/api/functions/{}/", id)
}

pub fn function_tokens_path(id: &str) -> String {
    format!("/api/functions/{}/tokens/", id)
}

pub fn function_token_delete_path(id: &str, token_id: &str) -> String {
    format!("/api/functions/{}/tokens/?token_id={}", id, token_id)
}

pub fn execute_path(name: &str) -> String {
    format!("/api/execute/{}/", name)
}

pub fn external_api_path(id: &str) -> String {
    format!("/api/external-apis/{}/", id)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
///
/// `email` and `username` carry the same value; the backend's JWT view
/// accepts either field depending on configuration.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from login: a fresh token pair.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request body for registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password2: &'a str,
}

/// Request body for logout.
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

/// Request body for the token refresh exchange.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from the token refresh exchange.
///
/// `refresh` is present only when the server rotates refresh tokens.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request body for API token creation.
#[derive(Debug, Serialize)]
pub struct CreateTokenRequest<'a> {
    pub name: &'a str,
    pub expires_in_days: u32,
    pub permissions: TokenPermissions,
}

/// Permission set requested for a new API token.
#[derive(Debug, Serialize)]
pub struct TokenPermissions {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Default for TokenPermissions {
    fn default() -> Self {
        Self {
            read: true,
            write: true,
            execute: true,
        }
    }
}

/// Response from API token creation.
///
/// Exactly one of `token` (an immediate plaintext secret) or
/// `generation_link` (deferred issuance) is expected.
#[derive(Debug, Deserialize)]
pub struct CreateTokenResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub generation_link: Option<String>,
}

/// Request body for external-service schema introspection.
#[derive(Debug, Serialize)]
pub struct IntrospectRequest<'a> {
    pub config: &'a serde_json::Value,
}

/// Response from schema introspection.
#[derive(Debug, Deserialize)]
pub struct IntrospectResponse {
    pub success: bool,
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}
