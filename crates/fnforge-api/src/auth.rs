//! Authentication operations.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use fnforge_core::{AccessToken, Credentials, RefreshToken, Result, UserProfile};

use crate::client::ApiClient;
use crate::endpoints::{
    LoginRequest, LoginResponse, LogoutRequest, RegisterRequest, LOGIN, LOGOUT, PROFILE, REGISTER,
};

/// Account registration details.
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

// Intentionally hide passwords in Debug output
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Authentication and account operations.
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate and persist the issued token pair.
    ///
    /// On success the session store holds both tokens and the user's
    /// profile is fetched and returned. A rejected login surfaces as an
    /// invalid-credentials error without touching an already-absent
    /// session.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile> {
        info!("Creating new session");

        let request = LoginRequest {
            email: credentials.email(),
            username: credentials.email(),
            password: credentials.password(),
        };

        let response: LoginResponse = self.client.post(LOGIN, &request).await?;

        let mut session = self.client.store().get();
        session.access_token = Some(AccessToken::new(response.access));
        session.refresh_token = response.refresh.map(RefreshToken::new);
        self.client.store().set(session);

        debug!("Token pair stored, fetching profile");
        self.client.get(PROFILE).await
    }

    /// Create a new account. Does not log in.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let request = RegisterRequest {
            first_name: &registration.first_name,
            last_name: &registration.last_name,
            email: &registration.email,
            password: &registration.password,
            password2: &registration.password_confirm,
        };

        let _: serde_json::Value = self.client.post(REGISTER, &request).await?;
        Ok(())
    }

    /// End the session.
    ///
    /// The server-side blacklist call is best-effort; the local session
    /// is cleared regardless of its outcome.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        let session = self.client.store().get();
        if let Some(refresh_token) = session.refresh_token {
            let request = LogoutRequest {
                refresh: refresh_token.as_str(),
            };
            if let Err(e) = self
                .client
                .post::<_, serde_json::Value>(LOGOUT, &request)
                .await
            {
                warn!(error = %e, "backend logout failed, clearing session anyway");
            }
        }
        self.client.store().clear();
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.get(PROFILE).await
    }

    /// Validate a persisted session at startup.
    ///
    /// Returns the profile when the stored access token is still accepted.
    /// A rejected token clears both tokens and reports unauthenticated.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> Option<UserProfile> {
        if !self.client.store().get().is_authenticated() {
            return None;
        }
        match self.profile().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(error = %e, "stored session rejected");
                self.client.store().clear();
                None
            }
        }
    }
}
