//! API token lifecycle for a single deployed function.

use std::fmt;
use std::sync::Mutex as StdMutex;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use fnforge_core::{ApiToken, Error, Result};

use crate::client::ApiClient;
use crate::endpoints::{
    function_token_delete_path, function_tokens_path, CreateTokenRequest, CreateTokenResponse,
    TokenPermissions,
};

/// Result of a token creation call.
///
/// The backend issues tokens in one of two shapes: an immediate plaintext
/// secret, or a link for a deferred out-of-band issuance step.
pub enum CreatedToken {
    /// The plaintext secret, shown once and never retrievable again,
    /// plus the metadata entry already inserted into the cached list.
    Secret { secret: String, token: ApiToken },
    /// Issuance requires following this link.
    GenerationLink(String),
}

// Intentionally hide the secret in Debug output
impl fmt::Debug for CreatedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatedToken::Secret { token, .. } => f
                .debug_struct("Secret")
                .field("secret", &"[REDACTED]")
                .field("token", token)
                .finish(),
            CreatedToken::GenerationLink(link) => {
                f.debug_tuple("GenerationLink").field(link).finish()
            }
        }
    }
}

/// Manages the API tokens of one deployed function.
///
/// Holds the cached token list a UI would render. Revocation is
/// optimistic: the token disappears from the cache immediately, and a
/// failed backend call restores the exact pre-removal list.
pub struct TokenManager {
    client: ApiClient,
    function_id: String,
    /// Cached list; locked briefly, never across an await.
    tokens: StdMutex<Vec<ApiToken>>,
    /// At most one optimistic removal may be pending at a time, so a
    /// rollback can only ever restore the state it snapshotted.
    revoke_gate: Mutex<()>,
}

impl TokenManager {
    pub fn new(client: ApiClient, function_id: impl Into<String>) -> Self {
        Self {
            client,
            function_id: function_id.into(),
            tokens: StdMutex::new(Vec::new()),
            revoke_gate: Mutex::new(()),
        }
    }

    /// Returns the cached token list.
    pub fn cached(&self) -> Vec<ApiToken> {
        self.tokens.lock().unwrap().clone()
    }

    /// Fetch the current tokens from the backend.
    ///
    /// Token management is supplementary to function editing, so a
    /// failure degrades to an empty list instead of propagating.
    #[instrument(skip(self), fields(function_id = %self.function_id))]
    pub async fn list(&self) -> Vec<ApiToken> {
        match self
            .client
            .get::<Vec<ApiToken>>(&function_tokens_path(&self.function_id))
            .await
        {
            Ok(list) => {
                *self.tokens.lock().unwrap() = list.clone();
                list
            }
            Err(e) => {
                warn!(error = %e, "token listing failed, degrading to empty list");
                self.tokens.lock().unwrap().clear();
                Vec::new()
            }
        }
    }

    /// Request a new token.
    ///
    /// On the immediate-secret shape the entry's metadata is synthesized
    /// client-side and prepended to the cached list until the next
    /// [`TokenManager::list`] refresh. The secret itself is never cached.
    #[instrument(skip(self), fields(function_id = %self.function_id, name))]
    pub async fn create(&self, name: &str) -> Result<CreatedToken> {
        debug!("Creating API token");

        let request = CreateTokenRequest {
            name,
            expires_in_days: 30,
            permissions: TokenPermissions::default(),
        };

        let response: CreateTokenResponse = self
            .client
            .post(&function_tokens_path(&self.function_id), &request)
            .await?;

        if let Some(secret) = response.token {
            let token = ApiToken {
                id: response
                    .id
                    .unwrap_or_else(|| format!("pending-{}", Utc::now().timestamp_millis())),
                name: response.name.unwrap_or_else(|| name.to_string()),
                prefix: ApiToken::prefix_of(&secret),
                created_at: Some(Utc::now()),
                last_used: Some("Never".to_string()),
                is_active: true,
            };
            self.tokens.lock().unwrap().insert(0, token.clone());
            return Ok(CreatedToken::Secret { secret, token });
        }

        if let Some(link) = response.generation_link {
            return Ok(CreatedToken::GenerationLink(link));
        }

        Err(Error::Server {
            status: 200,
            message: "Invalid response from server: token not found.".to_string(),
        })
    }

    /// Revoke a token, optimistically.
    ///
    /// The token is removed from the cached list before the delete call
    /// is issued; a failed call restores the list exactly as it was
    /// before this removal and surfaces the error. Revoking an id that is
    /// already absent is safe: the local removal is a no-op and a backend
    /// 404 restores an identical list.
    #[instrument(skip(self), fields(function_id = %self.function_id, token_id))]
    pub async fn revoke(&self, token_id: &str) -> Result<()> {
        let _pending = self.revoke_gate.lock().await;

        let snapshot = {
            let mut tokens = self.tokens.lock().unwrap();
            let snapshot = tokens.clone();
            tokens.retain(|t| t.id != token_id);
            snapshot
        };

        match self
            .client
            .delete(&function_token_delete_path(&self.function_id, token_id))
            .await
        {
            Ok(()) => {
                debug!("Token revoked");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "token revoke failed, restoring cached list");
                *self.tokens.lock().unwrap() = snapshot;
                Err(e)
            }
        }
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("function_id", &self.function_id)
            .field("cached", &self.tokens.lock().unwrap().len())
            .finish_non_exhaustive()
    }
}
