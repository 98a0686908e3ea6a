//! The request executor: bearer attachment, refresh-and-retry, error
//! normalization.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use fnforge_core::{AccessToken, BaseUrl, Error, RefreshToken, Result, SessionStore};

use crate::endpoints::{RefreshRequest, RefreshResponse, TOKEN_REFRESH};

/// HTTP client for the FnForge backend.
///
/// Every outbound call goes through one executor: it attaches the bearer
/// token read from the session store at send time, recovers a single 401
/// per call via the refresh protocol, and normalizes every failure into
/// [`fnforge_core::Error`].
///
/// Cheap to clone; clones share the session store and connection pool.
///
/// Concurrent calls that each receive a 401 will each run their own
/// refresh exchange; the last writer wins in the store, which is safe
/// because every writer stores a freshly issued pair.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
    on_session_expired: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ApiClient {
    /// Create a new client over the given session store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fnforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            store,
            on_session_expired: None,
        }
    }

    /// Register the forced-logout hook.
    ///
    /// Invoked exactly once per call whose 401 could not be resolved by
    /// the refresh protocol (outside of login attempts); the embedding
    /// layer uses it to navigate to its login surface.
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Returns the shared session store.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Returns the currently configured backend base URL.
    pub fn base_url(&self) -> BaseUrl {
        self.store.get().base_url
    }

    // ========================================================================
    // Typed verbs
    // ========================================================================

    /// GET an endpoint and deserialize the response.
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        let (status, value) = self.send(Method::GET, endpoint, None, None).await?;
        decode(status, value)
    }

    /// POST a JSON body and deserialize the response.
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R> {
        let body = to_body(body)?;
        let (status, value) = self.send(Method::POST, endpoint, Some(body), None).await?;
        decode(status, value)
    }

    /// PUT a JSON body and deserialize the response.
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R> {
        let body = to_body(body)?;
        let (status, value) = self.send(Method::PUT, endpoint, Some(body), None).await?;
        decode(status, value)
    }

    /// PATCH a JSON body and deserialize the response.
    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R> {
        let body = to_body(body)?;
        let (status, value) = self.send(Method::PATCH, endpoint, Some(body), None).await?;
        decode(status, value)
    }

    /// DELETE an endpoint, discarding the (usually empty) response body.
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        self.send(Method::DELETE, endpoint, None, None).await?;
        Ok(())
    }

    /// Issue a request and return the raw JSON response.
    ///
    /// `extra_headers` are merged over the defaults. A 204 response
    /// resolves to an empty JSON object.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value> {
        let (_, value) = self.send(method, endpoint, body, extra_headers).await?;
        Ok(value)
    }

    // ========================================================================
    // Executor
    // ========================================================================

    /// Run one logical call: attach token, send, recover a single 401 via
    /// refresh-and-retry, normalize everything else.
    #[instrument(skip(self, body, extra_headers), fields(%method, endpoint))]
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<(u16, Value)> {
        let base_url = self.store.get().base_url;
        let url = base_url.join(endpoint);

        let mut response = self
            .attempt(&method, &url, body.as_ref(), extra_headers.as_ref())
            .await
            .map_err(|e| transport_error(e, &base_url))?;

        // A 401 on an auth endpoint is never refreshed: the login and
        // refresh endpoints failing with 401 must not re-enter the
        // refresh exchange.
        if response.status() == StatusCode::UNAUTHORIZED
            && !is_auth_endpoint(endpoint)
            && self.try_refresh().await
        {
            debug!("retrying request with refreshed access token");
            response = self
                .attempt(&method, &url, body.as_ref(), extra_headers.as_ref())
                .await
                .map_err(|e| transport_error(e, &base_url))?;
        }

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Terminal: refresh was impossible, failed, or the retried
            // request was rejected again.
            self.store.clear();
            if is_login_endpoint(endpoint) {
                return Err(Error::invalid_credentials());
            }
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
            return Err(Error::session_expired());
        }

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::from_response(status.as_u16(), &reason, &text));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok((status.as_u16(), Value::Object(serde_json::Map::new())));
        }

        let value = response.json::<Value>().await.map_err(|e| Error::Server {
            status: status.as_u16(),
            message: format!("invalid JSON in response body: {}", e),
        })?;

        Ok((status.as_u16(), value))
    }

    /// One network attempt. The bearer token is read from the store here,
    /// not earlier, so a retry after refresh picks up the rotated token.
    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        extra_headers: Option<&HeaderMap>,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.store.get().access_token {
            headers.insert(AUTHORIZATION, bearer(&token));
        }
        if let Some(extra) = extra_headers {
            for (name, value) in extra {
                headers.insert(name.clone(), value.clone());
            }
        }

        let mut builder = self.http.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.send().await
    }

    // ========================================================================
    // Session Refresh Protocol
    // ========================================================================

    /// Attempt to exchange the stored refresh token for a new access
    /// token. Returns `true` when the store now holds a fresh pair.
    ///
    /// Failures are absorbed here; the caller falls through to its
    /// terminal 401 handling.
    async fn try_refresh(&self) -> bool {
        let session = self.store.get();
        let Some(refresh_token) = session.refresh_token else {
            return false;
        };

        debug!("access token rejected, attempting refresh");
        match self.exchange_refresh(&session.base_url, &refresh_token).await {
            Ok(pair) => {
                self.commit_pair(pair);
                debug!("session refreshed");
                true
            }
            Err(e) => {
                warn!(error = %e, "token refresh failed");
                false
            }
        }
    }

    /// Refresh the session explicitly.
    ///
    /// The exchange is unauthenticated (no bearer header) and never
    /// retried. On success both tokens are updated together; when the
    /// server does not rotate the refresh token, the old one is retained.
    #[instrument(skip(self))]
    pub async fn refresh_session(&self) -> Result<()> {
        let session = self.store.get();
        let refresh_token = session.refresh_token.ok_or_else(|| Error::Auth {
            message: "No refresh token available.".to_string(),
        })?;

        let pair = self
            .exchange_refresh(&session.base_url, &refresh_token)
            .await?;
        self.commit_pair(pair);
        Ok(())
    }

    async fn exchange_refresh(
        &self,
        base_url: &BaseUrl,
        refresh_token: &RefreshToken,
    ) -> Result<RefreshResponse> {
        let url = base_url.join(TOKEN_REFRESH);
        let request = RefreshRequest {
            refresh: refresh_token.as_str(),
        };

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(e, base_url))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::from_response(status.as_u16(), &reason, &text));
        }

        response.json::<RefreshResponse>().await.map_err(|e| Error::Server {
            status: status.as_u16(),
            message: format!("invalid refresh response: {}", e),
        })
    }

    /// Persist a refreshed token pair. One store write, so readers never
    /// observe a new refresh token next to a stale access token.
    fn commit_pair(&self, pair: RefreshResponse) {
        let mut session = self.store.get();
        session.access_token = Some(AccessToken::new(pair.access));
        if let Some(rotated) = pair.refresh {
            session.refresh_token = Some(RefreshToken::new(rotated));
        }
        self.store.set(session);
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.store.get().base_url)
            .finish_non_exhaustive()
    }
}

/// Endpoints that must never trigger the refresh exchange.
fn is_auth_endpoint(endpoint: &str) -> bool {
    endpoint.contains("/auth/login") || endpoint.contains("/token/refresh")
}

fn is_login_endpoint(endpoint: &str) -> bool {
    endpoint.contains("/auth/login")
}

fn bearer(token: &AccessToken) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
        .expect("invalid token characters")
}

fn transport_error(e: reqwest::Error, base_url: &BaseUrl) -> Error {
    warn!(error = %e, "transport failure");
    Error::unreachable(base_url.as_str())
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| Error::InvalidInput {
        message: format!("unserializable request body: {}", e),
    })
}

fn decode<R: DeserializeOwned>(status: u16, value: Value) -> Result<R> {
    serde_json::from_value(value).map_err(|e| Error::Server {
        status,
        message: format!("unexpected response shape: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnforge_core::MemoryStore;

    #[test]
    fn auth_endpoints_are_exempt_from_refresh() {
        assert!(is_auth_endpoint("/api/auth/login/"));
        assert!(is_auth_endpoint("/api/auth/token/refresh/"));
        assert!(!is_auth_endpoint("/api/functions/"));
    }

    #[test]
    fn client_creation() {
        let store = Arc::new(MemoryStore::new(
            BaseUrl::new("http://localhost:8000").unwrap(),
        ));
        let client = ApiClient::new(store);
        assert_eq!(client.base_url().host(), Some("localhost"));
    }
}
