//! External-service registry operations.

use serde_json::Value;
use tracing::{debug, instrument};

use fnforge_core::{Error, ExternalService, NewExternalService, Result};

use crate::client::ApiClient;
use crate::endpoints::{
    external_api_path, IntrospectRequest, IntrospectResponse, EXTERNAL_APIS,
    EXTERNAL_APIS_INTROSPECT,
};

/// CRUD and schema discovery for registered external services.
#[derive(Clone, Debug)]
pub struct ExternalApisApi {
    client: ApiClient,
}

impl ExternalApisApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List registered services, optionally filtered by kind
    /// (`"api"` or `"database"`).
    #[instrument(skip(self))]
    pub async fn list(&self, kind: Option<&str>) -> Result<Vec<ExternalService>> {
        debug!("Listing external services");
        let endpoint = match kind {
            Some(kind) => format!("{}?type={}", EXTERNAL_APIS, kind),
            None => EXTERNAL_APIS.to_string(),
        };
        self.client.get(&endpoint).await
    }

    /// Register a new service.
    #[instrument(skip(self, service), fields(name = %service.name))]
    pub async fn create(&self, service: &NewExternalService) -> Result<ExternalService> {
        self.client.post(EXTERNAL_APIS, service).await
    }

    /// Replace a service registration.
    #[instrument(skip(self, service))]
    pub async fn update(&self, id: &str, service: &NewExternalService) -> Result<ExternalService> {
        self.client.put(&external_api_path(id), service).await
    }

    /// Remove a service registration.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&external_api_path(id)).await
    }

    /// Discover the schema behind a database connection config.
    #[instrument(skip(self, config))]
    pub async fn introspect(&self, config: &Value) -> Result<Value> {
        debug!("Introspecting external service");
        let request = IntrospectRequest { config };
        let response: IntrospectResponse =
            self.client.post(EXTERNAL_APIS_INTROSPECT, &request).await?;

        if !response.success {
            // Failed introspections normally arrive as a 400 and are
            // normalized before this point; a 2xx with success=false is a
            // backend contract violation.
            return Err(Error::Server {
                status: 200,
                message: response
                    .message
                    .unwrap_or_else(|| "introspection failed".to_string()),
            });
        }

        Ok(response.schema.unwrap_or(Value::Null))
    }
}
