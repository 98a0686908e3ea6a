//! Function CRUD and execution operations.

use serde_json::Value;
use tracing::{debug, instrument};

use fnforge_core::{FunctionDef, FunctionUpdate, NewFunction, Result};

use crate::client::ApiClient;
use crate::endpoints::{execute_path, function_path, FUNCTIONS};

/// CRUD and execution for user-authored backend functions.
#[derive(Clone, Debug)]
pub struct FunctionsApi {
    client: ApiClient,
}

impl FunctionsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all functions owned by the authenticated user.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<FunctionDef>> {
        debug!("Listing functions");
        self.client.get(FUNCTIONS).await
    }

    /// Fetch a single function.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<FunctionDef> {
        self.client.get(&function_path(id)).await
    }

    /// Create a function.
    #[instrument(skip(self, function), fields(name = %function.name))]
    pub async fn create(&self, function: &NewFunction) -> Result<FunctionDef> {
        debug!("Creating function");
        self.client.post(FUNCTIONS, function).await
    }

    /// Replace a function definition.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: &FunctionUpdate) -> Result<FunctionDef> {
        self.client.put(&function_path(id), update).await
    }

    /// Deploy or undeploy a function.
    #[instrument(skip(self))]
    pub async fn set_active(&self, id: &str, active: bool) -> Result<FunctionDef> {
        let update = FunctionUpdate {
            is_active: Some(active),
            ..Default::default()
        };
        self.client.patch(&function_path(id), &update).await
    }

    /// Delete a function.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        debug!("Deleting function");
        self.client.delete(&function_path(id)).await
    }

    /// Invoke a deployed function by name with an arbitrary JSON payload.
    ///
    /// The response is whatever the function returns.
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, name: &str, payload: &Value) -> Result<Value> {
        debug!("Executing function");
        self.client.post(&execute_path(name), payload).await
    }
}
