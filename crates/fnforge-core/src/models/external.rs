//! External-service registry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered external REST service or database connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalService {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub base_url: Option<String>,
    /// `"api"` or `"database"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub auth_type: String,
    #[serde(default)]
    pub auth_config: serde_json::Value,
    #[serde(default)]
    pub default_headers: serde_json::Value,
    #[serde(default)]
    pub default_params: serde_json::Value,
    /// Database connection config (engine, host, port, ...).
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for registering or replacing an external service.
#[derive(Debug, Clone, Serialize)]
pub struct NewExternalService {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub auth_type: String,
    pub auth_config: serde_json::Value,
    pub default_headers: serde_json::Value,
    pub default_params: serde_json::Value,
    pub config: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_maps_to_the_type_field() {
        let service: ExternalService = serde_json::from_value(json!({
            "id": "ext-1",
            "name": "billing db",
            "type": "database"
        }))
        .unwrap();
        assert_eq!(service.kind, "database");

        let payload = serde_json::to_value(&service).unwrap();
        assert_eq!(payload["type"], "database");
    }
}
