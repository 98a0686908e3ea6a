//! User-authored backend function models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored backend function or database-query endpoint.
///
/// Deployed functions (`is_active`) are callable through the execution
/// endpoint by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub parameters_schema: serde_json::Value,
    #[serde(default)]
    pub is_active: bool,
    /// `"script"` or `"database_query"`.
    #[serde(default)]
    pub function_type: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub execution_count: i64,
}

/// Payload for creating a function.
#[derive(Debug, Clone, Serialize)]
pub struct NewFunction {
    pub name: String,
    pub description: String,
    pub language: String,
    pub code: String,
    pub parameters_schema: serde_json::Value,
    pub function_type: String,
    pub is_active: bool,
}

/// Partial update payload; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_sparse_backend_payload() {
        let func: FunctionDef = serde_json::from_value(json!({
            "id": "a2f1c6d0-0000-0000-0000-000000000000",
            "name": "sum"
        }))
        .unwrap();

        assert_eq!(func.name, "sum");
        assert!(!func.is_active);
        assert_eq!(func.execution_count, 0);
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = FunctionUpdate {
            is_active: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"is_active": true}));
    }
}
