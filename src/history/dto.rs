use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for saving a lookup. The client sends the provider payload
/// under `geodata`; it is stored and returned as `geo_data`.
#[derive(Debug, Deserialize)]
pub struct CreateHistoryRequest {
    pub ip_address: Option<String>,
    pub geodata: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CreateHistoryResponse {
    pub message: String,
    pub id: Uuid,
}
