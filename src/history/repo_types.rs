use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// One saved IP lookup. `geo_data` is whatever the geolocation provider
/// returned, stored as-is; the server never validates its shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ip_address: String,
    pub geo_data: Option<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
