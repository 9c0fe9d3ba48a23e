use sqlx::PgPool;
use uuid::Uuid;

use crate::history::repo_types::SearchRecord;

impl SearchRecord {
    /// Insert one lookup record owned by `user_id`.
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        ip_address: &str,
        geo_data: Option<serde_json::Value>,
    ) -> anyhow::Result<SearchRecord> {
        let record = sqlx::query_as::<_, SearchRecord>(
            r#"
            INSERT INTO search_history (user_id, ip_address, geo_data)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, ip_address, geo_data, created_at
            "#,
        )
        .bind(user_id)
        .bind(ip_address)
        .bind(geo_data)
        .fetch_one(db)
        .await?;
        Ok(record)
    }

    /// All records owned by `user_id`, newest first. Every query is scoped by
    /// owner; there is no path that reads another user's rows.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<SearchRecord>> {
        let rows = sqlx::query_as::<_, SearchRecord>(
            r#"
            SELECT id, user_id, ip_address, geo_data, created_at
            FROM search_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
