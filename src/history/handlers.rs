use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    history::{
        dto::{CreateHistoryRequest, CreateHistoryResponse},
        repo_types::SearchRecord,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/history", post(create_history).get(list_history))
}

#[instrument(skip(state, payload))]
pub async fn create_history(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateHistoryRequest>,
) -> Result<Json<CreateHistoryResponse>, ApiError> {
    let ip_address = match payload.ip_address {
        Some(ip) if !ip.is_empty() => ip,
        _ => {
            warn!(user_id = %identity.user_id, "create_history missing ip_address");
            return Err(ApiError::bad_request("IP address is required"));
        }
    };

    let record = SearchRecord::insert(&state.db, identity.user_id, &ip_address, payload.geodata)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %identity.user_id, "insert history failed");
            ApiError::Internal(e)
        })?;

    info!(user_id = %identity.user_id, record_id = %record.id, "history saved");
    Ok(Json(CreateHistoryResponse {
        message: "History saved!".into(),
        id: record.id,
    }))
}

#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Vec<SearchRecord>>, ApiError> {
    let records = SearchRecord::list_by_user(&state.db, identity.user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %identity.user_id, "list history failed");
            ApiError::Internal(e)
        })?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::extractors::Identity;
    use uuid::Uuid;

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "test@jlabs.com".into(),
        }
    }

    #[tokio::test]
    async fn missing_ip_address_is_bad_request() {
        let state = AppState::fake();
        let err = create_history(
            State(state),
            AuthUser(identity()),
            Json(CreateHistoryRequest {
                ip_address: None,
                geodata: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn empty_ip_address_is_bad_request() {
        let state = AppState::fake();
        let err = create_history(
            State(state),
            AuthUser(identity()),
            Json(CreateHistoryRequest {
                ip_address: Some("".into()),
                geodata: Some(serde_json::json!({"country": "US"})),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
