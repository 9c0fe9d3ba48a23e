use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Identity resolved from a verified bearer token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}

/// Extracts and validates the bearer token, annotating the request with the
/// caller's identity. Pure filter: no persistence, no side effects.
#[derive(Debug)]
pub struct AuthUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthenticated("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthenticated("Invalid Authorization header"))?;

        // One message for malformed and expired tokens.
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::unauthenticated("Invalid or expired token")
        })?;

        Ok(AuthUser(Identity {
            user_id: claims.sub,
            email: claims.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::IntoResponse;
    use axum::http::StatusCode;

    fn keys(ttl_minutes: i64) -> JwtKeys {
        JwtKeys::from_config(&JwtConfig {
            secret: "test-secret".into(),
            ttl_minutes,
        })
    }

    fn parts(auth_header: Option<&str>) -> axum::http::request::Parts {
        let mut builder = Request::builder().uri("/history");
        if let Some(h) = auth_header {
            builder = builder.header(axum::http::header::AUTHORIZATION, h);
        }
        builder.body(Body::empty()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let mut p = parts(None);
        let err = AuthUser::from_request_parts(&mut p, &keys(60))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let mut p = parts(Some("Basic dXNlcjpwYXNz"));
        let err = AuthUser::from_request_parts(&mut p, &keys(60))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_resolves_identity() {
        let keys = keys(60);
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "test@jlabs.com").unwrap();
        let mut p = parts(Some(&format!("Bearer {token}")));
        let AuthUser(identity) = AuthUser::from_request_parts(&mut p, &keys)
            .await
            .expect("extract");
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "test@jlabs.com");
    }

    #[tokio::test]
    async fn expired_and_malformed_tokens_get_the_same_rejection() {
        let expired_keys = keys(-5);
        let expired = expired_keys.sign(Uuid::new_v4(), "a@b.c").unwrap();

        let mut p1 = parts(Some(&format!("Bearer {expired}")));
        let e1 = AuthUser::from_request_parts(&mut p1, &expired_keys)
            .await
            .unwrap_err();

        let mut p2 = parts(Some("Bearer not-a-jwt"));
        let e2 = AuthUser::from_request_parts(&mut p2, &expired_keys)
            .await
            .unwrap_err();

        assert_eq!(e1.to_string(), e2.to_string());
    }
}
