use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for login. Fields are optional so that missing input is
/// reported as 400 at the handler rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@b.c"));
        assert!(req.password.is_none());
    }

    #[test]
    fn login_response_shape() {
        let res = LoginResponse {
            message: "Login Successful".into(),
            token: "abc".into(),
            user: PublicUser {
                id: Uuid::new_v4(),
                email: "test@jlabs.com".into(),
            },
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["message"], "Login Successful");
        assert_eq!(json["user"]["email"], "test@jlabs.com");
        assert!(json["user"].get("password_hash").is_none());
    }
}
