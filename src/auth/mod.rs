use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried in a bearer token minted by the external identity provider.
///
/// This service only validates tokens; issuing and session management live
/// with the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Stable subject identifier assigned by the provider
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

#[cfg(test)]
pub(crate) fn test_token(secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = Utc::now();
    let claims = Claims {
        sub: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token encoding")
}
