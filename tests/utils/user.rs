use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use prediction_league::jwt::{Claims, ADMIN_PERMISSION};
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret";

pub trait UserLike {
    fn access_token(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub access_token: String,
}

#[allow(unused)]
impl User {
    /// A fresh identity without a profile.
    pub fn anonymous() -> Self {
        Self::with_permissions(&[])
    }

    pub fn admin() -> Self {
        Self::with_permissions(&[ADMIN_PERMISSION])
    }

    pub fn with_permissions(permissions: &[&str]) -> Self {
        let id = Uuid::new_v4();

        let claims = Claims {
            sub: id,
            permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
            exp: Utc::now().timestamp() + 3600,
        };

        let access_token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .expect("failed to sign token");

        User { id, access_token }
    }
}

impl UserLike for User {
    fn access_token(&self) -> &str {
        &self.access_token
    }
}
