use crate::{
    config::{JwtConfig, JwtKey},
    error::{self, Result},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission required by the league management routes.
pub const ADMIN_PERMISSION: &str = "league.admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub exp: i64,
}

impl Claims {
    pub fn has_permissions(&self, required: &[&str]) -> bool {
        required
            .iter()
            .all(|permission| self.permissions.iter().any(|p| p == permission))
    }
}

pub struct Jwt {
    decoding: DecodingKey,
    validation: Validation,
}

impl Jwt {
    pub fn new(config: &JwtConfig) -> std::result::Result<Self, jsonwebtoken::errors::Error> {
        let (decoding, algorithm) = match &config.key {
            JwtKey::Secret(secret) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
            JwtKey::RsaPublic(pem) => (DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256),
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = 5;

        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding,
            validation,
        })
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &self.validation) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(error = error.to_string(), "tried invalid token");
                Err(error::JWT_INVALID_TOKEN)
            }
        }
    }
}
