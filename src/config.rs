use std::{env, str::FromStr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// What happens when a user submits a prediction for a league they already
/// predicted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PredictionMutability {
    /// The first prediction is final.
    Locked,
    /// The prediction is replaced in place.
    #[default]
    AlwaysEditable,
}

impl FromStr for PredictionMutability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locked" => Ok(Self::Locked),
            "always-editable" | "always_editable" => Ok(Self::AlwaysEditable),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtKey {
    /// HS256 shared secret.
    Secret(String),
    /// RS256 public key in PEM format.
    RsaPublic(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub key: JwtKey,
    pub audience: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub prediction_mutability: PredictionMutability,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let key = match (lookup("JWT_RSA_PUBLIC"), lookup("JWT_SECRET")) {
            (Some(pem), _) => JwtKey::RsaPublic(pem),
            (None, Some(secret)) => JwtKey::Secret(secret),
            (None, None) => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        let prediction_mutability = match lookup("PREDICTION_MUTABILITY") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PREDICTION_MUTABILITY",
                value,
            })?,
            None => PredictionMutability::default(),
        };

        Ok(Self {
            database_url,
            port,
            jwt: JwtConfig {
                key,
                audience: lookup("JWT_AUDIENCE"),
            },
            prediction_mutability,
        })
    }
}
