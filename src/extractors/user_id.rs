use crate::{
    error::{self, Error},
    jwt::Claims,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::ops::Deref;
use uuid::Uuid;

/// The subject of the verified bearer token. Rejects the request when the
/// claims middleware found no valid token.
pub struct UserID(Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UserID
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(claims) = parts.extensions.get::<Claims>() else {
            return Err(error::COULD_NOT_GET_CLAIMS);
        };

        Ok(UserID(claims.sub))
    }
}

impl Deref for UserID {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
