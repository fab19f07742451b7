use crate::{
    error::{self, DatabaseError},
    extractors::{UserID, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::profiles::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    pub display_name: String,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let profile = profiles::ActiveModel {
        id: Set(*user_id),
        display_name: Set(request.display_name),
        created_at: Set(Utc::now()),
    };

    let result = profiles::Entity::insert(profile)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(PK_PROFILES) => return Err(error::USER_ALREADY_EXISTS),
        r => r?,
    };

    Ok(StatusCode::CREATED)
}
