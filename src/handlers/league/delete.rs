use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::leagues;
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Teams, predictions and the result of the league go with it.
pub async fn delete_league<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let res = leagues::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::LEAGUE_NOT_FOUND);
    }

    info!(league_id = %id, "deleted league");

    Ok(StatusCode::NO_CONTENT)
}
