use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::teams;
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Predictions of the team are deleted and its result slot is cleared. The
/// remaining predictions keep their points, none of them picked this team.
pub async fn delete_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let res = teams::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::TEAM_NOT_FOUND);
    }

    info!(team_id = %id, "deleted team");

    Ok(StatusCode::NO_CONTENT)
}
