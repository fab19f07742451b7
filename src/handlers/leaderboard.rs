use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    leaderboard::{self, GlobalEntry, LeagueEntry},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::leagues;
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn global<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
) -> Result<Json<Vec<GlobalEntry>>> {
    Ok(Json(leaderboard::leaderboard_global(state.db()).await?))
}

pub async fn league<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<LeagueEntry>>> {
    leagues::Entity::find_by_id(league_id)
        .one(state.db())
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    Ok(Json(
        leaderboard::leaderboard_for_league(state.db(), league_id).await?,
    ))
}
