use crate::{
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::{leagues, teams};
use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct Team {
    id: Uuid,
    name: String,
}

pub async fn list_teams<S: StateTrait>(
    State(state): State<S>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<Team>>> {
    leagues::Entity::find_by_id(league_id)
        .one(state.db())
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    let teams = teams::Entity::find_in_league(league_id)
        .order_by_asc(teams::Column::Name)
        .all(state.db())
        .await?
        .into_iter()
        .map(|team| Team {
            id: team.id,
            name: team.name,
        })
        .collect();

    Ok(Json(teams))
}

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    name: String,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_team<S: StateTrait>(
    State(state): State<S>,
    Path(league_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let txn = state.db().begin().await?;

    leagues::Entity::find_by_id(league_id)
        .lock_shared()
        .one(&txn)
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    let id = Uuid::new_v4();

    let team = teams::ActiveModel {
        id: Set(id),
        league_id: Set(league_id),
        name: Set(request.name),
    };

    teams::Entity::insert(team)
        .exec_without_returning(&txn)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(Response { id })))
}
