use super::insert_points;
use crate::{
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    scoring::{self, DEFAULT_POINTS},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::leagues;
use sea_orm::{EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

fn active() -> bool {
    true
}

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    name: String,
    #[serde(default = "active")]
    is_active: bool,
    #[validate(range(min = 1, max = 10))]
    num_ranked_positions: Option<i16>,
    points: Option<Vec<i32>>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_league<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let positions = request
        .num_ranked_positions
        .map_or(DEFAULT_POINTS.len(), |positions| positions as usize);

    let points =
        scoring::point_table(positions, request.points).ok_or(error::INVALID_POINT_TABLE)?;

    let txn = state.db().begin().await?;
    let id = Uuid::new_v4();

    let league = leagues::ActiveModel {
        id: Set(id),
        name: Set(request.name),
        is_active: Set(request.is_active),
        num_ranked_positions: Set(positions as i16),
        created_at: Set(Utc::now()),
    };

    leagues::Entity::insert(league)
        .exec_without_returning(&txn)
        .await?;

    insert_points(&txn, id, &points).await?;

    txn.commit().await?;

    info!(league_id = %id, positions, "created league");

    Ok((StatusCode::CREATED, Json(Response { id })))
}
