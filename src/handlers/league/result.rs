use crate::{
    error::{self, Result},
    extractors::Json,
    recalculation,
    scoring::Standings,
    validation::validate_result,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use entity::{league_points, league_result_positions, league_results, leagues, teams};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Position {
    position: i16,
    team: Option<Uuid>,
    team_name: Option<String>,
    points: i32,
}

#[derive(Debug, Serialize)]
pub struct Standing {
    league: Uuid,
    updated_at: DateTime<Utc>,
    positions: Vec<Position>,
}

pub async fn get_result<S: StateTrait>(
    State(state): State<S>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Standing>> {
    leagues::Entity::find_by_id(league_id)
        .one(state.db())
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    let result = league_results::Entity::find_by_league(league_id)
        .one(state.db())
        .await?
        .ok_or(error::RESULT_NOT_FOUND)?;

    let points = league_points::Entity::find_by_league(league_id)
        .all(state.db())
        .await?;

    let slots = league_result_positions::Entity::find_by_result(result.id)
        .all(state.db())
        .await?;

    let teams = teams::Entity::find_in_league(league_id)
        .all(state.db())
        .await?;

    let positions = Standings::from_rows(&points, &slots)
        .placements()
        .iter()
        .map(|placement| Position {
            position: placement.position,
            team: placement.team,
            team_name: placement.team.and_then(|id| {
                teams
                    .iter()
                    .find(|team| team.id == id)
                    .map(|team| team.name.clone())
            }),
            points: placement.points,
        })
        .collect();

    Ok(Json(Standing {
        league: league_id,
        updated_at: result.updated_at,
        positions,
    }))
}

#[derive(Deserialize)]
pub struct Request {
    /// First place first, `null` for a slot that is not decided yet.
    positions: Vec<Option<Uuid>>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
    recalculated: usize,
}

/// Creates or replaces the result of a league and rescores all of its
/// predictions in the same transaction.
pub async fn put_result<S: StateTrait>(
    State(state): State<S>,
    Path(league_id): Path<Uuid>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let txn = state.db().begin().await?;

    // serialises result writes of the same league and blocks new predictions
    // until the rescoring is committed
    let league = leagues::Entity::find_by_id(league_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    let ids = request.positions.iter().flatten().copied().collect::<Vec<_>>();

    let found = teams::Entity::find()
        .filter(teams::Column::Id.is_in(ids))
        .all(&txn)
        .await?;

    let slots = request
        .positions
        .into_iter()
        .map(|slot| {
            slot.map(|id| {
                found
                    .iter()
                    .find(|team| team.id == id)
                    .cloned()
                    .ok_or(error::TEAM_NOT_FOUND)
            })
            .transpose()
        })
        .collect::<Result<Vec<_>>>()?;

    validate_result(&league, &slots)?;

    let existing = league_results::Entity::find_by_league(league_id)
        .one(&txn)
        .await?;

    let (result, status) = match existing {
        Some(result) => {
            let mut model = result.into_active_model();
            model.updated_at = Set(Utc::now());

            (model.update(&txn).await?, StatusCode::OK)
        }
        None => {
            let model = league_results::ActiveModel {
                id: Set(Uuid::new_v4()),
                league_id: Set(league_id),
                updated_at: Set(Utc::now()),
            };

            (model.insert(&txn).await?, StatusCode::CREATED)
        }
    };

    league_result_positions::Entity::delete_many()
        .filter(league_result_positions::Column::ResultId.eq(result.id))
        .exec(&txn)
        .await?;

    let rows = (1..)
        .zip(&slots)
        .filter_map(|(position, slot)| {
            slot.as_ref().map(|team| league_result_positions::ActiveModel {
                result_id: Set(result.id),
                position: Set(position),
                team_id: Set(team.id),
            })
        })
        .collect::<Vec<_>>();

    if !rows.is_empty() {
        league_result_positions::Entity::insert_many(rows)
            .exec_without_returning(&txn)
            .await?;
    }

    let recalculated = recalculation::on_result_committed(&txn, &result).await?;

    txn.commit().await?;

    info!(%league_id, recalculated, "saved league result");

    Ok((
        status,
        Json(Response {
            id: result.id,
            recalculated,
        }),
    ))
}
