use crate::{
    config::PredictionMutability,
    error::{self, DatabaseError, Result},
    extractors::{Json, UserID},
    recalculation,
    validation::validate_prediction,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::{
    leagues,
    predictions::{self, constraints::*},
    profiles, teams,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    league: Uuid,
    predicted_team: Uuid,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
    league: Uuid,
    predicted_team: Uuid,
    points: i32,
}

pub async fn submit_prediction<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let txn = state.db().begin().await?;

    profiles::Entity::find_by_id(*user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            warn!("tried to predict without registration");
            error::USER_NOT_REGISTERED
        })?;

    // shared lock: a concurrent result write has to finish rescoring first
    let league = leagues::Entity::find_by_id(request.league)
        .lock_shared()
        .one(&txn)
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    let team = teams::Entity::find_by_id(request.predicted_team)
        .one(&txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    validate_prediction(&league, &team)?;

    let existing = predictions::Entity::find_by_user_and_league(*user_id, league.id)
        .lock_exclusive()
        .one(&txn)
        .await?;

    let points = recalculation::current_points(&txn, league.id, &team.id).await?;
    let now = Utc::now();

    let (prediction, status) = match (existing, state.prediction_mutability()) {
        (Some(_), PredictionMutability::Locked) => return Err(error::ALREADY_PREDICTED),
        (Some(existing), PredictionMutability::AlwaysEditable) => {
            let mut model = existing.into_active_model();
            model.team_id = Set(team.id);
            model.points = Set(points);
            model.updated_at = Set(now);

            (model.update(&txn).await?, StatusCode::OK)
        }
        (None, _) => {
            let model = predictions::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(*user_id),
                league_id: Set(league.id),
                team_id: Set(team.id),
                points: Set(points),
                created_at: Set(now),
                updated_at: Set(now),
            };

            match model.insert(&txn).await {
                Ok(prediction) => (prediction, StatusCode::CREATED),
                Err(err) if err.unique_violation(UC_PREDICTIONS_USER_LEAGUE) => {
                    return Err(error::CONCURRENCY_CONFLICT)
                }
                Err(err) => return Err(err.into()),
            }
        }
    };

    txn.commit().await?;

    Ok((
        status,
        Json(Response {
            id: prediction.id,
            league: prediction.league_id,
            predicted_team: prediction.team_id,
            points: prediction.points,
        }),
    ))
}
