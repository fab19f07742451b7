use crate::{
    error::Result,
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::State;
use chrono::{DateTime, Utc};
use entity::{leagues, predictions, teams};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Prediction {
    id: Uuid,
    league: Uuid,
    league_name: String,
    predicted_team: Uuid,
    predicted_team_name: String,
    points: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

pub async fn list_predictions<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
) -> Result<Json<Vec<Prediction>>> {
    let predictions = predictions::Entity::find()
        .filter(predictions::Column::UserId.eq(*user_id))
        .select_only()
        .column(predictions::Column::Id)
        .column_as(predictions::Column::LeagueId, "league")
        .column_as(leagues::Column::Name, "league_name")
        .column_as(predictions::Column::TeamId, "predicted_team")
        .column_as(teams::Column::Name, "predicted_team_name")
        .column(predictions::Column::Points)
        .column(predictions::Column::CreatedAt)
        .column(predictions::Column::UpdatedAt)
        .inner_join(leagues::Entity)
        .inner_join(teams::Entity)
        .order_by_asc(leagues::Column::Name)
        .into_model::<Prediction>()
        .all(state.db())
        .await?;

    Ok(Json(predictions))
}
