use super::insert_points;
use crate::{
    error::{self, Result},
    extractors::ValidatedJson,
    recalculation, scoring,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::{league_points, leagues};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    name: Option<String>,
    is_active: Option<bool>,
    points: Option<Vec<i32>>,
}

pub async fn update_league<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    let league = leagues::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::LEAGUE_NOT_FOUND)?;

    // the number of ranked positions is fixed, only the values can change
    let points = request
        .points
        .map(|points| {
            scoring::point_table(league.num_ranked_positions as usize, Some(points))
                .ok_or(error::INVALID_POINT_TABLE)
        })
        .transpose()?;

    let model = leagues::ActiveModel {
        id: Unchanged(league.id),
        name: set_option(request.name),
        is_active: set_option(request.is_active),
        ..Default::default()
    };

    // the ORM would generate an empty UPDATE otherwise
    if model.is_changed() {
        leagues::Entity::update(model).exec(&txn).await?;
    }

    if let Some(points) = points {
        league_points::Entity::delete_many()
            .filter(league_points::Column::LeagueId.eq(league.id))
            .exec(&txn)
            .await?;

        insert_points(&txn, league.id, &points).await?;

        recalculation::on_points_changed(&txn, league.id).await?;
    }

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
