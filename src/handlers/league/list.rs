use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::State;
use entity::{league_points, leagues, teams};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Team {
    id: Uuid,
    name: String,
}

#[derive(Debug, Serialize)]
pub struct League {
    id: Uuid,
    name: String,
    is_active: bool,
    num_ranked_positions: i16,
    points: Vec<i32>,
    teams: Vec<Team>,
}

pub async fn list_leagues<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<League>>> {
    let leagues = leagues::Entity::find_active()
        .order_by_asc(leagues::Column::Name)
        .all(state.db())
        .await?;

    let ids = leagues.iter().map(|league| league.id).collect::<Vec<_>>();

    let points = league_points::Entity::find()
        .filter(league_points::Column::LeagueId.is_in(ids.clone()))
        .order_by_asc(league_points::Column::Position)
        .all(state.db())
        .await?;

    let teams = teams::Entity::find()
        .filter(teams::Column::LeagueId.is_in(ids))
        .order_by_asc(teams::Column::Name)
        .all(state.db())
        .await?;

    let response = leagues
        .into_iter()
        .map(|league| {
            let id = league.id;

            League {
                id,
                name: league.name,
                is_active: league.is_active,
                num_ranked_positions: league.num_ranked_positions,
                points: points
                    .iter()
                    .filter(|row| row.league_id == id)
                    .map(|row| row.points)
                    .collect(),
                teams: teams
                    .iter()
                    .filter(|team| team.league_id == id)
                    .map(|team| Team {
                        id: team.id,
                        name: team.name.clone(),
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(Json(response))
}
