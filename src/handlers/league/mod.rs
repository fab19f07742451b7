mod create;
mod delete;
mod list;
mod result;
mod teams;
mod update;

use super::admin;
use crate::StateTrait;
use axum::{
    handler::Handler,
    routing::{get, patch},
    Router,
};
use entity::league_points;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Set};
use uuid::Uuid;

/// Routes for league management
///
/// GET    /leagues
/// GET    /leagues/:id/teams
/// GET    /leagues/:id/result
///
/// # Admin actions
/// POST   /leagues
/// PATCH  /leagues/:id
/// DELETE /leagues/:id
/// POST   /leagues/:id/teams
/// PUT    /leagues/:id/result
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_leagues::<S>).post(create::create_league::<S>.layer(admin())),
        )
        .route(
            "/:id",
            patch(update::update_league::<S>.layer(admin()))
                .delete(delete::delete_league::<S>.layer(admin())),
        )
        .route(
            "/:id/teams",
            get(teams::list_teams::<S>).post(teams::create_team::<S>.layer(admin())),
        )
        .route(
            "/:id/result",
            get(result::get_result::<S>).put(result::put_result::<S>.layer(admin())),
        )
}

/// Writes the point table of a league, position 1 first. `points` is never
/// empty, a league ranks at least one position.
async fn insert_points<C>(conn: &C, league_id: Uuid, points: &[i32]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let rows = (1..).zip(points).map(|(position, &points)| league_points::ActiveModel {
        league_id: Set(league_id),
        position: Set(position),
        points: Set(points),
    });

    league_points::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
