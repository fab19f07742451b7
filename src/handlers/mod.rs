mod leaderboard;
mod league;
mod prediction;
mod register;
mod team;

use crate::{jwt::ADMIN_PERMISSION, middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    extract::State,
    handler::Handler,
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub(crate) fn admin() -> PermissionsLayer {
    PermissionsLayer::new(&[ADMIN_PERMISSION])
}

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .route("/register", post(register::register::<S>))
                .nest("/leagues", league::routes::<S>())
                .route("/teams/:id", delete(team::delete_team::<S>.layer(admin())))
                .nest("/predictions", prediction::routes::<S>())
                .route("/leaderboard", get(leaderboard::global::<S>))
                .route("/leaderboard/:league_id", get(leaderboard::league::<S>)),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
