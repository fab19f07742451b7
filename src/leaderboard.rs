//! Read-only rankings computed from the current points of the predictions.

use entity::{predictions, profiles, teams};
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, QuerySelect,
};
use serde::Serialize;
use std::cmp::Reverse;
use uuid::Uuid;

trait Ranked {
    fn points(&self) -> i64;
    fn user_id(&self) -> Uuid;
    fn set_rank(&mut self, rank: u32);
}

/// Sorts by points descending, ties by user id, and numbers the entries 1..N.
/// Tied entries still get distinct ranks.
fn assign_ranks<T: Ranked>(entries: &mut [T]) {
    entries.sort_by_key(|entry| (Reverse(entry.points()), entry.user_id()));

    for (rank, entry) in (1..).zip(entries.iter_mut()) {
        entry.set_rank(rank);
    }
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    user_id: Uuid,
    display_name: String,
    total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalEntry {
    pub user_id: Uuid,
    pub display_name: String,
    pub total_points: i64,
    pub rank: u32,
}

impl Ranked for GlobalEntry {
    fn points(&self) -> i64 {
        self.total_points
    }

    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

/// Every registered user with the sum of their points across all leagues.
/// Users without predictions are listed with 0.
pub async fn leaderboard_global<C>(conn: &C) -> Result<Vec<GlobalEntry>, DbErr>
where
    C: ConnectionTrait,
{
    let sum: SimpleExpr = Expr::col((predictions::Entity, predictions::Column::Points)).sum();

    let rows = profiles::Entity::find()
        .select_only()
        .column_as(profiles::Column::Id, "user_id")
        .column(profiles::Column::DisplayName)
        .column_as(
            SimpleExpr::from(Func::coalesce([sum, Expr::val(0).into()])),
            "total_points",
        )
        .left_join(predictions::Entity)
        .group_by(profiles::Column::Id)
        .group_by(profiles::Column::DisplayName)
        .into_model::<TotalRow>()
        .all(conn)
        .await?;

    let mut entries = rows
        .into_iter()
        .map(|row| GlobalEntry {
            user_id: row.user_id,
            display_name: row.display_name,
            total_points: row.total_points,
            rank: 0,
        })
        .collect::<Vec<_>>();

    assign_ranks(&mut entries);

    Ok(entries)
}

#[derive(Debug, FromQueryResult)]
struct PredictionRow {
    user_id: Uuid,
    display_name: String,
    points: i32,
    predicted_team: Uuid,
    predicted_team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueEntry {
    pub user_id: Uuid,
    pub display_name: String,
    pub points: i32,
    pub predicted_team: Uuid,
    pub predicted_team_name: String,
    pub rank: u32,
}

impl Ranked for LeagueEntry {
    fn points(&self) -> i64 {
        self.points.into()
    }

    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

/// The predictions of one league with their owners and predicted teams. The
/// caller is responsible for checking that the league exists.
pub async fn leaderboard_for_league<C>(conn: &C, league_id: Uuid) -> Result<Vec<LeagueEntry>, DbErr>
where
    C: ConnectionTrait,
{
    let rows = predictions::Entity::find_in_league(league_id)
        .select_only()
        .column(predictions::Column::UserId)
        .column_as(profiles::Column::DisplayName, "display_name")
        .column(predictions::Column::Points)
        .column_as(predictions::Column::TeamId, "predicted_team")
        .column_as(teams::Column::Name, "predicted_team_name")
        .inner_join(profiles::Entity)
        .inner_join(teams::Entity)
        .into_model::<PredictionRow>()
        .all(conn)
        .await?;

    let mut entries = rows
        .into_iter()
        .map(|row| LeagueEntry {
            user_id: row.user_id,
            display_name: row.display_name,
            points: row.points,
            predicted_team: row.predicted_team,
            predicted_team_name: row.predicted_team_name,
            rank: 0,
        })
        .collect::<Vec<_>>();

    assign_ranks(&mut entries);

    Ok(entries)
}
