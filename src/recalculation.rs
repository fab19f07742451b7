//! Keeps `predictions.points` in sync with the league results.
//!
//! Every function here takes a connection instead of owning a transaction so
//! the caller can run it inside the same transaction as the write that made
//! the points stale. Every value written to the `points` column is computed
//! here.

use crate::scoring::{self, Standings};
use entity::{league_points, league_result_positions, league_results, predictions};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use std::collections::BTreeMap;
use tracing::Instrument;
use uuid::Uuid;

/// Prediction ids grouped by the points they should hold.
pub type PointsBatch = BTreeMap<i32, Vec<Uuid>>;

/// Scores every prediction against `standings`. All predictions are
/// included, even the ones whose value does not change.
pub fn recompute(predictions: &[predictions::Model], standings: Option<&Standings>) -> PointsBatch {
    let mut batch = PointsBatch::new();

    for prediction in predictions {
        batch
            .entry(scoring::score(&prediction.team_id, standings))
            .or_default()
            .push(prediction.id);
    }

    batch
}

/// Loads the current standings of a league, `None` if it has no result yet.
pub async fn load_standings<C>(conn: &C, league_id: Uuid) -> Result<Option<Standings>, DbErr>
where
    C: ConnectionTrait,
{
    let Some(result) = league_results::Entity::find_by_league(league_id)
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    standings_of(conn, &result).await.map(Some)
}

async fn standings_of<C>(conn: &C, result: &league_results::Model) -> Result<Standings, DbErr>
where
    C: ConnectionTrait,
{
    let points = league_points::Entity::find_by_league(result.league_id)
        .all(conn)
        .await?;

    let positions = league_result_positions::Entity::find_by_result(result.id)
        .all(conn)
        .await?;

    Ok(Standings::from_rows(&points, &positions))
}

/// Points a pick of `team_id` is worth against the current result. Used when
/// a prediction is written so it never starts out stale.
pub async fn current_points<C>(conn: &C, league_id: Uuid, team_id: &Uuid) -> Result<i32, DbErr>
where
    C: ConnectionTrait,
{
    let standings = load_standings(conn, league_id).await?;

    Ok(scoring::score(team_id, standings.as_ref()))
}

/// Rescores every prediction of the result's league.
///
/// Must be called after the result and its positions are written, on the same
/// transaction, so the result and the points become visible together. Returns
/// the number of predictions rescored.
pub async fn on_result_committed<C>(conn: &C, result: &league_results::Model) -> Result<usize, DbErr>
where
    C: ConnectionTrait,
{
    let standings = standings_of(conn, result).await?;
    rescore_league(conn, result.league_id, &standings).await
}

/// Rescores a league after its point table changed. Leagues without a result
/// have nothing to rescore.
pub async fn on_points_changed<C>(conn: &C, league_id: Uuid) -> Result<usize, DbErr>
where
    C: ConnectionTrait,
{
    let Some(standings) = load_standings(conn, league_id).await? else {
        return Ok(0);
    };

    rescore_league(conn, league_id, &standings).await
}

async fn rescore_league<C>(
    conn: &C,
    league_id: Uuid,
    standings: &Standings,
) -> Result<usize, DbErr>
where
    C: ConnectionTrait,
{
    let rescore = async {
        let predictions = predictions::Entity::find_in_league(league_id)
            .all(conn)
            .await?;

        let batch = recompute(&predictions, Some(standings));
        write_batch(conn, batch).await?;

        info!(count = predictions.len(), "rescored predictions");

        Ok::<_, DbErr>(predictions.len())
    };

    rescore
        .instrument(info_span!("recalculating", %league_id))
        .await
}

async fn write_batch<C>(conn: &C, batch: PointsBatch) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for (points, ids) in batch {
        predictions::Entity::update_many()
            .col_expr(predictions::Column::Points, Expr::value(points))
            .filter(predictions::Column::Id.is_in(ids))
            .exec(conn)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::DEFAULT_POINTS;
    use chrono::Utc;

    fn prediction(team_id: Uuid) -> predictions::Model {
        predictions::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            league_id: Uuid::nil(),
            team_id,
            points: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn points_of(batch: &PointsBatch, id: &Uuid) -> Option<i32> {
        batch
            .iter()
            .find(|(_, ids)| ids.contains(id))
            .map(|(points, _)| *points)
    }

    #[test]
    fn every_prediction_is_in_the_batch() {
        let teams = (0..6).map(|_| Uuid::new_v4()).collect::<Vec<_>>();
        let slots = teams.iter().copied().map(Some).collect::<Vec<_>>();
        let standings = Standings::new(&DEFAULT_POINTS, &slots);

        let predictions = vec![
            prediction(teams[0]),
            prediction(teams[0]),
            prediction(teams[1]),
            prediction(Uuid::new_v4()),
        ];

        let batch = recompute(&predictions, Some(&standings));

        assert_eq!(batch.values().map(Vec::len).sum::<usize>(), 4);
        assert_eq!(points_of(&batch, &predictions[0].id), Some(20));
        assert_eq!(points_of(&batch, &predictions[1].id), Some(20));
        assert_eq!(points_of(&batch, &predictions[2].id), Some(15));
        assert_eq!(points_of(&batch, &predictions[3].id), Some(0));
    }

    #[test]
    fn changed_result_moves_points() {
        let teams = (0..6).map(|_| Uuid::new_v4()).collect::<Vec<_>>();
        let mut slots = teams.iter().copied().map(Some).collect::<Vec<_>>();
        let predictions = vec![prediction(teams[0])];

        let before = recompute(&predictions, Some(&Standings::new(&DEFAULT_POINTS, &slots)));
        slots.swap(0, 1);
        let after = recompute(&predictions, Some(&Standings::new(&DEFAULT_POINTS, &slots)));

        assert_eq!(points_of(&before, &predictions[0].id), Some(20));
        assert_eq!(points_of(&after, &predictions[0].id), Some(15));
    }

    #[test]
    fn recompute_is_idempotent() {
        let teams = (0..6).map(|_| Uuid::new_v4()).collect::<Vec<_>>();
        let slots = teams.iter().copied().map(Some).collect::<Vec<_>>();
        let standings = Standings::new(&DEFAULT_POINTS, &slots);
        let predictions = teams.iter().copied().map(prediction).collect::<Vec<_>>();

        assert_eq!(
            recompute(&predictions, Some(&standings)),
            recompute(&predictions, Some(&standings))
        );
    }

    async fn database() -> sea_orm::DbConn {
        use migration::MigratorTrait;

        let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1);

        let db = sea_orm::Database::connect(opts).await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    /// One league with six teams, a full result, and one prediction on the
    /// winner that still holds 0 points.
    async fn seed(db: &sea_orm::DbConn) -> (league_results::Model, Uuid) {
        use entity::{leagues, profiles, teams};
        use sea_orm::IntoActiveModel;

        let league = leagues::Model {
            id: Uuid::new_v4(),
            name: "Premier League".to_owned(),
            is_active: true,
            num_ranked_positions: 6,
            created_at: Utc::now(),
        };
        leagues::Entity::insert(league.clone().into_active_model())
            .exec_without_returning(db)
            .await
            .unwrap();

        let points = (1..).zip(DEFAULT_POINTS).map(|(position, points)| {
            league_points::Model {
                league_id: league.id,
                position,
                points,
            }
            .into_active_model()
        });
        league_points::Entity::insert_many(points)
            .exec_without_returning(db)
            .await
            .unwrap();

        let teams = (1..=6)
            .map(|i| teams::Model {
                id: Uuid::new_v4(),
                league_id: league.id,
                name: format!("Team {i}"),
            })
            .collect::<Vec<_>>();
        teams::Entity::insert_many(teams.iter().cloned().map(IntoActiveModel::into_active_model))
            .exec_without_returning(db)
            .await
            .unwrap();

        let result = league_results::Model {
            id: Uuid::new_v4(),
            league_id: league.id,
            updated_at: Utc::now(),
        };
        league_results::Entity::insert(result.clone().into_active_model())
            .exec_without_returning(db)
            .await
            .unwrap();

        let slots = (1..).zip(&teams).map(|(position, team)| {
            league_result_positions::Model {
                result_id: result.id,
                position,
                team_id: team.id,
            }
            .into_active_model()
        });
        league_result_positions::Entity::insert_many(slots)
            .exec_without_returning(db)
            .await
            .unwrap();

        let user = profiles::Model {
            id: Uuid::new_v4(),
            display_name: "Player".to_owned(),
            created_at: Utc::now(),
        };
        profiles::Entity::insert(user.clone().into_active_model())
            .exec_without_returning(db)
            .await
            .unwrap();

        let prediction = predictions::Model {
            user_id: user.id,
            league_id: league.id,
            ..prediction(teams[0].id)
        };
        predictions::Entity::insert(prediction.clone().into_active_model())
            .exec_without_returning(db)
            .await
            .unwrap();

        (result, prediction.id)
    }

    #[tokio::test]
    async fn committed_result_rescores_stored_predictions() {
        let db = database().await;
        let (result, prediction) = seed(&db).await;

        assert_eq!(on_result_committed(&db, &result).await.unwrap(), 1);

        let stored = predictions::Entity::find_by_id(prediction)
            .one(&db)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.points, 20);
    }

    #[tokio::test]
    async fn recalculation_span_stays_with_its_own_task() {
        use std::sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        };

        let _subscriber = tracing::subscriber::set_default(tracing_subscriber::registry());

        let db = database().await;
        let (result, _) = seed(&db).await;

        let done = Arc::new(AtomicBool::new(false));
        let seen = Arc::new(AtomicBool::new(false));

        // the default test runtime is single threaded, so this task is polled
        // on the same thread whenever the rescoring waits on the database
        let other = tokio::spawn({
            let done = done.clone();
            let seen = seen.clone();

            async move {
                while !done.load(Ordering::Relaxed) {
                    let current = tracing::Span::current();

                    if current
                        .metadata()
                        .is_some_and(|meta| meta.name() == "recalculating")
                    {
                        seen.store(true, Ordering::Relaxed);
                    }

                    tokio::task::yield_now().await;
                }
            }
        });

        for _ in 0..20 {
            on_result_committed(&db, &result).await.unwrap();
        }

        done.store(true, Ordering::Relaxed);
        other.await.unwrap();

        assert!(!seen.load(Ordering::Relaxed));
    }

    #[test]
    fn without_result_everything_is_zero() {
        let predictions = vec![prediction(Uuid::new_v4()), prediction(Uuid::new_v4())];
        let batch = recompute(&predictions, None);

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[&0].len(), 2);
    }
}
