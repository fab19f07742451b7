//! Bulk import of leagues and their teams.
//!
//! ```text
//! import_leagues teams.json
//! ```
//!
//! The file maps league names to team names:
//! `{"competitions": {"Premier League": ["Arsenal", "Chelsea"]}}`. Existing
//! leagues and teams are matched by name and left untouched, so the import can
//! be run repeatedly.

use anyhow::Context;
use chrono::Utc;
use entity::{league_points, leagues, teams};
use prediction_league::scoring::DEFAULT_POINTS;
use sea_orm::{
    ColumnTrait, ConnectionTrait, Database, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::{collections::BTreeMap, env, fs, process::ExitCode};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct Import {
    competitions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, PartialEq, Eq)]
struct Summary {
    league: String,
    created: bool,
    teams_added: usize,
}

async fn get_or_create_league<C>(conn: &C, name: &str) -> Result<(leagues::Model, bool), DbErr>
where
    C: ConnectionTrait,
{
    if let Some(league) = leagues::Entity::find()
        .filter(leagues::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok((league, false));
    }

    let league = leagues::Model {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        is_active: true,
        num_ranked_positions: DEFAULT_POINTS.len() as i16,
        created_at: Utc::now(),
    };

    leagues::Entity::insert(leagues::ActiveModel::from(league.clone()))
        .exec_without_returning(conn)
        .await?;

    let points = (1..).zip(DEFAULT_POINTS).map(|(position, points)| league_points::ActiveModel {
        league_id: Set(league.id),
        position: Set(position),
        points: Set(points),
    });

    league_points::Entity::insert_many(points)
        .exec_without_returning(conn)
        .await?;

    Ok((league, true))
}

async fn import<C>(conn: &C, data: &Import) -> Result<Vec<Summary>, DbErr>
where
    C: ConnectionTrait,
{
    let mut summaries = Vec::with_capacity(data.competitions.len());

    for (name, team_names) in &data.competitions {
        let (league, created) = get_or_create_league(conn, name).await?;

        let existing = teams::Entity::find_in_league(league.id)
            .all(conn)
            .await?
            .into_iter()
            .map(|team| team.name)
            .collect::<Vec<_>>();

        let mut teams_added = 0;

        for team_name in team_names {
            if existing.contains(team_name) {
                continue;
            }

            teams::Entity::insert(teams::ActiveModel {
                id: Set(Uuid::new_v4()),
                league_id: Set(league.id),
                name: Set(team_name.clone()),
            })
            .exec_without_returning(conn)
            .await?;

            teams_added += 1;
        }

        summaries.push(Summary {
            league: name.clone(),
            created,
            teams_added,
        });
    }

    Ok(summaries)
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let path = env::args().nth(1).unwrap_or_else(|| "teams.json".to_owned());

    let file = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let data: Import = serde_json::from_str(&file).with_context(|| format!("invalid {path}"))?;

    let url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let db = Database::connect(url).await?;

    let txn = db.begin().await?;
    let summaries = import(&txn, &data).await?;
    txn.commit().await?;

    for summary in summaries {
        if summary.created {
            println!("created league: {}", summary.league);
        } else {
            println!("league already exists: {}", summary.league);
        }

        println!("   added {} teams to {}", summary.teams_added, summary.league);
    }

    info!("import finished");

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
