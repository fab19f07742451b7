use crate::{
    config::{Config, PredictionMutability},
    jwt::Jwt,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Jwt;
    fn prediction_mutability(&self) -> PredictionMutability;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
    prediction_mutability: PredictionMutability,
}

impl State {
    pub async fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config.database_url).await?;

        Self::with_database(database, config)
    }

    pub fn with_database(conn: DbConn, config: &Config) -> anyhow::Result<Arc<Self>> {
        let jwt = Jwt::new(&config.jwt).inspect_err(|error| error!("invalid jwt key: {error}"))?;

        Ok(Arc::new(Self {
            database: conn,
            jwt,
            prediction_mutability: config.prediction_mutability,
        }))
    }

    async fn connect_database(url: &str) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|error| error!("failed to connect to database: {error}"))?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    fn prediction_mutability(&self) -> PredictionMutability {
        self.prediction_mutability
    }
}
