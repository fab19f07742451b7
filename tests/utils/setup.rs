use super::{
    request::RequestBuilder,
    response::TestResponse,
    user::{User, JWT_SECRET},
};
use http::StatusCode;
use migration::MigratorTrait;
use prediction_league::{
    config::{Config, JwtConfig, JwtKey, PredictionMutability},
    State,
};
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::net::TcpListener;
use uuid::Uuid;

static NAME_COUNT: AtomicU64 = AtomicU64::new(0);

fn unique(prefix: &str) -> String {
    format!("{prefix} {}", NAME_COUNT.fetch_add(1, Ordering::Relaxed))
}

async fn setup_database() -> DbConn {
    // every connection to `:memory:` is a separate database, keep exactly one
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn, prediction_mutability: PredictionMutability) -> SocketAddr {
    let config = Config {
        database_url: "sqlite::memory:".to_owned(),
        port: 0,
        jwt: JwtConfig {
            key: JwtKey::Secret(JWT_SECRET.to_owned()),
            audience: None,
        },
        prediction_mutability,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db, &config).unwrap();

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        prediction_league::run(listener, state).await.unwrap();
    });

    addr
}

/// A league created through the API together with its teams, in creation
/// order.
#[derive(Debug, Clone)]
pub struct League {
    pub id: Uuid,
    pub teams: Vec<Uuid>,
}

#[derive(Clone)]
pub struct App {
    addr: SocketAddr,
    client: Client,
    admin: User,
}

#[allow(unused)]
impl App {
    pub async fn new() -> Self {
        Self::with_mutability(PredictionMutability::AlwaysEditable).await
    }

    pub async fn with_mutability(prediction_mutability: PredictionMutability) -> Self {
        let db = setup_database().await;
        let addr = setup_backend(db, prediction_mutability).await;

        App {
            addr,
            client: Client::new(),
            admin: User::admin(),
        }
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    pub fn admin(&self) -> &User {
        &self.admin
    }

    pub async fn register_user(&self) -> User {
        let user = User::anonymous();

        let res = self
            .post("/v1/register")
            .user(&user)
            .json(&json!({
                "display_name": unique("Player"),
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        user
    }

    /// Creates an active league with the default point table and `teams`
    /// teams.
    pub async fn create_league(&self, teams: usize) -> League {
        self.create_league_with(json!({ "name": unique("League") }), teams)
            .await
    }

    pub async fn create_league_with(&self, body: Value, teams: usize) -> League {
        let res = self
            .post("/v1/leagues")
            .user(&self.admin)
            .json(&body)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        let id = parse_id(&body);

        let mut ids = Vec::with_capacity(teams);

        for _ in 0..teams {
            ids.push(self.create_team(id).await);
        }

        League { id, teams: ids }
    }

    pub async fn create_team(&self, league: Uuid) -> Uuid {
        let res = self
            .post(&format!("/v1/leagues/{league}/teams"))
            .user(&self.admin)
            .json(&json!({
                "name": unique("Team"),
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        parse_id(&res.json::<Value>().await)
    }

    pub async fn put_result(&self, league: Uuid, positions: &[Option<Uuid>]) -> TestResponse {
        self.put(&format!("/v1/leagues/{league}/result"))
            .user(&self.admin)
            .json(&json!({
                "positions": positions,
            }))
            .send()
            .await
    }

    pub async fn predict(&self, user: &User, league: Uuid, team: Uuid) -> TestResponse {
        self.post("/v1/predictions")
            .user(user)
            .json(&json!({
                "league": league,
                "predicted_team": team,
            }))
            .send()
            .await
    }

    /// The points of `user`'s prediction in `league`, read back through the
    /// API.
    pub async fn points_of(&self, user: &User, league: Uuid) -> i64 {
        let res = self.get("/v1/predictions").user(user).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let predictions: Value = res.json().await;

        predictions
            .as_array()
            .expect("not an array")
            .iter()
            .find(|prediction| prediction["league"] == json!(league))
            .expect("no prediction in league")["points"]
            .as_i64()
            .expect("points is not a number")
    }
}

fn parse_id(body: &Value) -> Uuid {
    body["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("no id in response")
}
