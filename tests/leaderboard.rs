mod utils;

use utils::prelude::*;

#[tokio::test]
async fn requires_claims() {
    let app = App::new().await;

    let res = app.get("/v1/leaderboard").send().await;

    assert_error!(res, error::COULD_NOT_GET_CLAIMS);
}

#[tokio::test]
async fn global_ranking_by_total() {
    let app = App::new().await;
    let league = app.create_league(6).await;
    let a = app.register_user().await;
    let b = app.register_user().await;

    app.predict(&a, league.id, league.teams[0]).await;
    app.predict(&b, league.id, league.teams[1]).await;

    let slots = league.teams.iter().copied().map(Some).collect::<Vec<_>>();
    app.put_result(league.id, &slots).await;

    let res = app.get("/v1/leaderboard").user(&a).send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let leaderboard: Value = res.json().await;

    assert_json_include!(
        actual: leaderboard,
        expected: json!([
            {"user_id": a.id, "total_points": 20, "rank": 1},
            {"user_id": b.id, "total_points": 15, "rank": 2},
        ])
    );
}

#[tokio::test]
async fn user_without_predictions_is_listed_with_zero() {
    let app = App::new().await;
    let user = app.register_user().await;

    let leaderboard: Value = app.get("/v1/leaderboard").user(&user).send().await.json().await;

    assert_json_include!(
        actual: leaderboard,
        expected: json!([{"user_id": user.id, "total_points": 0, "rank": 1}])
    );
}

#[tokio::test]
async fn totals_add_up_across_leagues() {
    let app = App::new().await;
    let first = app.create_league(6).await;
    let second = app.create_league(6).await;
    let user = app.register_user().await;
    let idle = app.register_user().await;

    app.predict(&user, first.id, first.teams[0]).await;
    app.predict(&user, second.id, second.teams[2]).await;

    for league in [&first, &second] {
        let slots = league.teams.iter().copied().map(Some).collect::<Vec<_>>();
        app.put_result(league.id, &slots).await;
    }

    let leaderboard: Value = app.get("/v1/leaderboard").user(&user).send().await.json().await;

    assert_eq!(leaderboard.as_array().unwrap().len(), 2);
    assert_json_include!(
        actual: leaderboard,
        expected: json!([
            {"user_id": user.id, "total_points": 30, "rank": 1},
            {"user_id": idle.id, "total_points": 0, "rank": 2},
        ])
    );
}

#[tokio::test]
async fn league_ranking() {
    let app = App::new().await;
    let league = app.create_league(6).await;
    let users = [
        app.register_user().await,
        app.register_user().await,
        app.register_user().await,
    ];

    app.predict(&users[0], league.id, league.teams[4]).await;
    app.predict(&users[1], league.id, league.teams[0]).await;
    app.predict(&users[2], league.id, league.teams[2]).await;

    let slots = league.teams.iter().copied().map(Some).collect::<Vec<_>>();
    app.put_result(league.id, &slots).await;

    let res = app
        .get(&format!("/v1/leaderboard/{}", league.id))
        .user(&users[0])
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let leaderboard: Value = res.json().await;

    assert_json_include!(
        actual: leaderboard,
        expected: json!([
            {"user_id": users[1].id, "points": 20, "predicted_team": league.teams[0], "rank": 1},
            {"user_id": users[2].id, "points": 10, "predicted_team": league.teams[2], "rank": 2},
            {"user_id": users[0].id, "points": 5, "predicted_team": league.teams[4], "rank": 3},
        ])
    );
}

#[tokio::test]
async fn league_ranking_of_unknown_league() {
    let app = App::new().await;
    let user = app.register_user().await;

    let res = app
        .get(&format!("/v1/leaderboard/{}", Uuid::new_v4()))
        .user(&user)
        .send()
        .await;

    assert_error!(res, error::LEAGUE_NOT_FOUND);
}
