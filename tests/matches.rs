#[macro_use]
mod common;

use actix_web::test::TestRequest;
use serde_json::json;
use sqlx::SqlitePool;

async fn history_rows(db: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM event_histories")
        .fetch_one(db)
        .await
        .unwrap()
}

macro_rules! seed {
    ($app:expr) => {{
        call!(
            $app,
            TestRequest::post().uri("/player").set_json(json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "pw"
            }))
        );
        call!(
            $app,
            TestRequest::post().uri("/player").set_json(json!({
                "username": "bob",
                "email": "bob@example.com",
                "password": "pw"
            }))
        );
        call!(
            $app,
            TestRequest::post().uri("/event").set_json(json!({
                "name": "kill",
                "description": "frag",
                "value": 10
            }))
        );
    }};
}

#[actix_web::test]
async fn create_then_fetch_match() {
    let ctx = common::context().await;
    let app = app!(ctx);
    seed!(app);

    let created = call!(
        app,
        TestRequest::post().uri("/match").set_json(json!({
            "duration": 120,
            "events": [{ "player": "alice", "event": "kill" }]
        }))
    );
    assert_eq!(created, json!({ "status": "CREATED" }));

    let shown = call!(app, TestRequest::get().uri("/match/1"));
    assert_eq!(
        shown,
        json!({
            "data": {
                "matchId": 1,
                "events": [{ "player": "alice", "event": "kill" }]
            }
        })
    );

    let listed = call!(app, TestRequest::get().uri("/match"));
    assert_eq!(listed, json!({ "data": [{ "id": 1, "duration": 120 }] }));
}

#[actix_web::test]
async fn events_keep_submission_order() {
    let ctx = common::context().await;
    let app = app!(ctx);
    seed!(app);

    call!(
        app,
        TestRequest::post().uri("/match").set_json(json!({
            "duration": 90,
            "events": [
                { "player": "bob", "event": "kill" },
                { "player": "alice", "event": "kill" },
                { "player": "bob", "event": "kill" }
            ]
        }))
    );

    let shown = call!(app, TestRequest::get().uri("/match/1"));
    let players: Vec<_> = shown["data"]["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["player"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(players, ["bob", "alice", "bob"]);
}

#[actix_web::test]
async fn unknown_reference_creates_nothing() {
    let ctx = common::context().await;
    let app = app!(ctx);
    seed!(app);

    let unknown_event = call!(
        app,
        TestRequest::post().uri("/match").set_json(json!({
            "duration": 120,
            "events": [
                { "player": "alice", "event": "kill" },
                { "player": "alice", "event": "teleport" }
            ]
        }))
    );
    assert_eq!(unknown_event, json!({ "status": "INVALID_REFERENCE" }));

    let unknown_player = call!(
        app,
        TestRequest::post().uri("/match").set_json(json!({
            "duration": 120,
            "events": [{ "player": "mallory", "event": "kill" }]
        }))
    );
    assert_eq!(unknown_player, json!({ "status": "INVALID_REFERENCE" }));

    let listed = call!(app, TestRequest::get().uri("/match"));
    assert_eq!(listed, json!({ "data": [] }));
    assert_eq!(history_rows(&ctx.db).await, 0);
}

#[actix_web::test]
async fn match_without_events_is_allowed() {
    let ctx = common::context().await;
    let app = app!(ctx);

    let created = call!(
        app,
        TestRequest::post()
            .uri("/match")
            .set_json(json!({ "duration": 5 }))
    );
    assert_eq!(created, json!({ "status": "CREATED" }));

    let shown = call!(app, TestRequest::get().uri("/match/1"));
    assert_eq!(shown, json!({ "data": { "matchId": 1, "events": [] } }));
}

#[actix_web::test]
async fn missing_duration_is_invalid_data() {
    let ctx = common::context().await;
    let app = app!(ctx);

    let resp = call!(
        app,
        TestRequest::post()
            .uri("/match")
            .set_json(json!({ "events": [] }))
    );
    assert_eq!(resp, json!({ "status": "INVALID_DATA" }));
}

#[actix_web::test]
async fn unknown_or_malformed_match_id_is_not_found() {
    let ctx = common::context().await;
    let app = app!(ctx);

    let missing = call!(app, TestRequest::get().uri("/match/42"));
    assert_eq!(missing, json!({ "status": "NOT_FOUND" }));

    let malformed = call!(app, TestRequest::get().uri("/match/abc"));
    assert_eq!(malformed, json!({ "status": "NOT_FOUND" }));
}

#[actix_web::test]
async fn delete_removes_history_and_uses_legacy_key() {
    let ctx = common::context().await;
    let app = app!(ctx);
    seed!(app);

    call!(
        app,
        TestRequest::post().uri("/match").set_json(json!({
            "duration": 120,
            "events": [
                { "player": "alice", "event": "kill" },
                { "player": "bob", "event": "kill" }
            ]
        }))
    );
    assert_eq!(history_rows(&ctx.db).await, 2);

    let deleted = call!(app, TestRequest::delete().uri("/match/1"));
    assert_eq!(deleted, json!({ "staus": "DELETED" }));
    assert_eq!(history_rows(&ctx.db).await, 0);

    let shown = call!(app, TestRequest::get().uri("/match/1"));
    assert_eq!(shown, json!({ "status": "NOT_FOUND" }));

    let timeline = call!(app, TestRequest::get().uri("/player/alice"));
    assert_eq!(timeline["data"]["events"], json!([]));
}

#[actix_web::test]
async fn numeric_string_duration_is_accepted() {
    let ctx = common::context().await;
    let app = app!(ctx);

    let created = call!(
        app,
        TestRequest::post()
            .uri("/match")
            .set_json(json!({ "duration": "120", "events": [] }))
    );
    assert_eq!(created, json!({ "status": "CREATED" }));

    let listed = call!(app, TestRequest::get().uri("/match"));
    assert_eq!(listed, json!({ "data": [{ "id": 1, "duration": 120 }] }));
}
