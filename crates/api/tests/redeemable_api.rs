//! HTTP-level integration tests for the redeemable catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn seed_competition(pool: &PgPool, code: &str) {
    let app = common::build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/competition",
        serde_json::json!({"code": code, "name": format!("Competition {code}")}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

async fn create_redeemable(pool: &PgPool, code: &str, name: &str, quantity: i32) -> StatusCode {
    let app = common::build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/redeemable",
        serde_json::json!({"competition_code": code, "name": name, "quantity": quantity}),
    )
    .await;
    resp.status()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_redeemable_returns_201(pool: PgPool) {
    seed_competition(&pool, "x").await;

    let app = common::build_test_app(pool);
    let resp = post_json(
        app,
        "/api/v1/redeemable",
        serde_json::json!({
            "competition_code": "x",
            "name": "tshirt",
            "quantity": 5,
            "description": "Event shirt"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["name"], "tshirt");
    assert_eq!(json["data"]["quantity"], 5);
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_create_returns_409_and_keeps_first(pool: PgPool) {
    seed_competition(&pool, "x").await;
    assert_eq!(create_redeemable(&pool, "x", "tshirt", 5).await, StatusCode::CREATED);
    assert_eq!(create_redeemable(&pool, "x", "tshirt", 99).await, StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let resp = get(app, "/api/v1/redeemable/x/tshirt").await;
    let json = body_json(resp).await;
    assert_eq!(json["data"]["quantity"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_competition_returns_404(pool: PgPool) {
    assert_eq!(
        create_redeemable(&pool, "nope", "tshirt", 5).await,
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_empty_name_returns_400(pool: PgPool) {
    seed_competition(&pool, "x").await;
    assert_eq!(create_redeemable(&pool, "x", "", 5).await, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_negative_quantity_returns_400(pool: PgPool) {
    seed_competition(&pool, "x").await;
    assert_eq!(create_redeemable(&pool, "x", "tshirt", -1).await, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_oversized_description_returns_400(pool: PgPool) {
    seed_competition(&pool, "x").await;
    let app = common::build_test_app(pool);
    let resp = post_json(
        app,
        "/api/v1/redeemable",
        serde_json::json!({
            "competition_code": "x",
            "name": "tshirt",
            "quantity": 5,
            "description": "x".repeat(501)
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_redeemable_returns_404(pool: PgPool) {
    seed_competition(&pool, "x").await;
    let app = common::build_test_app(pool);
    let resp = get(app, "/api/v1/redeemable/x/ghost").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_returns_204_and_patches(pool: PgPool) {
    seed_competition(&pool, "x").await;
    create_redeemable(&pool, "x", "tshirt", 5).await;

    let app = common::build_test_app(pool.clone());
    let resp = put_json(
        app,
        "/api/v1/redeemable/x/tshirt",
        serde_json::json!({"quantity": 9}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/redeemable/x/tshirt").await).await;
    assert_eq!(json["data"]["quantity"], 9);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_returns_404(pool: PgPool) {
    seed_competition(&pool, "x").await;
    let app = common::build_test_app(pool);
    let resp = put_json(
        app,
        "/api/v1/redeemable/x/ghost",
        serde_json::json!({"quantity": 9}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_negative_quantity_returns_400(pool: PgPool) {
    seed_competition(&pool, "x").await;
    create_redeemable(&pool, "x", "tshirt", 5).await;

    let app = common::build_test_app(pool);
    let resp = put_json(
        app,
        "/api/v1/redeemable/x/tshirt",
        serde_json::json!({"quantity": -2}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_returns_204_then_404(pool: PgPool) {
    seed_competition(&pool, "x").await;
    create_redeemable(&pool, "x", "tshirt", 5).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, "/api/v1/redeemable/x/tshirt").await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, "/api/v1/redeemable/x/tshirt").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_with_ledger_history_returns_409(pool: PgPool) {
    common::seed_ledger_fixtures(&pool, 5).await;

    let app = common::build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/redeemable/redeem",
        serde_json::json!({
            "competition_code": "x",
            "user_id": "u1",
            "redeemable_name": "tshirt",
            "quantity": -1
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let resp = delete(app, "/api/v1/redeemable/x/tshirt").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Still present.
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, "/api/v1/redeemable/x/tshirt").await.status(),
        StatusCode::OK
    );
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_defaults_to_descending_name_order(pool: PgPool) {
    seed_competition(&pool, "x").await;
    for name in ["apple", "banana", "cherry"] {
        create_redeemable(&pool, "x", name, 1).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/redeemable").await).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["cherry", "banana", "apple"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_with_invalid_sort_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let resp = get(app, "/api/v1/redeemable?sort=sideways").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_cursor_advances_past_last_seen_row(pool: PgPool) {
    seed_competition(&pool, "x").await;
    for name in ["a", "b", "c", "d"] {
        create_redeemable(&pool, "x", name, 1).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/redeemable?sort=asc&limit=2").await).await;
    let first_page: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(first_page, ["a", "b"]);

    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            "/api/v1/redeemable?sort=asc&limit=2&cursor_code=x&cursor_name=b",
        )
        .await,
    )
    .await;
    let second_page: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(second_page, ["c", "d"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_cursor_behaves_as_no_cursor(pool: PgPool) {
    seed_competition(&pool, "x").await;
    for name in ["a", "b"] {
        create_redeemable(&pool, "x", name, 1).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/redeemable?sort=asc&cursor_name=a").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
