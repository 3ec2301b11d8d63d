mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::{overall_stats_handler, stats_handler};
use sqlx::PgPool;

fn test_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/api/info/{code}", get(stats_handler))
        .route("/api/stats", get(overall_stats_handler))
        .with_state(common::create_test_state(pool));

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_stats_for_existing_code(pool: PgPool) {
    common::create_test_mapping(&pool, "AbCdE2", "https://example.com").await;
    let server = test_server(pool);

    let response = server.get("/api/info/AbCdE2").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "URL statistics retrieved successfully");

    let data = &body["data"];
    assert_eq!(data["originalUrl"], "https://example.com");
    assert_eq!(data["shortCode"], "AbCdE2");
    assert_eq!(data["clickCount"], 0);
    assert!(data["createdAt"].is_string());
    assert!(data["updatedAt"].is_string());
}

#[sqlx::test]
async fn test_stats_does_not_count_clicks(pool: PgPool) {
    common::create_test_mapping(&pool, "AbCdE2", "https://example.com").await;
    let server = test_server(pool.clone());

    server.get("/api/info/AbCdE2").await.assert_status_ok();
    server.get("/api/info/AbCdE2").await.assert_status_ok();

    assert_eq!(common::get_click_count(&pool, "AbCdE2").await, 0);
}

#[sqlx::test]
async fn test_stats_unknown_code_is_not_found(pool: PgPool) {
    let server = test_server(pool);

    let response = server.get("/api/info/zzzz99").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Short URL not found");
}

#[sqlx::test]
async fn test_stats_rejects_malformed_code(pool: PgPool) {
    let server = test_server(pool);

    server.get("/api/info/ab").await.assert_status_bad_request();
}

#[sqlx::test]
async fn test_overall_stats_empty(pool: PgPool) {
    let server = test_server(pool);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalUrls"], 0);
    assert_eq!(body["data"]["recentUrls"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_overall_stats_orders_newest_first(pool: PgPool) {
    common::create_aged_mapping(&pool, "oldest", "https://example.com/1", 300.0).await;
    common::create_aged_mapping(&pool, "middle", "https://example.com/2", 200.0).await;
    common::create_aged_mapping(&pool, "newest", "https://example.com/3", 100.0).await;
    let server = test_server(pool);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"]["totalUrls"], 3);

    let recent = body["data"]["recentUrls"].as_array().unwrap();
    assert_eq!(recent[0]["shortCode"], "newest");
    assert_eq!(recent[1]["shortCode"], "middle");
    assert_eq!(recent[2]["shortCode"], "oldest");
}

#[sqlx::test]
async fn test_overall_stats_caps_recent_at_ten(pool: PgPool) {
    for i in 0..12 {
        common::create_aged_mapping(
            &pool,
            &format!("code{i:02}"),
            &format!("https://example.com/{i}"),
            (12 - i) as f64,
        )
        .await;
    }
    let server = test_server(pool);

    let response = server.get("/api/stats").await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"]["totalUrls"], 12);
    assert_eq!(body["data"]["recentUrls"].as_array().unwrap().len(), 10);
}
