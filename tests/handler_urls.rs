mod common;

use axum::{Router, routing::delete};
use axum_test::TestServer;
use snaplink::api::handlers::delete_url_handler;
use sqlx::PgPool;

fn test_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/api/urls/{code}", delete(delete_url_handler))
        .with_state(common::create_test_state(pool));

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_delete_existing_mapping(pool: PgPool) {
    common::create_test_mapping(&pool, "AbCdE2", "https://example.com").await;
    let server = test_server(pool.clone());

    let response = server.delete("/api/urls/AbCdE2").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "URL deleted successfully");
    assert_eq!(body["deletedUrl"]["shortCode"], "AbCdE2");
    assert_eq!(body["deletedUrl"]["originalUrl"], "https://example.com");

    assert!(!common::mapping_exists(&pool, "AbCdE2").await);
}

#[sqlx::test]
async fn test_delete_twice_is_not_found(pool: PgPool) {
    common::create_test_mapping(&pool, "AbCdE2", "https://example.com").await;
    let server = test_server(pool);

    server.delete("/api/urls/AbCdE2").await.assert_status_ok();
    server
        .delete("/api/urls/AbCdE2")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_unknown_code_is_not_found(pool: PgPool) {
    let server = test_server(pool);

    let response = server.delete("/api/urls/zzzz99").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
}

#[sqlx::test]
async fn test_delete_rejects_malformed_code(pool: PgPool) {
    let server = test_server(pool);

    server
        .delete("/api/urls/ab")
        .await
        .assert_status_bad_request();
}
