#![allow(dead_code)]

//! Test infrastructure for portfolio-server page tests

use portfolio_server::AppState;
use portfolio_server::image::ImageClient;

use sqlx::SqlitePool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/portfolio-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, with the image client pointed at a mock server
pub async fn create_test_state(image_base_url: &str) -> AppState {
    AppState {
        pool: create_test_pool().await,
        images: ImageClient::new(image_base_url, 1, 10),
    }
}

/// Insert a project row directly
pub async fn insert_test_project(pool: &SqlitePool, name: &str, tags: &[&str]) -> uuid::Uuid {
    let project_id = uuid::Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();
    let tags_json = serde_json::to_string(tags).expect("Failed to encode tags");

    sqlx::query(
        r#"
            INSERT INTO projects (
                id, image, name, description, duration, tags, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(project_id.to_string())
    .bind("https://images.test/seed.jpg")
    .bind(name)
    .bind(format!("Description of {}", name))
    .bind(3.0)
    .bind(tags_json)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert test project");

    project_id
}

/// Count persisted projects
pub async fn count_projects(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await
        .expect("Failed to count projects")
}

/// Mount a successful image listing on the mock server
pub async fn mount_image_listing(server: &MockServer, download_urls: &[&str]) {
    let entries: Vec<serde_json::Value> = download_urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            serde_json::json!({
                "id": i.to_string(),
                "author": "Test Author",
                "width": 800,
                "height": 600,
                "url": url,
                "download_url": url,
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/v2/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .mount(server)
        .await;
}
