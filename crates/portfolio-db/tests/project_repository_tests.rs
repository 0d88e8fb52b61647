mod common;

use common::{create_tagged_draft, create_test_draft, create_test_pool};

use portfolio_core::NewProject;
use portfolio_db::{DbError, ProjectRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_draft_when_created_then_can_be_fetched_by_id() {
    // Given: A test database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    // When: Creating a project
    let created = repo.create(create_test_draft("weather-station")).await.unwrap();

    // Then: Fetching by id returns the same project
    let found = repo.get_by_id(&created.id.to_string()).await.unwrap();

    assert_that!(found.id, eq(created.id));
    assert_that!(found.name, eq("weather-station"));
    assert_that!(found.image, eq(&created.image));
    assert_that!(found.duration, eq(4.0));
    assert_that!(found.tags, eq(&created.tags));
}

#[tokio::test]
async fn given_empty_database_when_listing_then_returns_empty_vec() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Listing all projects
    let projects = repo.list_all().await.unwrap();

    // Then: Returns empty vector
    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_multiple_projects_when_listing_then_returns_in_insertion_order() {
    // Given: Three projects created in sequence
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    repo.create(create_test_draft("first")).await.unwrap();
    repo.create(create_test_draft("second")).await.unwrap();
    repo.create(create_test_draft("third")).await.unwrap();

    // When: Listing all projects
    let projects = repo.list_all().await.unwrap();

    // Then: All three come back in insertion order
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_that!(names, eq(&vec!["first", "second", "third"]));
}

#[tokio::test]
async fn given_draft_with_empty_name_when_created_then_validation_error_and_nothing_persisted() {
    // Given: A draft assembled without the constructor checks
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let draft = NewProject {
        image: "https://images.test/1.jpg".to_string(),
        name: String::new(),
        description: "Something".to_string(),
        duration: 1.0,
        tags: vec![],
    };

    // When: Creating the project
    let result = repo.create(draft).await;

    // Then: Validation error and an empty table
    assert!(matches!(result, Err(DbError::Validation { .. })));

    let projects = repo.list_all().await.unwrap();
    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_malformed_id_when_fetching_then_invalid_id_error() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Fetching with an id that is not a UUID
    let result = repo.get_by_id("not-a-uuid").await;

    // Then: InvalidId error
    assert!(matches!(result, Err(DbError::InvalidId { .. })));
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_not_found_error() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    // When: Fetching a well-formed id with no record
    let result = repo.get_by_id(&Uuid::new_v4().to_string()).await;

    // Then: NotFound error
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_existing_project_when_updated_then_only_description_and_tags_change() {
    // Given: A stored project
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let created = repo
        .create(create_tagged_draft("site", &["web"]))
        .await
        .unwrap();

    // When: Updating description and tags
    let updated = repo
        .update_description_and_tags(
            &created.id.to_string(),
            "Rewritten description",
            &["web".to_string(), "design".to_string()],
        )
        .await
        .unwrap();

    // Then: Only those two fields moved
    assert_that!(updated.description, eq("Rewritten description"));
    assert_that!(updated.tags, eq(&vec!["web", "design"]));
    assert_that!(updated.id, eq(created.id));
    assert_that!(updated.name, eq(&created.name));
    assert_that!(updated.image, eq(&created.image));
    assert_that!(updated.duration, eq(created.duration));
    assert_that!(
        updated.created_at.timestamp(),
        eq(created.created_at.timestamp())
    );
}

#[tokio::test]
async fn given_empty_description_when_updating_then_validation_error() {
    // Given: A stored project
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let created = repo.create(create_test_draft("site")).await.unwrap();

    // When: Updating with a blank description
    let result = repo
        .update_description_and_tags(&created.id.to_string(), "  ", &[])
        .await;

    // Then: Validation error, stored description untouched
    assert!(matches!(result, Err(DbError::Validation { .. })));

    let found = repo.get_by_id(&created.id.to_string()).await.unwrap();
    assert_that!(found.description, eq(&created.description));
}

#[tokio::test]
async fn given_malformed_id_when_updating_then_invalid_id_error() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let result = repo
        .update_description_and_tags("12345", "New description", &[])
        .await;

    assert!(matches!(result, Err(DbError::InvalidId { .. })));
}

#[tokio::test]
async fn given_unknown_id_when_updating_then_not_found_error() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let result = repo
        .update_description_and_tags(&Uuid::new_v4().to_string(), "New description", &[])
        .await;

    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_existing_project_when_deleted_then_fetch_is_not_found() {
    // Given: A stored project
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    let created = repo.create(create_test_draft("doomed")).await.unwrap();
    let id = created.id.to_string();

    // When: Deleting it
    repo.delete_by_id(&id).await.unwrap();

    // Then: Subsequent fetch is NotFound and listing is empty
    let result = repo.get_by_id(&id).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));

    let projects = repo.list_all().await.unwrap();
    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_not_found_error() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let result = repo.delete_by_id(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_malformed_id_when_deleting_then_invalid_id_error() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let result = repo.delete_by_id("nope").await;

    assert!(matches!(result, Err(DbError::InvalidId { .. })));
}

#[tokio::test]
async fn given_projects_with_tags_when_filtering_then_returns_exact_matches() {
    // Given: Projects with overlapping tag sets
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let rust_only = repo
        .create(create_tagged_draft("cli-tool", &["rust"]))
        .await
        .unwrap();
    let both = repo
        .create(create_tagged_draft("backend", &["rust", "web"]))
        .await
        .unwrap();
    let untagged = repo.create(create_tagged_draft("sketch", &[])).await.unwrap();

    // When: Filtering by "rust"
    let projects = repo.find_by_tag("rust").await.unwrap();

    // Then: Exactly the two tagged projects, in insertion order
    let ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();
    assert_that!(ids, eq(&vec![rust_only.id, both.id]));
    assert_that!(ids, not(contains(eq(&untagged.id))));
}

#[tokio::test]
async fn given_no_matching_tag_when_filtering_then_returns_empty_vec() {
    // Given: One tagged project
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());
    repo.create(create_tagged_draft("cli-tool", &["rust"]))
        .await
        .unwrap();

    // When: Filtering by a tag nothing carries
    let projects = repo.find_by_tag("haskell").await.unwrap();

    // Then: Empty result
    assert_that!(projects, is_empty());
}
