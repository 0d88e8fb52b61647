use crate::{CoreError, NewProject, Project, parse_project_id};

use uuid::Uuid;

fn draft() -> NewProject {
    NewProject::new(
        "https://images.test/42.jpg".to_string(),
        "Weather station".to_string(),
        "An ESP32 weather station".to_string(),
        6.0,
        vec!["embedded".to_string(), "rust".to_string()],
    )
    .unwrap()
}

#[test]
fn test_project_from_draft() {
    let project = Project::from_draft(draft());

    assert_eq!(project.name, "Weather station");
    assert_eq!(project.description, "An ESP32 weather station");
    assert_eq!(project.image, "https://images.test/42.jpg");
    assert_eq!(project.duration, 6.0);
    assert_eq!(project.tags, vec!["embedded", "rust"]);
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_ids_are_unique() {
    let a = Project::from_draft(draft());
    let b = Project::from_draft(draft());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_project_has_tag() {
    let project = Project::from_draft(draft());

    assert!(project.has_tag("rust"));
    assert!(!project.has_tag("web"));
}

#[test]
fn test_parse_project_id_accepts_uuid() {
    let id = Uuid::new_v4();
    let parsed = parse_project_id(&id.to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_parse_project_id_rejects_malformed() {
    let result = parse_project_id("not-a-uuid");

    assert!(matches!(result, Err(CoreError::InvalidId { .. })));
}
