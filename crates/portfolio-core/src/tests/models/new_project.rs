use crate::models::new_project::normalize_tags;
use crate::{CoreError, NewProject};

fn new_draft(name: &str, description: &str, duration: f64) -> crate::Result<NewProject> {
    NewProject::new(
        "https://images.test/1.jpg".to_string(),
        name.to_string(),
        description.to_string(),
        duration,
        vec![],
    )
}

#[test]
fn test_new_project_valid() {
    let draft = new_draft("Site", "A portfolio site", 2.5).unwrap();

    assert_eq!(draft.name, "Site");
    assert_eq!(draft.duration, 2.5);
    assert!(draft.tags.is_empty());
}

#[test]
fn test_new_project_rejects_empty_name() {
    let result = new_draft("  ", "A portfolio site", 2.5);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_new_project_rejects_empty_description() {
    let result = new_draft("Site", "", 2.5);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_new_project_rejects_negative_duration() {
    let result = new_draft("Site", "A portfolio site", -1.0);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_new_project_rejects_non_finite_duration() {
    let result = new_draft("Site", "A portfolio site", f64::NAN);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_new_project_rejects_empty_image() {
    let result = NewProject::new(
        String::new(),
        "Site".to_string(),
        "A portfolio site".to_string(),
        1.0,
        vec![],
    );

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_normalize_tags_drops_blank_entries() {
    let tags = normalize_tags(vec![
        "rust".to_string(),
        "  ".to_string(),
        String::new(),
        " web ".to_string(),
    ]);

    assert_eq!(tags, vec!["rust", "web"]);
}
