use portfolio_core::NewProject;

/// Creates a valid draft with sensible defaults
pub fn create_test_draft(name: &str) -> NewProject {
    NewProject::new(
        format!("https://images.test/{}.jpg", name),
        name.to_string(),
        format!("Description of {}", name),
        4.0,
        vec!["rust".to_string()],
    )
    .expect("Test draft should be valid")
}

/// Creates a valid draft with the given tags
pub fn create_tagged_draft(name: &str, tags: &[&str]) -> NewProject {
    NewProject::new(
        format!("https://images.test/{}.jpg", name),
        name.to_string(),
        format!("Description of {}", name),
        4.0,
        tags.iter().map(|t| t.to_string()).collect(),
    )
    .expect("Test draft should be valid")
}
