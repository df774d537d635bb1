use serde_json::Value;

pub fn assert_resource_response(
    resource: &Value,
    expected_name: &str,
    expected_description: Option<&str>,
) {
    assert!(resource.get("id").and_then(|v| v.as_str()).is_some());
    assert_eq!(
        resource.get("name").and_then(|v| v.as_str()),
        Some(expected_name)
    );

    match expected_description {
        Some(description) => assert_eq!(
            resource.get("description").and_then(|v| v.as_str()),
            Some(description)
        ),
        None => assert!(
            resource.get("description").is_none(),
            "Description should be omitted when not set"
        ),
    }

    assert!(resource.get("created_at").is_some());
    assert!(resource.get("updated_at").is_some());
}
