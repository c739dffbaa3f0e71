use super::*;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_parse_arguments_reports_each_argument() {
    let outcomes = parse_arguments(&args(&["quay.io/user", "quay.io/user:tag", "quay.io"]), true);
    assert_eq!(outcomes.len(), 3);

    assert_eq!(outcomes[0].key.as_deref(), Some("quay.io/user"));
    assert_eq!(outcomes[0].repository.as_deref(), Some("quay.io/user"));

    assert!(!outcomes[1].is_ok());
    assert!(outcomes[1].key.is_none());

    assert_eq!(outcomes[2].key.as_deref(), Some("quay.io"));
    assert!(outcomes[2].repository.is_none());
}

#[test]
fn test_parse_arguments_registry_only() {
    let outcomes = parse_arguments(&args(&["https://quay.io/user", "quay.io/user"]), false);

    assert_eq!(outcomes[0].key.as_deref(), Some("quay.io"));
    assert!(outcomes[1].error.as_deref().unwrap().contains("quay.io/user"));
}

#[test]
fn test_outcome_pretty_success() {
    let outcomes = parse_arguments(&args(&["quay.io/user"]), true);
    assert_eq!(
        outcomes[0].format_pretty(),
        "quay.io/user\n  Key: quay.io/user\n  Registry: quay.io\n  Repository: quay.io/user"
    );
}

#[test]
fn test_outcome_pretty_failure() {
    let outcomes = parse_arguments(&args(&["https://quay.io"]), true);
    let output = outcomes[0].format_pretty();
    assert!(output.starts_with("https://quay.io\n  Error: "));
}

#[test]
fn test_outcome_json_omits_missing_fields() {
    let outcomes = parse_arguments(&args(&["quay.io"]), true);
    let json = serde_json::to_value(&outcomes[0]).unwrap();
    assert_eq!(json["key"], "quay.io");
    assert!(json.get("repository").is_none());
    assert!(json.get("error").is_none());
}
