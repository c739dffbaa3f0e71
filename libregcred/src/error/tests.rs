use super::*;
use std::error::Error;

#[test]
fn test_auth_file_not_found_carries_path() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = RegCredError::auth_file_not_found("/tmp/missing.json", io_err);

    assert!(matches!(err, RegCredError::AuthFileNotFound { .. }));
    assert!(err.to_string().contains("/tmp/missing.json"));
    assert!(err.source().is_some());
}

#[test]
fn test_invalid_argument_error() {
    let err = RegCredError::invalid_argument("https://quay.io", "scheme not allowed");

    assert!(matches!(err, RegCredError::InvalidArgument { .. }));
    assert!(err.to_string().contains("https://quay.io"));
    assert!(err.to_string().contains("scheme not allowed"));
}

#[test]
fn test_repository_not_accepted_error() {
    let err = RegCredError::repository_not_accepted("quay.io/user");

    assert!(matches!(err, RegCredError::RepositoryNotAccepted { .. }));
    assert!(err.to_string().contains("quay.io/user"));
}

#[test]
fn test_tag_not_allowed_error() {
    let err = RegCredError::tag_not_allowed("quay.io/user/image:tag");

    assert!(matches!(err, RegCredError::TagNotAllowed { .. }));
    assert!(err.to_string().contains("quay.io/user/image:tag"));
}

#[test]
fn test_invalid_reference_error_with_source() {
    let err = RegCredError::invalid_reference(
        "quay.io/:tag",
        ReferenceError::Malformed {
            reason: "empty path component".to_string(),
        },
    );

    assert!(matches!(err, RegCredError::InvalidReference { .. }));
    assert!(err.to_string().contains("quay.io/:tag"));
    assert!(
        err.source()
            .unwrap()
            .to_string()
            .contains("empty path component")
    );
}

#[test]
fn test_config_with_source_helper_constructor() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err = RegCredError::config_with_source(
        "failed to read config",
        Some("/path/to/config.yaml"),
        io_err,
    );
    assert!(matches!(err, RegCredError::Config { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_argument_accessor() {
    assert_eq!(
        RegCredError::tag_not_allowed("quay.io/a:b").argument(),
        Some("quay.io/a:b")
    );
    assert_eq!(
        RegCredError::repository_not_accepted("quay.io/a").argument(),
        Some("quay.io/a")
    );

    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    assert_eq!(
        RegCredError::auth_file_not_found("/tmp/x", io_err).argument(),
        None
    );
}

#[test]
fn test_error_implements_error_trait() {
    let err = RegCredError::tag_not_allowed("quay.io/a:b");

    // Should implement Error trait
    let _: &dyn std::error::Error = &err;
}
