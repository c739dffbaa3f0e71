use libregcred::{
    AuthEnv, ImageReference, ParsedRegistryKey, RegCredError, parse_registry_argument,
    resolve_default_auth_file, validate_auth_file,
};
use tempfile::NamedTempFile;

#[test]
fn test_auth_file_precedence_through_public_api() {
    let both = AuthEnv {
        registry_auth_file: Some("/tmp/registry.file".to_string()),
        docker_config: Some("/tmp".to_string()),
    };
    assert_eq!(resolve_default_auth_file(&both), "/tmp/registry.file");

    let docker_only = AuthEnv {
        registry_auth_file: None,
        docker_config: Some("/tmp".to_string()),
    };
    assert_eq!(resolve_default_auth_file(&docker_only), "/tmp/config.json");

    assert_eq!(resolve_default_auth_file(&AuthEnv::default()), "");
}

#[test]
fn test_resolved_path_can_be_validated() {
    let file = NamedTempFile::new().unwrap();
    let env = AuthEnv {
        registry_auth_file: Some(file.path().to_str().unwrap().to_string()),
        docker_config: None,
    };

    let path = resolve_default_auth_file(&env);
    assert!(validate_auth_file(&path).is_ok());
    assert!(matches!(
        validate_auth_file(&format!("{}missing", path)),
        Err(RegCredError::AuthFileNotFound { .. })
    ));
}

#[test]
fn test_registry_arguments_through_public_api() {
    let cases: Vec<(&str, bool, Option<&str>)> = vec![
        ("quay.io/user", true, Some("quay.io/user")),
        ("quay.io", true, Some("quay.io")),
        ("docker.io/library/user", true, Some("docker.io/library/user")),
        ("https://quay.io", true, None),
        ("quay.io/username/image:tag", true, None),
        ("quay.io/:tag", true, None),
        ("https://quay.io/user", false, Some("quay.io")),
    ];

    for (arg, accept_repositories, expected_key) in cases {
        let result = parse_registry_argument(arg, accept_repositories);
        match expected_key {
            Some(key) => {
                let parsed: ParsedRegistryKey = result.unwrap();
                assert_eq!(parsed.key, key, "{}", arg);
            }
            None => assert!(result.is_err(), "{}", arg),
        }
    }
}

#[test]
fn test_reference_round_trips_through_key() {
    let parsed = parse_registry_argument("quay.io/user/app", true).unwrap();
    let reference: ImageReference = parsed.key.parse().unwrap();
    assert_eq!(Some(reference), parsed.reference);
}
