use super::*;
use tempfile::NamedTempFile;

fn docker_env(dir: &str) -> AuthEnv {
    AuthEnv {
        registry_auth_file: None,
        docker_config: Some(dir.to_string()),
    }
}

#[test]
fn test_resolve_from_environment() {
    let report = resolve_auth_file(None, &docker_env("/tmp"), false).unwrap();
    assert_eq!(report.path, "/tmp/config.json");
    assert_eq!(report.source, "DOCKER_CONFIG");
    assert!(!report.checked);
}

#[test]
fn test_explicit_path_overrides_environment() {
    let report = resolve_auth_file(Some("/etc/auth.json"), &docker_env("/tmp"), false).unwrap();
    assert_eq!(report.path, "/etc/auth.json");
    assert_eq!(report.source, "--authfile");
}

#[test]
fn test_check_passes_for_existing_file() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let report = resolve_auth_file(Some(path), &AuthEnv::default(), true).unwrap();
    assert!(report.checked);
}

#[test]
fn test_check_passes_when_nothing_configured() {
    let report = resolve_auth_file(None, &AuthEnv::default(), true).unwrap();
    assert_eq!(report.path, "");
    assert_eq!(report.source, "unset");
}

#[test]
fn test_check_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let env = docker_env(dir.path().to_str().unwrap());

    let result = resolve_auth_file(None, &env, true);
    assert!(matches!(result, Err(RegCredError::AuthFileNotFound { .. })));
}

#[test]
fn test_report_pretty_output() {
    let report = AuthFileReport {
        path: String::new(),
        source: "unset".to_string(),
        checked: false,
    };
    assert_eq!(report.format_pretty(), "Auth file: (none)\nSource: unset");
}
