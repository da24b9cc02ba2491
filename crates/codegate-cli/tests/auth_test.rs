mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_status_without_token_reports_unauthenticated() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_status_with_persisted_token_reports_authenticated() {
    let fixture = TestFixture::new();
    fixture.write_token("tok-123");

    fixture
        .command()
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated"));
}

#[test]
fn test_status_json_is_the_view_model() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["auth", "status", "--format", "json"])
        .output()
        .expect("Failed to run auth status");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["authenticated"], serde_json::Value::Bool(false));
}

#[test]
fn test_logout_removes_the_persisted_token() {
    let fixture = TestFixture::new();
    fixture.write_token("tok-123");

    fixture.command().args(["auth", "logout"]).assert().success();
    assert!(!fixture.token_exists());

    // Logging out twice is not an error.
    fixture.command().args(["auth", "logout"]).assert().success();
}

#[test]
fn test_login_without_password_is_rejected_locally() {
    let fixture = TestFixture::new();
    fixture.write_config("http://127.0.0.1:1");

    fixture
        .command()
        .args(["auth", "login", "--username", "admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CODEGATE_PASSWORD"));

    assert!(!fixture.token_exists());
}

#[test]
fn test_failed_login_leaves_no_token_behind() {
    let fixture = TestFixture::new();
    // Nothing listens here; the login must fail and store nothing.
    fixture.write_config("http://127.0.0.1:1");

    fixture
        .command()
        .args(["auth", "login", "--username", "admin", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("login failed"));

    assert!(!fixture.token_exists());
}
