mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_bare_invocation_points_at_init() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("codegate init --server-url"));
}

#[test]
fn test_configured_but_logged_out_points_at_login() {
    let fixture = TestFixture::new();
    fixture.write_config("http://codes.internal:8080");

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("codegate auth login"));
}

#[test]
fn test_fully_set_up_shows_quick_commands() {
    let fixture = TestFixture::new();
    fixture.write_config("http://codes.internal:8080");
    fixture.write_token("tok-123");

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("codegate code list"));
}

#[test]
fn test_code_commands_require_configuration() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["code", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("codegate init"));
}
