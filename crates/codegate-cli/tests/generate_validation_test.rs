mod common;
use common::TestFixture;
use predicates::prelude::*;

// These run against a backend nobody listens on: every rejection below must
// come from client-side validation, before any network call.

#[test]
fn test_zero_accounts_rejected_before_network() {
    let fixture = TestFixture::new();
    fixture.write_config("http://127.0.0.1:1");

    fixture
        .command()
        .args(["code", "generate", "--max-accounts", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 100"));
}

#[test]
fn test_over_hundred_accounts_rejected_before_network() {
    let fixture = TestFixture::new();
    fixture.write_config("http://127.0.0.1:1");

    fixture
        .command()
        .args(["code", "generate", "--max-accounts", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 100"));
}

#[test]
fn test_unoffered_duration_rejected_before_network() {
    let fixture = TestFixture::new();
    fixture.write_config("http://127.0.0.1:1");

    fixture
        .command()
        .args(["code", "generate", "--duration", "7", "--max-accounts", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}
