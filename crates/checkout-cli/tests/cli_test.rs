use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn demo() -> Command {
    let mut cmd = Command::new(cargo_bin!("checkout-demo"));
    cmd.env_remove("CHECKOUT_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_builtin_demo() -> Result<(), Box<dyn std::error::Error>> {
    demo()
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: 3900.5"))
        .stdout(predicate::str::contains("Processing debit card payment type..."))
        .stdout(predicate::str::contains("Verifying security code abcd12345"))
        .stdout(predicate::str::contains("Processing PayPal payment type..."))
        .stdout(predicate::str::contains(
            "Verifying email address example@example.com",
        ))
        .stdout(predicate::str::contains("Payment completed.").count(2));

    Ok(())
}

#[test]
fn test_config_from_file() -> Result<(), Box<dyn std::error::Error>> {
    demo()
        .env("CHECKOUT_CONFIG", "tests/fixtures/credit_only.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: 160"))
        .stdout(predicate::str::contains("Processing credit card payment type..."))
        .stdout(predicate::str::contains("Verifying security code 777"))
        .stdout(predicate::str::contains("PayPal").not());

    Ok(())
}

#[test]
fn test_malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[[payments]]\nmethod = \"cash\"")?;

    demo()
        .env("CHECKOUT_CONFIG", file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid checkout config"));

    Ok(())
}
