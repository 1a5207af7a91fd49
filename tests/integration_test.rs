//! Integration tests for the ATM simulator CLI.
//!
//! These tests run the actual binary with scripted stdin and verify the
//! exact user-facing strings and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with the given scripted input and return stdout.
/// The script must end with menu choice 5 so the process exits normally.
fn run_session(script: &str) -> String {
    let mut cmd = Command::cargo_bin("atm-simulator").unwrap();
    let assert = cmd.write_stdin(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_banner_and_prompts() {
    let output = run_session("123456\n1234\n5\n");

    assert!(output.starts_with(
        "=========================================\n\
         Welcome to the ATM Machine Simulation System:\n\
         =========================================\n\
         Please follow the instructions to use the ATM.\n\
         ========================================="
    ));
    assert!(output.contains("Please enter your account number:"));
    assert!(output.contains("Please enter your PIN:"));
    assert!(output.contains("Enter your choice: "));
}

#[test]
fn test_login_logout_exits_cleanly() {
    let output = run_session("123456\n1234\n5\n");

    assert!(output.contains("Login successful! Welcome John Doe"));
    assert!(output.contains("Thank you for using the ATM. Goodbye!"));
}

#[test]
fn test_all_seed_accounts_can_log_in() {
    for (id, pin, name) in [
        ("123456", "1234", "John Doe"),
        ("654321", "4321", "Jane Smith"),
        ("456789", "4567", "John Adeja"),
        ("987654", "9876", "Jane alex"),
    ] {
        let output = run_session(&format!("{}\n{}\n5\n", id, pin));
        assert!(
            output.contains(&format!("Login successful! Welcome {}", name)),
            "account {} failed to log in",
            id
        );
    }
}

#[test]
fn test_failed_login_reprompts() {
    let output = run_session("123456\n0000\n000000\n1234\n123456\n1234\n5\n");

    // Wrong PIN and unknown id get the same generic message.
    let rejections = output
        .matches("Invalid account number or PIN. Please try again.")
        .count();
    assert_eq!(rejections, 2);
    assert!(output.contains("Login successful! Welcome John Doe"));
}

#[test]
fn test_deposit_session() {
    let output = run_session("123456\n1234\n2\n500\n1\n5\n");

    assert!(output.contains("Enter amount to deposit: "));
    assert!(output.contains("Deposit successful! New balance: $1500.00"));
    assert!(output.contains("Your current balance is: $1500.00"));
}

#[test]
fn test_withdraw_session() {
    let output = run_session("654321\n4321\n3\n250.50\n5\n");

    assert!(output.contains("Enter amount to withdraw: "));
    assert!(output.contains("$250.50 withdrawn successfully."));
    assert!(output.contains("New balance: $1249.50"));
}

#[test]
fn test_overdraw_is_rejected() {
    let output = run_session("123456\n1234\n3\n5000\n1\n5\n");

    assert!(output.contains("Insufficient funds. Your current balance is: $1000.00"));
    // Withdraw preamble, rejection message, and the follow-up balance check
    // all report the unchanged balance.
    assert_eq!(output.matches("Your current balance is: $1000.00").count(), 3);
}

#[test]
fn test_history_renders_audit_lines() {
    let output = run_session("654321\n4321\n1\n4\n5\n");

    assert!(output.contains("Transaction History for Jane Smith:"));
    assert!(output.contains("Account Number: 654321"));
    assert!(output.contains("Jane Smith (654321): User logged in"));
    assert!(output.contains("Jane Smith (654321): Checked balance - $1500.00"));
}

#[test]
fn test_history_timestamps_use_fixed_format() {
    let output = run_session("123456\n1234\n4\n5\n");

    // Every rendered ledger line starts with `YYYY-MM-DD HH:MM:SS - `.
    let line = output
        .lines()
        .find(|l| l.contains("(123456): User logged in"))
        .expect("login entry rendered");
    let timestamp = &line[..19];
    assert_eq!(timestamp.len(), 19);
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[7..8], "-");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[13..14], ":");
    assert_eq!(&timestamp[16..17], ":");
    assert!(line[19..].starts_with(" - "));
}

#[test]
fn test_invalid_choice_reshows_menu() {
    let output = run_session("123456\n1234\n7\n5\n");

    assert!(output.contains("Invalid choice. Please try again."));
    assert_eq!(output.matches("ATM Menu: Please Select an Option:").count(), 2);
}

#[test]
fn test_malformed_menu_choice_is_fatal() {
    let mut cmd = Command::cargo_bin("atm-simulator").unwrap();
    cmd.write_stdin("123456\n1234\nabc\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a number, got 'abc'"));
}

#[test]
fn test_malformed_amount_is_fatal() {
    let mut cmd = Command::cargo_bin("atm-simulator").unwrap();
    cmd.write_stdin("123456\n1234\n2\nten dollars\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a number"));
}

#[test]
fn test_end_of_input_is_fatal() {
    let mut cmd = Command::cargo_bin("atm-simulator").unwrap();
    cmd.write_stdin("123456\n1234\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended unexpectedly"));
}
