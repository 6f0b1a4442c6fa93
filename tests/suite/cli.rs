//! End-to-end runs of the boolcalc binary

use insta::assert_snapshot;

use crate::common::{run_binary, write_config};

fn stdout_of(args: &[&str], stdin: &str) -> String {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(args, stdin, home.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn menu_and_then_exit() {
    let out = stdout_of(&[], "1\n1\n1\n7\n");
    assert!(out.contains("=== BOOLEAN LOGIC CALCULATOR ==="));
    assert!(out.contains("Result: 1\n1 AND 1 = 1\n"));
    assert!(out.ends_with("Thank you for using Boolean Logic Calculator. Goodbye!\n"));
}

#[test]
fn menu_invalid_choice_then_nand() {
    let out = stdout_of(&["menu"], "9\n5\n1\n1\n7\n");
    assert!(out.contains("Invalid choice. Please select a valid operation (1-7).\n"));
    assert!(out.contains("Result: 0\n1 NAND 1 = 0\n"));
}

#[test]
fn menu_survives_non_numeric_input() {
    let out = stdout_of(&[], "hello\n3\n1\n7\n");
    assert!(out.contains("Invalid input 'hello': expected a whole number.\n"));
    assert!(out.contains("NOT 1 = 0\n"));
}

#[test]
fn menu_survives_bytes_that_are_not_utf8() {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(&[], b"\xff\n7\n", home.path());
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("expected a whole number.\n"));
    assert!(out.ends_with("Thank you for using Boolean Logic Calculator. Goodbye!\n"));
}

#[test]
fn menu_ends_cleanly_at_end_of_input() {
    let out = stdout_of(&[], "2\n0\n1\n");
    assert!(out.contains("0 OR 1 = 1\n"));
    assert!(!out.contains("Goodbye"));
}

#[test]
fn tables_mode_prints_not_table() {
    let out = stdout_of(&["tables"], "");
    let start = out.find("=== NOT Truth Table ===").unwrap();
    let not_table: String = out[start..].lines().take(5).collect::<Vec<_>>().join("\n");
    assert_snapshot!(not_table, @r"
=== NOT Truth Table ===
Input | Output
------|-------
  0   |   1
  1   |   0
");
    assert_eq!(out.matches("Truth Table ===").count(), 6);
}

#[test]
fn demo_mode_from_config() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[app]\nmode = \"demo\"\n");

    let output = run_binary(&[], "", home.path());
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("This is equivalent to NAND(1, 1) = 0\n"));
    assert!(out.contains("=== XOR Decomposition ==="));
}

#[test]
fn permissive_policy_from_config() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[input]\npolicy = \"permissive\"\n");

    let output = run_binary(&[], "1\n3\n1\n7\n", home.path());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("Result: 0\n0 AND 1 = 0\n"));
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[input\npolicy =");

    let output = run_binary(&[], "1\n3\n1\n7\n", home.path());
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("Invalid input 3: expected 0 or 1.\n"));
}

#[test]
fn unknown_mode_argument_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(&["circuits"], "", home.path());
    assert!(!output.status.success());
    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.contains("unknown mode 'circuits'"));
}

#[test]
fn logs_go_to_home_not_stdout() {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(&[], "7\n", home.path());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(!out.contains("Logging initialized"));
    assert!(home.path().join(".boolcalc/logs/boolcalc.log").exists());
}
