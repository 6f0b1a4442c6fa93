//! Menu session scenarios

use boolcalc_engine::menu::{FAREWELL, INVALID_CHOICE, MENU_TITLE};
use boolcalc_engine::{InputPolicy, SessionEnd};

use crate::common::transcript;

#[test]
fn and_one_one() {
    let (_, out) = transcript("1\n1\n1\n7\n", InputPolicy::Strict);
    assert!(out.contains("Result: 1\n"));
    assert!(out.contains("1 AND 1 = 1\n"));
}

#[test]
fn or_zero_one() {
    let (_, out) = transcript("2\n0\n1\n7\n", InputPolicy::Strict);
    assert!(out.contains("Result: 1\n0 OR 1 = 1\n"));
}

#[test]
fn not_one() {
    let (_, out) = transcript("3\n1\n7\n", InputPolicy::Strict);
    assert!(out.contains("Result: 0\nNOT 1 = 0\n"));
}

#[test]
fn nand_one_one() {
    let (_, out) = transcript("5\n1\n1\n7\n", InputPolicy::Strict);
    assert!(out.contains("Result: 0\n1 NAND 1 = 0\n"));
}

#[test]
fn xor_and_nor_in_one_session() {
    let (end, out) = transcript("4 1 0\n6 0 0\n7\n", InputPolicy::Strict);
    assert_eq!(end, SessionEnd::Exit);
    assert!(out.contains("1 XOR 0 = 1\n"));
    assert!(out.contains("0 NOR 0 = 1\n"));
    assert_eq!(out.matches(MENU_TITLE).count(), 3);
}

#[test]
fn invalid_choice_keeps_looping() {
    let (end, out) = transcript("9\n1 1 1\n7\n", InputPolicy::Strict);
    assert_eq!(end, SessionEnd::Exit);
    assert!(out.contains(INVALID_CHOICE));
    assert!(out.contains("1 AND 1 = 1"));
}

#[test]
fn exit_says_goodbye() {
    let (end, out) = transcript("7\n", InputPolicy::Strict);
    assert_eq!(end, SessionEnd::Exit);
    assert!(out.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn parse_error_then_valid_operation() {
    let (end, out) = transcript("one\n3 0\n7\n", InputPolicy::Strict);
    assert_eq!(end, SessionEnd::Exit);
    assert!(out.contains("Invalid input 'one': expected a whole number.\n"));
    assert!(out.contains("NOT 0 = 1\n"));
}

#[test]
fn permissive_matches_lenient_reading() {
    let (_, strict) = transcript("2 5 0\n7\n", InputPolicy::Strict);
    let (_, permissive) = transcript("2 5 0\n7\n", InputPolicy::Permissive);
    assert!(strict.contains("Invalid input 5: expected 0 or 1."));
    assert!(permissive.contains("0 OR 0 = 0"));
}
