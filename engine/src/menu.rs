//! Numbered menu shown by the interactive session.

use std::io::{self, Write};

use boolcalc_types::Gate;

pub const AND_OPERATION: i64 = 1;
pub const OR_OPERATION: i64 = 2;
pub const NOT_OPERATION: i64 = 3;
pub const XOR_OPERATION: i64 = 4;
pub const NAND_OPERATION: i64 = 5;
pub const NOR_OPERATION: i64 = 6;
pub const EXIT_PROGRAM: i64 = 7;

pub const MENU_TITLE: &str = "=== BOOLEAN LOGIC CALCULATOR ===";
pub const MENU_PROMPT: &str = "Select operation: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please select a valid operation (1-7).";
pub const FAREWELL: &str = "Thank you for using Boolean Logic Calculator. Goodbye!";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operation(Gate),
    Exit,
}

impl MenuChoice {
    /// Map a typed number to a selection; anything outside 1-7 is `None`.
    #[must_use]
    pub const fn from_number(number: i64) -> Option<Self> {
        match number {
            AND_OPERATION => Some(MenuChoice::Operation(Gate::And)),
            OR_OPERATION => Some(MenuChoice::Operation(Gate::Or)),
            NOT_OPERATION => Some(MenuChoice::Operation(Gate::Not)),
            XOR_OPERATION => Some(MenuChoice::Operation(Gate::Xor)),
            NAND_OPERATION => Some(MenuChoice::Operation(Gate::Nand)),
            NOR_OPERATION => Some(MenuChoice::Operation(Gate::Nor)),
            EXIT_PROGRAM => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number(self) -> i64 {
        match self {
            MenuChoice::Operation(Gate::And) => AND_OPERATION,
            MenuChoice::Operation(Gate::Or) => OR_OPERATION,
            MenuChoice::Operation(Gate::Not) => NOT_OPERATION,
            MenuChoice::Operation(Gate::Xor) => XOR_OPERATION,
            MenuChoice::Operation(Gate::Nand) => NAND_OPERATION,
            MenuChoice::Operation(Gate::Nor) => NOR_OPERATION,
            MenuChoice::Exit => EXIT_PROGRAM,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            MenuChoice::Operation(gate) => format!("{gate} Operation"),
            MenuChoice::Exit => "Exit Program".to_string(),
        }
    }

    #[must_use]
    pub fn all() -> Vec<MenuChoice> {
        Gate::all()
            .iter()
            .map(|gate| MenuChoice::Operation(*gate))
            .chain(std::iter::once(MenuChoice::Exit))
            .collect()
    }
}

/// Write the menu followed by the selection prompt (no trailing newline).
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    for choice in MenuChoice::all() {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    write!(out, "{MENU_PROMPT}")?;
    out.flush()
}
