//! Core engine for boolcalc.
//!
//! Gate evaluation and truth tables are pure; the [`Session`] drives the
//! numbered menu over any reader/writer pair without touching the terminal
//! directly.

pub mod demo;
pub mod eval;
pub mod menu;
mod session;
mod truth_table;

pub use boolcalc_types::{
    Arity, Bit, Gate, GateError, InputPolicy, InvalidBitError, ParseError, ParseErrorKind,
    UnknownGateError,
};

pub use eval::{Inputs, apply, evaluate, evaluate_raw};
pub use menu::MenuChoice;
pub use session::{Session, SessionEnd, SessionStats};
pub use truth_table::{Row, Rows, TruthTable, render_all};
