//! Core domain types for boolcalc.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod bit;
mod gate;
mod input;

pub use bit::{Bit, InvalidBitError};
pub use gate::{Arity, Gate, GateError, UnknownGateError};
pub use input::{InputPolicy, ParseError, ParseErrorKind, parse_number};
