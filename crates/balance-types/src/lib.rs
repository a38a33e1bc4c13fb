//! balance-types: Pure data types for balance.
//!
//! This crate contains the types shared by the kernel and the REPL, with
//! no I/O and no validation logic of its own:
//!
//! - **Bracket alphabet**: [`Family`], [`Bracket`] classification
//! - **Stack frames**: [`BracketEntry`]
//! - **Verdicts**: [`Verdict`], [`ErrorKind`], [`BracketError`]

mod bracket;
mod verdict;

pub use bracket::{Bracket, BracketEntry, Family};
pub use verdict::{BracketError, ErrorKind, Verdict};
