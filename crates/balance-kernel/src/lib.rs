//! balance-kernel: The core of balance.
//!
//! This crate provides the [`validate`] function: a single left-to-right
//! scan that checks `()`, `[]` and `{}` are balanced and properly nested,
//! reporting the first offending position when they are not.
//!
//! ```
//! use balance_kernel::{validate, ErrorKind, Verdict};
//!
//! assert_eq!(validate("([{}])"), Verdict::Valid);
//! assert_eq!(
//!     validate("abc(def]ghi"),
//!     Verdict::invalid(ErrorKind::MismatchedBracketTypes, 7),
//! );
//! ```

pub mod validator;

pub use balance_types::{Bracket, BracketEntry, BracketError, ErrorKind, Family, Verdict};
pub use validator::validate;
