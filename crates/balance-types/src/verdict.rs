//! Verdicts: the outcome of validating one input.
//!
//! Malformed brackets are an expected outcome, not an exceptional one, so a
//! [`Verdict`] is a plain value. Callers that would rather propagate with `?`
//! can convert it with [`Verdict::into_result`].
//!
//! On the wire a verdict is one of:
//!
//! ```json
//! { "valid": true }
//! { "valid": false, "error": "Mismatched bracket types", "position": 1 }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Why an input is not balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum ErrorKind {
    /// A closer appeared with no opener pending.
    #[error("Unexpected closing bracket")]
    #[serde(rename = "Unexpected closing bracket")]
    UnexpectedClosingBracket,
    /// A closer appeared while the innermost pending opener is of another family.
    #[error("Mismatched bracket types")]
    #[serde(rename = "Mismatched bracket types")]
    MismatchedBracketTypes,
    /// The input ended with at least one opener never closed.
    #[error("Unmatched opening bracket")]
    #[serde(rename = "Unmatched opening bracket")]
    UnmatchedOpeningBracket,
}

/// The result of validating an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "VerdictRepr")]
pub enum Verdict {
    /// All brackets are balanced and properly nested.
    Valid,
    /// The first structural violation found.
    Invalid {
        kind: ErrorKind,
        /// Zero-based character index of the character proving invalidity.
        position: usize,
    },
}

impl Verdict {
    /// Create an invalid verdict.
    pub fn invalid(kind: ErrorKind, position: usize) -> Self {
        Verdict::Invalid { kind, position }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The error kind, if invalid.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { kind, .. } => Some(*kind),
        }
    }

    /// The offending position, if invalid.
    pub fn position(&self) -> Option<usize> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { position, .. } => Some(*position),
        }
    }

    /// Convert to a `Result` for `?`-style propagation.
    pub fn into_result(self) -> Result<(), BracketError> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid { kind, position } => Err(BracketError { kind, position }),
        }
    }
}

/// An invalid verdict as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct BracketError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl From<BracketError> for Verdict {
    fn from(err: BracketError) -> Self {
        Verdict::invalid(err.kind, err.position)
    }
}

/// Wire shape of a verdict.
#[derive(Serialize)]
struct VerdictRepr {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
}

impl From<Verdict> for VerdictRepr {
    fn from(verdict: Verdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            error: verdict.kind(),
            position: verdict.position(),
        }
    }
}
