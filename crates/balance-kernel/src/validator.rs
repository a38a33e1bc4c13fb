//! The bracket validator.
//!
//! One pass, an explicit stack of pending openers, fail-fast on the first
//! closer that cannot be matched. O(n) time, O(n) stack in the worst case.

use balance_types::{Bracket, BracketEntry, ErrorKind, Verdict};

/// Validate that the brackets in `input` are balanced and properly nested.
///
/// Characters outside `()[]{}` are ignored. Positions are zero-based
/// character indices.
///
/// - A closer with nothing pending fails at the closer.
/// - A closer of the wrong family fails at the closer.
/// - Openers left at end of input fail at the **innermost** one, the last
///   opener pushed, not the outermost.
pub fn validate(input: &str) -> Verdict {
    let mut stack: Vec<BracketEntry> = Vec::new();

    for (position, ch) in input.chars().enumerate() {
        match Bracket::classify(ch) {
            Some(Bracket::Open(_)) => stack.push(BracketEntry::new(ch, position)),
            Some(Bracket::Close(_)) => match stack.pop() {
                None => return Verdict::invalid(ErrorKind::UnexpectedClosingBracket, position),
                Some(open) if !open.is_closed_by(ch) => {
                    return Verdict::invalid(ErrorKind::MismatchedBracketTypes, position);
                }
                Some(_) => {}
            },
            None => {}
        }
    }

    match stack.last() {
        Some(open) => Verdict::invalid(ErrorKind::UnmatchedOpeningBracket, open.position),
        None => Verdict::Valid,
    }
}
