//! Validation tests for the bracket validator.
//!
//! Concrete cases are rstest tables; the laws that must hold for every input
//! are proptest properties.

use balance_kernel::{Bracket, ErrorKind, Verdict, validate};
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// Valid inputs
// ============================================================================

#[rstest]
#[case::empty("")]
#[case::parens("()")]
#[case::squares("[]")]
#[case::curlies("{}")]
#[case::nested("([{}])")]
#[case::sequential("()[]{}")]
#[case::nested_and_sequential("{[()]}[]")]
#[case::no_brackets("hello world")]
#[case::code("function test() { return [1, 2]; }")]
#[case::real_snippet("const arr = [1, 2, 3].map((x) => { return x * 2; });")]
#[case::deep("((((((((()))))))))")]
#[case::angles_ignored("<(>)")]
fn valid_inputs(#[case] input: &str) {
    assert_eq!(validate(input), Verdict::Valid, "input: {input:?}");
}

#[test]
fn long_sequence_is_valid() {
    assert_eq!(validate(&"()".repeat(1000)), Verdict::Valid);
}

#[test]
fn very_deep_nesting_is_valid() {
    let input = format!("{}{}", "[".repeat(100_000), "]".repeat(100_000));
    assert_eq!(validate(&input), Verdict::Valid);
}

// ============================================================================
// Invalid inputs
// ============================================================================

#[rstest]
#[case::lone_opener("(", ErrorKind::UnmatchedOpeningBracket, 0)]
#[case::lone_closer(")", ErrorKind::UnexpectedClosingBracket, 0)]
#[case::wrong_family("(]", ErrorKind::MismatchedBracketTypes, 1)]
#[case::wrong_order("([)]", ErrorKind::MismatchedBracketTypes, 2)]
#[case::unclosed_in_middle("({)}", ErrorKind::MismatchedBracketTypes, 2)]
#[case::surrounded_by_text("abc(def]ghi", ErrorKind::MismatchedBracketTypes, 7)]
#[case::nested_mismatch("({[}]", ErrorKind::MismatchedBracketTypes, 3)]
#[case::crossed("[(])", ErrorKind::MismatchedBracketTypes, 2)]
#[case::reversed(")(", ErrorKind::UnexpectedClosingBracket, 0)]
#[case::innermost_unmatched("[[[", ErrorKind::UnmatchedOpeningBracket, 2)]
#[case::extra_closer_after_valid("()]", ErrorKind::UnexpectedClosingBracket, 2)]
#[case::unmatched_after_valid("()(", ErrorKind::UnmatchedOpeningBracket, 2)]
#[case::unmatched_outer_only("{()", ErrorKind::UnmatchedOpeningBracket, 0)]
fn invalid_inputs(#[case] input: &str, #[case] kind: ErrorKind, #[case] position: usize) {
    assert_eq!(
        validate(input),
        Verdict::invalid(kind, position),
        "input: {input:?}"
    );
}

// ============================================================================
// Properties
// ============================================================================

/// Reverse `s` and swap every bracket for its counterpart.
fn mirror(s: &str) -> String {
    s.chars()
        .rev()
        .map(|ch| match Bracket::classify(ch) {
            Some(Bracket::Open(family)) => family.closer(),
            Some(Bracket::Close(family)) => family.opener(),
            None => ch,
        })
        .collect()
}

/// Strategy for balanced strings built by nesting and concatenation.
fn balanced() -> impl Strategy<Value = String> {
    let leaf = "[a-z ]{0,4}";
    leaf.prop_recursive(6, 64, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("({s})")),
            inner.clone().prop_map(|s| format!("[{s}]")),
            inner.clone().prop_map(|s| format!("{{{s}}}")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{a}{b}")),
        ]
    })
}

proptest! {
    #[test]
    fn strings_without_brackets_are_valid(s in "[^()\\[\\]{}]*") {
        prop_assert_eq!(validate(&s), Verdict::Valid);
    }

    #[test]
    fn openers_followed_by_mirror_are_valid(s in "[(\\[{a-z0-9 ]{0,64}") {
        let input = format!("{s}{}", mirror(&s));
        prop_assert_eq!(validate(&input), Verdict::Valid, "input: {:?}", input);
    }

    #[test]
    fn generated_balanced_strings_are_valid(s in balanced()) {
        prop_assert_eq!(validate(&s), Verdict::Valid, "input: {:?}", s);
    }

    #[test]
    fn validate_is_idempotent(s in ".*") {
        prop_assert_eq!(validate(&s), validate(&s));
    }

    #[test]
    fn invalid_position_points_at_a_bracket(s in "[()\\[\\]{}x]{0,32}") {
        if let Verdict::Invalid { kind, position } = validate(&s) {
            let ch = s.chars().nth(position);
            prop_assert!(ch.is_some(), "position {} out of range for {:?}", position, s);
            let bracket = ch.and_then(Bracket::classify);
            match kind {
                ErrorKind::UnexpectedClosingBracket | ErrorKind::MismatchedBracketTypes => {
                    prop_assert!(matches!(bracket, Some(Bracket::Close(_))), "{:?} at {}", s, position);
                }
                ErrorKind::UnmatchedOpeningBracket => {
                    prop_assert!(matches!(bracket, Some(Bracket::Open(_))), "{:?} at {}", s, position);
                }
            }
        }
    }

    #[test]
    fn appending_a_lone_closer_to_balanced_is_unexpected(s in balanced()) {
        let input = format!("{s})");
        let position = s.chars().count();
        prop_assert_eq!(
            validate(&input),
            Verdict::invalid(ErrorKind::UnexpectedClosingBracket, position)
        );
    }
}
