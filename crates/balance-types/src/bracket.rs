//! The bracket alphabet: three families, each an opener and a closer.

/// A bracket family: an opener paired with its unique closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `(` and `)`
    Paren,
    /// `[` and `]`
    Square,
    /// `{` and `}`
    Curly,
}

impl Family {
    /// All families, in the order they are listed to users.
    pub const ALL: [Family; 3] = [Family::Paren, Family::Square, Family::Curly];

    /// The opening character of this family.
    pub fn opener(self) -> char {
        match self {
            Family::Paren => '(',
            Family::Square => '[',
            Family::Curly => '{',
        }
    }

    /// The closing character of this family.
    pub fn closer(self) -> char {
        match self {
            Family::Paren => ')',
            Family::Square => ']',
            Family::Curly => '}',
        }
    }
}

/// A character classified as part of the bracket alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open(Family),
    Close(Family),
}

impl Bracket {
    /// Classify a character. Anything outside `()[]{}` is `None`.
    pub fn classify(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Bracket::Open(Family::Paren)),
            '[' => Some(Bracket::Open(Family::Square)),
            '{' => Some(Bracket::Open(Family::Curly)),
            ')' => Some(Bracket::Close(Family::Paren)),
            ']' => Some(Bracket::Close(Family::Square)),
            '}' => Some(Bracket::Close(Family::Curly)),
            _ => None,
        }
    }

    /// The family this bracket belongs to.
    pub fn family(self) -> Family {
        match self {
            Bracket::Open(family) | Bracket::Close(family) => family,
        }
    }
}

/// A pending opener awaiting its closer.
///
/// Pushed when an opener is scanned, popped when a closer consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketEntry {
    /// The opening character, one of `(`, `[`, `{`.
    pub bracket: char,
    /// Zero-based character index of the opener in the input.
    pub position: usize,
}

impl BracketEntry {
    pub fn new(bracket: char, position: usize) -> Self {
        Self { bracket, position }
    }

    /// Whether `closer` is the closing character of this entry's family.
    pub fn is_closed_by(&self, closer: char) -> bool {
        match Bracket::classify(closer) {
            Some(Bracket::Close(family)) => family.opener() == self.bracket,
            _ => false,
        }
    }
}
