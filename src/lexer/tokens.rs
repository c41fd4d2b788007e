use std::fmt::Display;

use crate::Span;

/// The tokenizer alternative that produced a token.
///
/// Only used for diagnostics: classification works on the raw text and never
/// looks at the kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    String,
    Email,
    Hexadecimal,
    Scientific,
    Real,
    Integer,
    Operator,
    Identifier,

    // Single character nothing else claimed
    Symbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ {}..{}", self.kind, self.value, self.span.start.0, self.span.end.0)
    }
}
