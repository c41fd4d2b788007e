//! Utility macros.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a tokenizer alternative
//! - `MK_CATEGORY!` - Creates a classification category
//!
//! These keep the pattern tables in the lexer and classifier to one line per
//! rule.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a tokenizer alternative anchored at the scan cursor.
///
/// ```ignore
/// MK_PATTERN!(r"0[xX][0-9A-Fa-f]+", TokenKind::Hexadecimal)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($pattern:expr, $kind:expr) => {
        $crate::lexer::lexer::TokenPattern::new($pattern, $kind)
    };
}

/// Creates a named category whose regex must match a whole token.
///
/// ```ignore
/// MK_CATEGORY!("BOOLEANO", r"true|false|True|False")
/// ```
#[macro_export]
macro_rules! MK_CATEGORY {
    ($name:literal, $pattern:expr) => {
        $crate::classifier::classifier::Category::new($name, $pattern)
    };
}
