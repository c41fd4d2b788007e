#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod analyzer;
pub mod classifier;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;
pub mod rules;

extern crate regex;

/// Byte offset into a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Formats an error for the terminal.
///
/// ```text
/// Error: problema de codificación (la línea 3 no es UTF-8 válido; ...)
/// -> input.txt
/// ```
pub fn format_error(error: &Error) -> String {
    let headline = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error)
    } else {
        format!("Error: {} ({})", error, error.get_tip())
    };

    format!("{}\n-> {}", headline, error.get_path().display())
}
