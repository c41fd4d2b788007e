//! Lexical analysis module.
//!
//! This module contains the tokenizer that splits one line of text into
//! tokens. It handles:
//!
//! - Tokenization using an ordered list of anchored regex patterns
//! - Quoted strings, emails, and numeric literals in several forms
//! - Operators and identifiers
//! - A single-character fallback so no input is ever dropped

pub mod lexer;
pub mod tokens;
