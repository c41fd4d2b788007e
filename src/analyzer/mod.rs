//! Drives the tokenizer and classifier over a whole input.
//!
//! Every non-blank line is trimmed, tokenized and each token classified,
//! producing one [`analyzer::Row`] per token in input order.

pub mod analyzer;
