//! Error types and error handling.
//!
//! This module defines the errors raised while loading an input file:
//!
//! - A missing file
//! - A file that is not valid UTF-8
//! - Any other I/O failure
//!
//! Tokens that match no category are not errors; they are reported as
//! `NO_MATCH` rows.

pub mod errors;
