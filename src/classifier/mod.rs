//! Token classification module.
//!
//! A token is tested against an ordered list of named categories, each a
//! full-string regex. The first category that matches names the token;
//! tokens matching nothing get the `NO_MATCH` sentinel. The built-in
//! categories overlap on purpose and rely on their order to disambiguate.

pub mod categories;
pub mod classifier;

#[cfg(test)]
mod tests;
