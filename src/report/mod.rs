//! Text reports over classified rows: a fixed-width table and a per-category
//! summary.

pub mod summary;
pub mod table;
