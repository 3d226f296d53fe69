//! Helper functions for the page layer
//!
//! These are the pure formatting helpers a page calls per record.

mod date;

pub use date::*;
