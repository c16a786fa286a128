//! Selection state: many rows, exactly one active column at a time.

mod controller;

pub use controller::*;
