//! Application module: exposes the editing-session model used by the TUI
//! and runtime.
//!
//! The `App` model lives in `app::model` and owns the grid store, the
//! selection, the cursor and the current input mode.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
