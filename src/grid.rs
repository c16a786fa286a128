//! The in-memory editing grid: track records, the fixed column schema and
//! the `GridStore` that owns all records and tracks dirty state.

mod columns;
mod record;
mod store;

pub use columns::*;
pub use record::*;
pub use store::*;

#[cfg(test)]
mod tests;
