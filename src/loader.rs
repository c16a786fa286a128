//! Load-input handling: expanding files and directories into audio paths
//! and reading them into the grid with per-file error isolation.

mod scan;

pub use scan::*;
