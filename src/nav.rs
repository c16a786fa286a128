//! Keyboard navigation over the grid: arrow stepping, Enter-to-advance and
//! Tab/Shift-Tab with column-skip and row-wrap rules.

mod cursor;

pub use cursor::*;
