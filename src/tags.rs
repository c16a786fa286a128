//! The format adapter: reads and writes tag fields and embedded cover
//! pictures for MP3/M4A/FLAC through `lofty`, and runs the batch save.
//!
//! The grid core never inspects container formats; it consumes an initial
//! `TrackRecord` snapshot from `load_snapshot` and a per-record persist
//! outcome used to decide whether to clear the dirty flag.

mod adapter;
mod save;

pub use adapter::*;
pub use save::*;
