//! Clipboard transfer: copy, paste and delete over a selection,
//! polymorphic over text and binary-image cell kinds.
//!
//! The system clipboard is an injected capability (`ClipboardPort`) so the
//! transfer logic can be exercised against a fake in tests.

mod port;
mod system;
mod transfer;

pub use port::*;
pub use system::*;
pub use transfer::*;
