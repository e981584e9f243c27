//! Terminal Core Module
//!
//! Renderer-independent text state. This module contains:
//! - The logical text buffer
//! - Fixed-width line wrapping and the scrollback window
//! - Screen glow derived from the visible text
//! - Frame snapshots
//!
//! Every derived value is recomputed from the logical text, so the same
//! key sequence always produces the same window.

mod buffer;
pub mod feedback;
mod scrollback;
mod snapshot;

pub use buffer::{Edit, InputBuffer};
pub use scrollback::{wrap, ScrollbackWindow};
pub use snapshot::Snapshot;
