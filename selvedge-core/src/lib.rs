//! Machine-agnostic progress state for the knitting tracker
//!
//! This crate holds the session state that accumulates while a pattern is
//! knit, independent of any rendering surface:
//!
//! - Row, pass, and repeat counters for the current position in the pattern
//! - Yarn color assignments and the stitch pattern selected for the row
//! - The latest carriage snapshot decoded from the status stream
//!
//! Callers feed it two kinds of events: decoded carriage status messages
//! and atomic per-row snapshots from the knitting engine. The state has no
//! internal synchronization; callers serialize access, e.g. from a
//! single-threaded event loop.

#![no_std]
#![deny(unsafe_code)]

pub mod events;
pub mod progress;

pub use events::RowUpdate;
pub use progress::{Progress, MAX_COLOR_SYMBOL_LEN, MAX_NEEDLES};
