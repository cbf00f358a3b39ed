//! Accumulated knitting progress
//!
//! [`Progress`] is the single mutable record of a knitting session. Status
//! messages replace the carriage snapshot; row-advance events replace the
//! row fields as one atomic snapshot. Counters hold -1 until the first
//! event arrives, and [`Progress::reset`] returns everything to that
//! pristine state.

use heapless::{String, Vec};
use selvedge_protocol::CarriageStatus;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::events::RowUpdate;

/// Widest supported needle bed
pub const MAX_NEEDLES: usize = 200;

/// Maximum yarn color symbol length
pub const MAX_COLOR_SYMBOL_LEN: usize = 4;

/// Cumulative progress of one knitting session
///
/// Created once per session and mutated field-group by field-group as
/// events arrive. There is no invalid order of events: a row update may
/// legally arrive before any carriage status, leaving the carriage
/// snapshot at its default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Progress {
    /// Row index within the pattern, -1 until the first row update
    pub current_row: i32,
    /// Rows in the full pattern, -1 when unknown
    pub total_rows: i32,
    /// Remaining pattern repeats, -1 when unknown
    pub repeats: i32,
    /// Symbol of the yarn color knit in this row, empty when none is assigned
    pub color_symbol: String<MAX_COLOR_SYMBOL_LEN>,
    /// Palette slot of the primary yarn, -1 when unset
    pub primary_color: i16,
    /// Palette slot of the alternate yarn, for rows carrying a second color
    pub alt_color: Option<i16>,
    /// Index of the row within the full multi-pass schedule, -1 when unset
    pub line_number: i32,
    /// Stitch pattern of the current row, one entry per needle position
    pub stitches: Vec<bool, MAX_NEEDLES>,
    /// Last carriage snapshot decoded from the status stream
    pub carriage: CarriageStatus,
}

impl Progress {
    /// Create a fresh session with every field at its sentinel
    pub fn new() -> Self {
        Self {
            current_row: -1,
            total_rows: -1,
            repeats: -1,
            color_symbol: String::new(),
            primary_color: -1,
            alt_color: None,
            line_number: -1,
            stitches: Vec::new(),
            carriage: CarriageStatus::default(),
        }
    }

    /// Return every field to its sentinel, abandoning the session
    ///
    /// Unconditional and immediate; calling it twice is the same as once.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace the carriage snapshot
    ///
    /// Row counters and colors stay untouched.
    pub fn apply_carriage_status(&mut self, status: CarriageStatus) {
        self.carriage = status;
    }

    /// Replace the row fields with one full snapshot
    ///
    /// The update is applied as a whole; no row field survives from the
    /// previous update. The carriage snapshot stays untouched.
    pub fn apply_row_update(&mut self, update: RowUpdate) {
        self.current_row = update.current_row;
        self.total_rows = update.total_rows;
        self.repeats = update.repeats;
        self.color_symbol = update.color_symbol;
        self.primary_color = update.primary_color;
        self.alt_color = update.alt_color;
        self.line_number = update.line_number;
        self.stitches = update.stitches;
    }

    /// Returns true once the first row update has arrived
    pub fn has_started(&self) -> bool {
        self.current_row >= 0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
