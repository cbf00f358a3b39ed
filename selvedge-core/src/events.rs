//! Row-advance events from the knitting engine

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::progress::{MAX_COLOR_SYMBOL_LEN, MAX_NEEDLES};

/// Full snapshot of one row, delivered when the engine advances
///
/// The engine supplies every field on each advance and
/// [`Progress`](crate::Progress) applies the snapshot as a whole, so a row
/// never mixes fields from two updates. Values are taken as supplied; the
/// engine is trusted to stay in range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowUpdate {
    /// Row index within the pattern
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
    /// Index of the row within the full multi-pass schedule
    pub line_number: i32,
    /// One entry per needle position: true knits the primary yarn
    pub stitches: Vec<bool, MAX_NEEDLES>,
}
