//! Row cell computation
//!
//! [`render_row`] turns the accumulated progress into the descriptors for
//! one grid row: four label cells in fixed column order, then one stitch
//! cell per needle position. The external surface draws them verbatim at
//! the given grid line.

use core::fmt::Write;

use heapless::{String, Vec};
use selvedge_core::{Progress, MAX_NEEDLES};

use crate::color::Rgb;
use crate::palette::Palette;

/// Maximum length of the color label ("Color " plus the yarn symbol)
pub const COLOR_LABEL_LEN: usize = 12;

/// Maximum length of the carriage label (abbreviation plus direction glyph)
pub const CARRIAGE_LABEL_LEN: usize = 8;

/// Errors that can occur during row rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Row multiplier must be positive
    InvalidRowMultiplier,
}

/// Which way the carriage travels on this pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Even schedule lines knit left to right
    Rightward,
    /// Odd schedule lines knit right to left
    Leftward,
}

impl Direction {
    /// Derive the travel direction from the schedule line index
    pub fn from_line_number(line_number: i32) -> Self {
        if line_number.rem_euclid(2) == 1 {
            Direction::Leftward
        } else {
            Direction::Rightward
        }
    }

    /// Arrow glyph the surface draws for this direction
    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Rightward => "\u{2192} ",
            Direction::Leftward => "\u{2190} ",
        }
    }
}

/// One stitch cell of the progress grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StitchCell {
    /// Whether the needle knits a yarn in this row
    pub filled: bool,
    /// Resolved background color, absent for a placeholder cell
    pub color: Option<Rgb>,
    /// Contrast foreground, present exactly when `color` is
    pub foreground: Option<Rgb>,
}

impl StitchCell {
    /// A cell knit in the given yarn color
    pub fn knit(color: Rgb) -> Self {
        Self {
            filled: true,
            color: Some(color),
            foreground: Some(color.contrast()),
        }
    }

    /// A dotted placeholder for a needle that knits nothing this row
    pub fn placeholder() -> Self {
        Self {
            filled: false,
            color: None,
            foreground: None,
        }
    }
}

/// Label cells of one grid row, in fixed column order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowLabels {
    /// Row number within the pattern
    pub row: i32,
    /// Pass number within the logical row, 1-based
    pub pass: i32,
    /// Color label text, empty when no yarn symbol is assigned
    pub color: String<COLOR_LABEL_LEN>,
    /// Carriage abbreviation and direction glyph
    pub carriage: String<CARRIAGE_LABEL_LEN>,
}

/// Everything the surface needs to draw one grid row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowRender {
    /// Grid line where the surface places the cells
    pub line: i32,
    /// Label cells, drawn before the stitch cells
    pub labels: RowLabels,
    /// Stitch cells in needle order
    pub stitches: Vec<StitchCell, MAX_NEEDLES>,
}

/// Compute the cell descriptors for the current row
///
/// Returns `Ok(None)` until the first row update arrives - the row has
/// not started and there is nothing to draw. Fails only when
/// `row_multiplier` is not positive, which is a caller bug rather than a
/// machine condition.
pub fn render_row<P: Palette>(
    progress: &Progress,
    row_multiplier: i32,
    palette: &P,
) -> Result<Option<RowRender>, RenderError> {
    if row_multiplier <= 0 {
        return Err(RenderError::InvalidRowMultiplier);
    }
    if !progress.has_started() {
        return Ok(None);
    }

    // Which pass of the logical row this schedule line is.
    let swipe = progress.line_number.rem_euclid(row_multiplier);
    let direction = Direction::from_line_number(progress.line_number);

    let mut color = String::new();
    if !progress.color_symbol.is_empty() {
        let _ = write!(color, "Color {}", progress.color_symbol.as_str());
    }

    // "K Carriage" abbreviates to "KC "; an unrecognized carriage has an
    // empty name and contributes nothing to the label.
    let mut carriage = String::new();
    let name = progress.carriage.kind.label().as_bytes();
    if name.len() >= 3 {
        let _ = carriage.push(name[0] as char);
        let _ = carriage.push(name[2] as char);
        let _ = carriage.push(' ');
    }
    let _ = carriage.push_str(direction.glyph());

    let mut stitches = Vec::new();
    for &bit in progress.stitches.iter() {
        let cell = if bit {
            StitchCell::knit(palette.color(progress.primary_color))
        } else if let Some(alt) = progress.alt_color {
            StitchCell::knit(palette.color(alt))
        } else {
            StitchCell::placeholder()
        };
        let _ = stitches.push(cell);
    }

    Ok(Some(RowRender {
        line: progress.line_number,
        labels: RowLabels {
            row: progress.current_row,
            pass: swipe + 1,
            color,
            carriage,
        },
        stitches,
    }))
}
