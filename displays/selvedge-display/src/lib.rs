//! Display-agnostic row rendering for the knitting tracker
//!
//! This crate turns accumulated progress into an ordered sequence of cell
//! descriptors that an external surface draws verbatim:
//!
//! - [`Palette`] trait for resolving yarn color slots to RGB values
//! - [`Rgb`] packed color with the luminance-based contrast rule
//! - [`render_row`] building the label cells and stitch cells for one row
//!
//! # Architecture
//!
//! The tracker never paints or scrolls anything itself. It computes what
//! one grid row should contain; any surface, whether a desktop widget
//! grid or a terminal UI, places the cells at the given line.
//! Label cells come first in fixed column order (row, pass, color,
//! carriage), followed by one stitch cell per needle in index order. That
//! ordering is part of the contract, not incidental.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod palette;
pub mod row;

// Re-export key types
pub use color::Rgb;
pub use palette::Palette;
pub use row::{render_row, Direction, RenderError, RowLabels, RowRender, StitchCell};
