//! Yarn palette lookup

use crate::color::Rgb;

/// Resolves yarn color slots to RGB values
///
/// The color table is owned by the caller (pattern import, user settings);
/// the render model only ever asks for slots the row update named. Lookups
/// must be total over those valid slots - what an implementation returns
/// for anything else is its own business.
pub trait Palette {
    /// Color of the yarn in the given slot
    fn color(&self, slot: i16) -> Rgb;
}
