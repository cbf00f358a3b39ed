//! Property tests for the contrast rule and row rendering

use heapless::{String, Vec};
use proptest::prelude::*;

use selvedge_core::{Progress, RowUpdate, MAX_NEEDLES};
use selvedge_display::{render_row, Palette, Rgb};

struct ShadePalette;

impl Palette for ShadePalette {
    fn color(&self, slot: i16) -> Rgb {
        // Spread slots across the brightness range so both contrast
        // outcomes appear.
        Rgb((slot as u32).wrapping_mul(0x01_01_01) & 0xFF_FF_FF)
    }
}

proptest! {
    // Cross-check the contrast rule against the fixed weights and the
    // integer-division red extraction, over the whole 24-bit space.
    #[test]
    fn contrast_matches_the_threshold_rule(value in 0u32..=0xFF_FF_FF) {
        let color = Rgb(value);

        let r = value / 0x1000;
        let g = (value / 0x100) & 0xFF;
        let b = value & 0xFF;
        let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;

        let expected = if luminance < 128.0 { Rgb::WHITE } else { Rgb::BLACK };
        prop_assert_eq!(color.contrast(), expected);
    }

    #[test]
    fn contrast_is_always_black_or_white(value in 0u32..=0xFF_FF_FF) {
        let fg = Rgb(value).contrast();
        prop_assert!(fg == Rgb::BLACK || fg == Rgb::WHITE);
    }

    // Every render preserves the stitch count and the foreground-iff-color
    // invariant, for any pattern and color assignment.
    #[test]
    fn rendered_cells_mirror_the_stitch_pattern(
        stitches in proptest::collection::vec(any::<bool>(), 0..MAX_NEEDLES),
        primary_color in 0i16..256,
        alt_color in proptest::option::of(0i16..256),
        line_number in 0i32..100_000,
        row_multiplier in 1i32..10,
    ) {
        let mut progress = Progress::new();
        progress.apply_row_update(RowUpdate {
            current_row: 0,
            total_rows: -1,
            repeats: -1,
            color_symbol: String::new(),
            primary_color,
            alt_color,
            line_number,
            stitches: Vec::from_slice(&stitches).unwrap(),
        });

        let render = render_row(&progress, row_multiplier, &ShadePalette)
            .unwrap()
            .unwrap();

        prop_assert_eq!(render.stitches.len(), stitches.len());
        for (cell, &bit) in render.stitches.iter().zip(stitches.iter()) {
            prop_assert_eq!(cell.color.is_some(), cell.foreground.is_some());
            prop_assert_eq!(cell.filled, bit || alt_color.is_some());
            if let (Some(color), Some(foreground)) = (cell.color, cell.foreground) {
                prop_assert_eq!(foreground, color.contrast());
            }
        }

        prop_assert_eq!(render.labels.pass, line_number.rem_euclid(row_multiplier) + 1);
        prop_assert_eq!(render.line, line_number);
    }

    #[test]
    fn render_is_deterministic(
        stitches in proptest::collection::vec(any::<bool>(), 0..32),
        line_number in 0i32..1000,
    ) {
        let mut progress = Progress::new();
        progress.apply_row_update(RowUpdate {
            current_row: 1,
            total_rows: 10,
            repeats: 0,
            color_symbol: String::try_from("B").unwrap(),
            primary_color: 2,
            alt_color: None,
            line_number,
            stitches: Vec::from_slice(&stitches).unwrap(),
        });

        let a = render_row(&progress, 2, &ShadePalette).unwrap().unwrap();
        let b = render_row(&progress, 2, &ShadePalette).unwrap().unwrap();
        prop_assert_eq!(a, b);
    }
}
