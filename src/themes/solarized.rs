//! Solarized palette.
//!
//! Based on Ethan Schoonover's color scheme as described on
//! <http://ethanschoonover.com/solarized>.

use crate::face::{ColorDepth, Face, Typeface};
use crate::theme::{FaceStyle, ThemePalette};

use super::Swatch;

const BASE03: Swatch = Swatch::new(Typeface::Bold, 0, 8, 234);
const BASE02: Swatch = Swatch::new(Typeface::Regular, 0, 0, 235);
const BASE01: Swatch = Swatch::new(Typeface::Bold, 2, 10, 240);
const BASE1: Swatch = Swatch::new(Typeface::Bold, 6, 14, 245);
const BASE0: Swatch = Swatch::new(Typeface::Bold, 4, 12, 244);
const YELLOW: Swatch = Swatch::new(Typeface::Regular, 3, 3, 136);
const ORANGE: Swatch = Swatch::new(Typeface::Bold, 1, 9, 166);
const RED: Swatch = Swatch::new(Typeface::Regular, 1, 1, 160);
const MAGENTA: Swatch = Swatch::new(Typeface::Regular, 5, 5, 125);
const VIOLET: Swatch = Swatch::new(Typeface::Bold, 5, 13, 61);
const BLUE: Swatch = Swatch::new(Typeface::Regular, 4, 4, 33);
const CYAN: Swatch = Swatch::new(Typeface::Regular, 6, 6, 37);
const GREEN: Swatch = Swatch::new(Typeface::Regular, 2, 2, 64);

/// Build the Solarized palette, defined at all three color depths.
pub fn solarized() -> ThemePalette {
    let mut palette = ThemePalette::new("Solarized");
    for (face, typeface, fg, bg) in [
        (Face::Normal, Typeface::Regular, BASE0, BASE03),
        (Face::Comment, Typeface::Italic, BASE01, BASE03),
        (Face::Constant, Typeface::Regular, CYAN, BASE03),
        (Face::Identifier, Typeface::Regular, BLUE, BASE03),
        (Face::Statement, Typeface::Regular, GREEN, BASE03),
        (Face::Define, Typeface::Regular, ORANGE, BASE03),
        (Face::Type, Typeface::Regular, YELLOW, BASE03),
        (Face::Special, Typeface::Regular, RED, BASE03),
        (Face::Underlined, Typeface::Regular, VIOLET, BASE03),
        (Face::Error, Typeface::Regular, RED, BASE03),
        (Face::Attention, Typeface::Regular, MAGENTA, BASE03),
        (Face::Header, Typeface::Regular, BASE1, BASE02),
    ] {
        // At 8 colors the swatch supplies its own typeface: bright variants
        // are only reachable through the bold attribute there.
        palette = palette
            .with_face(
                face,
                ColorDepth::Ansi8,
                FaceStyle::new(fg.typeface8, fg.index8, bg.index8),
            )
            .with_face(
                face,
                ColorDepth::Ansi16,
                FaceStyle::new(typeface, fg.index16, bg.index16),
            )
            .with_face(
                face,
                ColorDepth::Ansi256,
                FaceStyle::new(typeface, fg.index256, bg.index256),
            );
    }
    palette
}
