//! Zenburn palette.
//!
//! Based on Zenburn by Jani Nurminen, a low-contrast color scheme designed
//! to be easy on the eyes. Only defined for 256-color terminals; resolving
//! it at a lower depth fails closed.

use crate::face::{ColorDepth, Face, Typeface};
use crate::theme::{FaceStyle, ThemePalette};

/// Build the Zenburn palette.
pub fn zenburn() -> ThemePalette {
    let mut palette = ThemePalette::new("Zenburn");
    for (face, typeface, fg, bg) in [
        (Face::Normal, Typeface::Regular, 188, 237),
        (Face::Comment, Typeface::Regular, 108, 237),
        (Face::Constant, Typeface::Bold, 181, 237),
        (Face::Identifier, Typeface::Regular, 223, 237),
        (Face::Statement, Typeface::Regular, 187, 234),
        (Face::Define, Typeface::Bold, 223, 237),
        (Face::Type, Typeface::Bold, 187, 237),
        (Face::Special, Typeface::Regular, 181, 237),
        (Face::Underlined, Typeface::Bold, 188, 234),
        (Face::Error, Typeface::Bold, 115, 236),
        (Face::Attention, Typeface::Bold, 108, 234),
        (Face::Header, Typeface::Regular, 108, 235),
    ] {
        palette = palette.with_face(
            face,
            ColorDepth::Ansi256,
            FaceStyle::new(typeface, fg, bg),
        );
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::theme::Theme;

    #[test]
    fn resolves_at_256_colors() {
        let theme = Theme::resolve(&zenburn(), ColorDepth::Ansi256).unwrap();
        for face in Face::ALL {
            assert!(theme.face_fragment(face).is_ok());
        }
    }

    #[test]
    fn fails_closed_below_256_colors() {
        for depth in [ColorDepth::Ansi8, ColorDepth::Ansi16] {
            let err = Theme::resolve(&zenburn(), depth).unwrap_err();
            assert!(matches!(err, RenderError::UnsupportedDepth { .. }));
        }
    }
}
