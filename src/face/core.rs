use std::fmt;

use crate::error::{RenderError, Result};

/// Symbolic semantic style identifier, independent of any concrete color.
///
/// Themes bind each face to per-depth style records; widgets reference faces
/// through `%(face-<name>)s` placeholders in their templates. The set is
/// closed so a theme can be validated eagerly at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Normal,
    Comment,
    /// String, char, number and other constants.
    Constant,
    /// Variable or function names.
    Identifier,
    /// Statements (if, else, for and friends).
    Statement,
    /// Definitions, e.g. `#define X`.
    Define,
    /// Types (integer, static, struct and friends).
    Type,
    /// Special symbols or characters.
    Special,
    /// Text that stands out, e.g. links.
    Underlined,
    Error,
    /// Anything that needs extra attention.
    Attention,
    /// Section headers and similar.
    Header,
}

impl Face {
    pub const ALL: [Face; 12] = [
        Face::Normal,
        Face::Comment,
        Face::Constant,
        Face::Identifier,
        Face::Statement,
        Face::Define,
        Face::Type,
        Face::Special,
        Face::Underlined,
        Face::Error,
        Face::Attention,
        Face::Header,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Face::Normal => "normal",
            Face::Comment => "comment",
            Face::Constant => "constant",
            Face::Identifier => "identifier",
            Face::Statement => "statement",
            Face::Define => "define",
            Face::Type => "type",
            Face::Special => "special",
            Face::Underlined => "underlined",
            Face::Error => "error",
            Face::Attention => "attention",
            Face::Header => "header",
        }
    }

    /// Binding key used in placeholder templates, e.g. `face-header`.
    pub fn key(&self) -> String {
        format!("face-{}", self.name())
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typeface modifier, orthogonal to [`Face`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typeface {
    Regular,
    Bold,
    Italic,
    Underline,
}

impl Typeface {
    /// Numeric SGR attribute code for this typeface.
    pub fn code(&self) -> u8 {
        match self {
            Typeface::Regular => 0,
            Typeface::Bold => 1,
            Typeface::Italic => 2,
            Typeface::Underline => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Typeface::Regular => "regular",
            Typeface::Bold => "bold",
            Typeface::Italic => "italic",
            Typeface::Underline => "underline",
        }
    }
}

/// Number of distinct colors a terminal device supports.
///
/// Fixed for the lifetime of a resolved theme; it selects which style record
/// variant a theme uses for each face and which SGR form is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorDepth {
    Ansi8,
    Ansi16,
    Ansi256,
}

impl ColorDepth {
    pub fn colors(&self) -> u16 {
        match self {
            ColorDepth::Ansi8 => 8,
            ColorDepth::Ansi16 => 16,
            ColorDepth::Ansi256 => 256,
        }
    }

    /// Whether the device understands indexed 256-color escapes (`38;5;n`).
    pub fn supports_indexed(&self) -> bool {
        *self >= ColorDepth::Ansi16
    }
}

impl TryFrom<u16> for ColorDepth {
    type Error = RenderError;

    fn try_from(colors: u16) -> Result<Self> {
        match colors {
            8 => Ok(ColorDepth::Ansi8),
            16 => Ok(ColorDepth::Ansi16),
            256 => Ok(ColorDepth::Ansi256),
            other => Err(RenderError::UnsupportedDepth {
                face: "*".to_string(),
                depth: other,
            }),
        }
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.colors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_keys_are_kebab_cased() {
        assert_eq!(Face::Normal.key(), "face-normal");
        assert_eq!(Face::Header.key(), "face-header");
        assert_eq!(Face::ALL.len(), 12);
    }

    #[test]
    fn typeface_codes_match_sgr_attributes() {
        assert_eq!(Typeface::Regular.code(), 0);
        assert_eq!(Typeface::Bold.code(), 1);
        assert_eq!(Typeface::Italic.code(), 2);
        assert_eq!(Typeface::Underline.code(), 4);
    }

    #[test]
    fn depth_from_color_count() {
        assert_eq!(ColorDepth::try_from(256).unwrap(), ColorDepth::Ansi256);
        assert!(ColorDepth::try_from(24).is_err());
        assert!(ColorDepth::Ansi16.supports_indexed());
        assert!(!ColorDepth::Ansi8.supports_indexed());
    }
}
