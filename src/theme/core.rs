use std::collections::HashMap;

use crate::error::{RenderError, Result};
use crate::face::{ColorDepth, Face, Typeface};
use crate::template::{self, Bindings};
use crate::width::{strip_csi, tabbed_width};

/// Default tab-stop policy applied when measuring formatted text.
pub const TAB_WIDTH: usize = 8;

const SGR_RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

/// Concrete style record bound to a face at one color depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceStyle {
    pub typeface: Typeface,
    pub foreground: u8,
    pub background: u8,
}

impl FaceStyle {
    pub const fn new(typeface: Typeface, foreground: u8, background: u8) -> Self {
        Self {
            typeface,
            foreground,
            background,
        }
    }

    /// Render the style as an SGR escape sequence for the given depth.
    ///
    /// Terminals with 16 colors or more take indexed `38;5;n` / `48;5;n`
    /// parameters; 8-color terminals only understand the classic 30-37 and
    /// 40-47 ranges, so the fallback path must use those.
    pub fn sgr(&self, depth: ColorDepth) -> String {
        let code = self.typeface.code();
        if depth.supports_indexed() {
            format!(
                "\x1b[{};38;5;{};48;5;{}m",
                code, self.foreground, self.background
            )
        } else {
            format!(
                "\x1b[{};{};{}m",
                code,
                30 + self.foreground,
                40 + self.background
            )
        }
    }
}

/// Declarative theme definition: faces mapped to per-depth style records,
/// plus named properties and controls as raw escape strings.
///
/// A palette is configuration data. It is assembled once with the builder
/// methods and never mutated afterwards; rendering goes through [`Theme`],
/// which resolves the palette for one fixed depth.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    name: String,
    faces: HashMap<Face, HashMap<ColorDepth, FaceStyle>>,
    properties: HashMap<String, String>,
    controls: HashMap<String, String>,
}

impl ThemePalette {
    pub fn new(name: impl Into<String>) -> Self {
        let mut properties = HashMap::new();
        for typeface in [
            Typeface::Regular,
            Typeface::Bold,
            Typeface::Italic,
            Typeface::Underline,
        ] {
            properties.insert(
                typeface.name().to_string(),
                format!("\x1b[{}m", typeface.code()),
            );
        }
        properties.insert("normal".to_string(), SGR_RESET.to_string());

        let mut controls = HashMap::new();
        controls.insert("clear-screen".to_string(), CLEAR_SCREEN.to_string());

        Self {
            name: name.into(),
            faces: HashMap::new(),
            properties,
            controls,
        }
    }

    pub fn with_face(mut self, face: Face, depth: ColorDepth, style: FaceStyle) -> Self {
        self.faces.entry(face).or_default().insert(depth, style);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.properties.insert(name.into(), sequence.into());
        self
    }

    pub fn with_control(mut self, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.controls.insert(name.into(), sequence.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faces this palette declares, in no particular order.
    pub fn declared_faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.faces.keys().copied()
    }

    /// Resolve the style record for a face at a depth.
    pub fn style(&self, face: Face, depth: ColorDepth) -> Result<FaceStyle> {
        let variants = self
            .faces
            .get(&face)
            .ok_or_else(|| RenderError::UnknownFace(face.name().to_string()))?;
        variants
            .get(&depth)
            .copied()
            .ok_or_else(|| RenderError::UnsupportedDepth {
                face: face.name().to_string(),
                depth: depth.colors(),
            })
    }

    pub fn property(&self, name: &str) -> Result<&str> {
        self.properties
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownProperty(name.to_string()))
    }

    pub fn control(&self, name: &str) -> Result<&str> {
        self.controls
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownControl(name.to_string()))
    }
}

/// A palette resolved for one fixed color depth.
///
/// Every declared face is pre-rendered to its escape fragment at
/// construction time and keyed `face-<name>`, so template expansion later is
/// a pure lookup with no resolution failures left to happen downstream.
/// Resolution fails closed: a declared face without a variant at the target
/// depth aborts construction instead of defaulting.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    depth: ColorDepth,
    bindings: Bindings,
    properties: HashMap<String, String>,
    controls: HashMap<String, String>,
}

impl Theme {
    pub fn resolve(palette: &ThemePalette, depth: ColorDepth) -> Result<Self> {
        let mut bindings = Bindings::new();
        for face in palette.declared_faces() {
            let style = palette.style(face, depth)?;
            bindings.insert(face.key(), style.sgr(depth));
        }

        Ok(Self {
            name: palette.name().to_string(),
            depth,
            bindings,
            properties: palette.properties.clone(),
            controls: palette.controls.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Pre-rendered escape fragment for a face.
    pub fn face_fragment(&self, face: Face) -> Result<&str> {
        self.bindings
            .get(&face.key())
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownFace(face.name().to_string()))
    }

    pub fn property(&self, name: &str) -> Result<&str> {
        self.properties
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownProperty(name.to_string()))
    }

    pub fn control(&self, name: &str) -> Result<&str> {
        self.controls
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownControl(name.to_string()))
    }

    /// Expand placeholders and return the still-escaped string for
    /// transmission. If the text ends in a newline the style is forced back
    /// to `normal` before it, so trailing style never bleeds into the next
    /// line.
    pub fn write(&self, text: &str, extra: Option<&Bindings>) -> Result<String> {
        let mut expanded = template::expand(text, &self.bindings, extra)?;
        if expanded.ends_with('\n') {
            expanded.truncate(expanded.len() - 1);
            expanded.push_str(self.property("normal")?);
            expanded.push('\n');
        }
        Ok(expanded)
    }

    /// Number of visible cells the text occupies once written.
    ///
    /// Runs the same expansion as [`Theme::write`], strips the escape
    /// sequences back out and measures what remains, expanding tabs to the
    /// terminal tab-stop policy. Stripping must not swallow the tabs
    /// themselves, so it only removes CSI sequences.
    pub fn len(&self, text: &str, extra: Option<&Bindings>) -> Result<usize> {
        let formatted = self.write(text, extra)?;
        Ok(tabbed_width(&strip_csi(&formatted), TAB_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ThemePalette {
        ThemePalette::new("test")
            .with_face(
                Face::Normal,
                ColorDepth::Ansi8,
                FaceStyle::new(Typeface::Regular, 7, 0),
            )
            .with_face(
                Face::Normal,
                ColorDepth::Ansi256,
                FaceStyle::new(Typeface::Regular, 244, 234),
            )
            .with_face(
                Face::Header,
                ColorDepth::Ansi8,
                FaceStyle::new(Typeface::Bold, 6, 0),
            )
            .with_face(
                Face::Header,
                ColorDepth::Ansi256,
                FaceStyle::new(Typeface::Regular, 245, 235),
            )
    }

    #[test]
    fn sgr_uses_indexed_parameters_above_eight_colors() {
        let style = FaceStyle::new(Typeface::Bold, 245, 235);
        assert_eq!(style.sgr(ColorDepth::Ansi256), "\x1b[1;38;5;245;48;5;235m");
        assert_eq!(style.sgr(ColorDepth::Ansi16), "\x1b[1;38;5;245;48;5;235m");
    }

    #[test]
    fn sgr_falls_back_to_classic_ranges_at_eight_colors() {
        let style = FaceStyle::new(Typeface::Regular, 1, 0);
        assert_eq!(style.sgr(ColorDepth::Ansi8), "\x1b[0;31;40m");
    }

    #[test]
    fn resolve_binds_every_declared_face() {
        let theme = Theme::resolve(&palette(), ColorDepth::Ansi8).unwrap();
        assert_eq!(theme.face_fragment(Face::Header).unwrap(), "\x1b[1;36;40m");
        assert!(matches!(
            theme.face_fragment(Face::Comment),
            Err(RenderError::UnknownFace(_))
        ));
    }

    #[test]
    fn resolve_fails_closed_on_missing_depth() {
        let err = Theme::resolve(&palette(), ColorDepth::Ansi16).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedDepth { depth: 16, .. }));
    }

    #[test]
    fn unknown_names_are_errors() {
        let pal = palette();
        assert!(matches!(
            pal.property("blink"),
            Err(RenderError::UnknownProperty(_))
        ));
        assert!(matches!(
            pal.control("ring-bell"),
            Err(RenderError::UnknownControl(_))
        ));
    }

    #[test]
    fn write_resets_style_before_trailing_newline() {
        let theme = Theme::resolve(&palette(), ColorDepth::Ansi8).unwrap();
        let out = theme.write("%(face-header)shi\n", None).unwrap();
        assert_eq!(out, "\x1b[1;36;40mhi\x1b[0m\n");
    }

    #[test]
    fn len_counts_visible_cells_only() {
        let theme = Theme::resolve(&palette(), ColorDepth::Ansi256).unwrap();
        assert_eq!(theme.len("%(face-normal)shello\n", None).unwrap(), 5);
        assert_eq!(theme.len("\tx", None).unwrap(), 9);
    }

    #[test]
    fn len_expands_tabs_after_styled_text() {
        let theme = Theme::resolve(&palette(), ColorDepth::Ansi8).unwrap();
        assert_eq!(theme.len("%(face-header)sa\tb", None).unwrap(), 9);
    }

    #[test]
    fn len_matches_stripped_write_output() {
        let theme = Theme::resolve(&palette(), ColorDepth::Ansi256).unwrap();
        let text = "%(face-header)s[header]%(face-normal)s body";
        let written = theme.write(text, None).unwrap();
        let stripped = strip_ansi_escapes::strip(&written);
        assert_eq!(
            theme.len(text, None).unwrap(),
            String::from_utf8(stripped).unwrap().chars().count()
        );
    }

    #[test]
    fn face_fragments_have_zero_visible_width() {
        for depth in [ColorDepth::Ansi8, ColorDepth::Ansi256] {
            let theme = Theme::resolve(&palette(), depth).unwrap();
            assert_eq!(theme.len("%(face-normal)s%(face-header)s", None).unwrap(), 0);
        }
    }
}
