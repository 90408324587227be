use thiserror::Error;

/// Unified result type for the flowterm crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors surfaced by the theme and layout engine.
///
/// All failures are raised synchronously at the point of violation. Nothing
/// in the crate retries or rolls back; bytes already forwarded to the device
/// stay written, consistent with forward-only rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("face `{0}` is not defined by the theme")]
    UnknownFace(String),
    #[error("face `{face}` has no definition for {depth} colors")]
    UnsupportedDepth { face: String, depth: u16 },
    #[error("property `{0}` is not defined by the theme")]
    UnknownProperty(String),
    #[error("control `{0}` is not defined by the theme")]
    UnknownControl(String),
    #[error("placeholder `{0}` has no binding")]
    UnresolvedToken(String),
    #[error("section title `{title}` does not fit in {width} columns")]
    TitleTooWide { title: String, width: usize },
    #[error("need {needed} columns but only {available} available")]
    WidthTooNarrow { needed: usize, available: usize },
    #[error("row has {cells} cells but {widths} column widths were supplied")]
    ColumnCountMismatch { cells: usize, widths: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
