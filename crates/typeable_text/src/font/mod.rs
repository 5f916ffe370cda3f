//! Font data for vector text
//!
//! Fonts are read-only lookups: glyph-by-character, each glyph exposing an
//! outline command list and an advance width, plus font-wide vertical metrics.
//! They are usually loaded from typeface JSON files (the format produced by
//! facetype-style converters) but can also be assembled in code.

mod outline;
mod typeface;

pub use outline::{parse_outline, PathCommand};
pub use typeface::{FontData, GlyphDef, VerticalMetrics};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading or building font data
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read a font file
    #[error("Failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    /// Font file is not valid typeface JSON
    #[error("Failed to parse typeface JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A glyph outline string could not be parsed
    #[error("Malformed outline for glyph '{character}': {reason}")]
    MalformedOutline {
        /// Glyph whose outline is broken
        character: char,
        /// What went wrong
        reason: String,
    },

    /// Font-wide metrics cannot produce a usable layout
    #[error("Invalid font metrics: {0}")]
    InvalidMetrics(String),
}
