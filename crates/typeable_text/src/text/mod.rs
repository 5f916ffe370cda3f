//! Vector text layout
//!
//! - [`GlyphResolver`]: looks up one character and returns its outline placed
//!   at the pen position
//! - [`TextLayout`]: walks a whole string and produces a [`LayoutResult`]
//!
//! Layout is always a full recomputation from the string. Results are plain
//! data snapshots; renderers read them and never mutate them.

mod layout;
mod resolver;

pub use layout::{is_line_break, layout, LayoutResult, PositionedGlyph, TextLayout};
pub use resolver::{resolve_glyph, GlyphResolver, ResolvedGlyph, DEFAULT_FALLBACK_GLYPH};

/// Result type for text operations
pub type TextResult<T> = Result<T, TextError>;

/// Errors reported by layout and text input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextError {
    /// Text or layout parameters are malformed; nothing was laid out
    #[error("Invalid text input: {0}")]
    InvalidInput(String),

    /// Neither the character nor the fallback glyph exists in the font
    #[error("Character '{character}' and fallback '{fallback}' are missing from font '{family}'")]
    GlyphResolution {
        /// Requested character
        character: char,
        /// Fallback that was tried afterwards
        fallback: char,
        /// Font family searched
        family: String,
    },
}
