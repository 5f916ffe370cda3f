//! Text layout engine
//!
//! Converts strings into positioned glyph records for rendering, caret
//! placement and hit testing.
//!
//! # Layout Coordinate System
//!
//! - The pen starts at (0, 0) for the first line
//! - +X axis points right
//! - +Y axis points up; each line break moves the pen down by one line height
//! - A glyph's box spans `[origin.x, origin.x + advance] × [origin.y, origin.y + line_height]`

use std::sync::Arc;

use crate::font::{FontData, PathCommand};
use crate::foundation::math::{Point2, Rect, Vec2};

use super::{GlyphResolver, TextError, TextResult, DEFAULT_FALLBACK_GLYPH};

/// Whether a character ends the current line
///
/// Line breaks are layout-only: they move the pen but never produce a glyph.
pub fn is_line_break(character: char) -> bool {
    character == '\n'
}

/// One laid-out glyph
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGlyph {
    /// Source character
    pub character: char,
    /// Pen position when the glyph was placed
    pub origin: Point2,
    /// Horizontal space the glyph occupies
    pub advance_width: f32,
    /// Height of the line this glyph belongs to
    pub line_height: f32,
    /// Absolute outline, for rendering only
    pub outline: Vec<PathCommand>,
    /// Zero-based line number
    pub line: usize,
    /// Byte offset of `character` in the laid-out string
    pub byte_offset: usize,
}

impl PositionedGlyph {
    /// Hit-test box of the glyph
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, Vec2::new(self.advance_width, self.line_height))
    }

    /// Whether the glyph has visible geometry
    pub fn has_outline(&self) -> bool {
        !self.outline.is_empty()
    }
}

/// Result of laying out one string
///
/// Glyphs are stored in string order. Index `i` is the `i`-th character of the
/// string that is not a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    glyphs: Vec<PositionedGlyph>,
    max_line_width: f32,
    total_height: f32,
    line_height: f32,
    line_count: usize,
    unresolved: Vec<char>,
}

impl LayoutResult {
    /// Glyphs in string order
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Number of glyphs
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// True when no glyph was produced
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Width of the widest line
    pub fn max_line_width(&self) -> f32 {
        self.max_line_width
    }

    /// Height of all lines together
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Height of one line
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Number of lines, at least one
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Characters that had neither their own glyph nor the fallback
    ///
    /// Each of them still occupies a zero-width slot in [`glyphs`](Self::glyphs).
    pub fn unresolved(&self) -> &[char] {
        &self.unresolved
    }

    /// Rectangle covering every line box
    ///
    /// X spans `[0, max_line_width]`; Y spans from the bottom of the last line
    /// up to the top of the first.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(
            Point2::new(0.0, self.line_height - self.total_height),
            Point2::new(self.max_line_width, self.line_height),
        )
    }

    /// Map a point to a caret gap index
    ///
    /// Glyph boxes are scanned in order and the first containing box wins. The
    /// left half of a box selects the gap before the glyph, the right half the
    /// gap after it. Returns `None` when no box contains the point.
    pub fn hit_test(&self, point: Point2) -> Option<usize> {
        self.glyphs.iter().enumerate().find_map(|(index, glyph)| {
            let inside_vertically =
                point.y >= glyph.origin.y && point.y <= glyph.origin.y + glyph.line_height;
            let left = glyph.origin.x;
            let mid = glyph.origin.x + glyph.advance_width * 0.5;
            let right = glyph.origin.x + glyph.advance_width;

            if !inside_vertically || point.x < left || point.x > right {
                None
            } else if point.x <= mid {
                Some(index)
            } else {
                Some(index + 1)
            }
        })
    }

    /// Screen position of the caret standing in gap `index`
    ///
    /// Gap 0 is the field origin, the final gap sits just past the last glyph,
    /// every other gap is the origin of the glyph that follows it.
    pub fn caret_position(&self, index: usize) -> Point2 {
        if index == 0 {
            return Point2::origin();
        }

        match (self.glyphs.get(index), self.glyphs.last()) {
            (Some(glyph), _) => glyph.origin,
            (None, Some(last)) => Point2::new(last.origin.x + last.advance_width, last.origin.y),
            (None, None) => Point2::origin(),
        }
    }

    /// Byte offset in the source string that corresponds to gap `index`
    ///
    /// `text_len` is returned for the final gap (and anything beyond it).
    pub fn byte_offset_of_gap(&self, index: usize, text_len: usize) -> usize {
        self.glyphs
            .get(index)
            .map_or(text_len, |glyph| glyph.byte_offset)
    }
}

/// Text layout engine bound to one font and scale
///
/// The scale is validated once on construction, so laying out a string can no
/// longer fail afterwards.
#[derive(Debug, Clone)]
pub struct TextLayout {
    font: Arc<FontData>,
    font_scale: f32,
    fallback: char,
}

impl TextLayout {
    /// Create a layout engine using the default fallback glyph
    pub fn new(font: Arc<FontData>, font_scale: f32) -> TextResult<Self> {
        Self::with_fallback(font, font_scale, DEFAULT_FALLBACK_GLYPH)
    }

    /// Create a layout engine with a custom fallback glyph
    pub fn with_fallback(font: Arc<FontData>, font_scale: f32, fallback: char) -> TextResult<Self> {
        validate_font_scale(font_scale)?;

        Ok(Self {
            font,
            font_scale,
            fallback,
        })
    }

    /// Font used for glyph lookup
    pub fn font(&self) -> &Arc<FontData> {
        &self.font
    }

    /// Font size in layout units
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Height of one line in layout units
    pub fn line_height(&self) -> f32 {
        let metrics = self.font.metrics();
        metrics.line_height_units() * (self.font_scale / metrics.resolution)
    }

    /// Lay out a string
    ///
    /// Single pass, O(n) in the number of characters. Characters missing from
    /// the font (with no fallback) keep a zero-width placeholder so glyph
    /// indices stay aligned with the string.
    pub fn layout_text(&self, text: &str) -> LayoutResult {
        lay_out(
            GlyphResolver::with_fallback(&self.font, self.fallback),
            self.font_scale,
            text,
        )
    }
}

fn validate_font_scale(font_scale: f32) -> TextResult<()> {
    if font_scale.is_finite() && font_scale > 0.0 {
        Ok(())
    } else {
        Err(TextError::InvalidInput(format!(
            "font scale must be a positive number, got {font_scale}"
        )))
    }
}

fn lay_out(resolver: GlyphResolver<'_>, font_scale: f32, text: &str) -> LayoutResult {
    let metrics = resolver.font().metrics();
    let scale = font_scale / metrics.resolution;
    let line_height = metrics.line_height_units() * scale;

    let mut glyphs = Vec::with_capacity(text.len());
    let mut unresolved = Vec::new();
    let mut pen = Point2::origin();
    let mut max_line_width = 0.0f32;
    let mut line = 0;

    for (byte_offset, character) in text.char_indices() {
        if is_line_break(character) {
            pen.x = 0.0;
            pen.y -= line_height;
            line += 1;
            continue;
        }

        let (advance_width, outline) = match resolver.resolve(character, scale, pen) {
            Ok(resolved) => (resolved.advance_width, resolved.outline),
            Err(e) => {
                log::warn!("{e}; keeping an empty placeholder");
                unresolved.push(character);
                (0.0, Vec::new())
            }
        };

        glyphs.push(PositionedGlyph {
            character,
            origin: pen,
            advance_width,
            line_height,
            outline,
            line,
            byte_offset,
        });

        pen.x += advance_width;
        max_line_width = max_line_width.max(pen.x);
    }

    let total_height = -pen.y + line_height;

    log::debug!(
        "Laid out {} glyphs on {} lines ({:.3} x {:.3})",
        glyphs.len(),
        line + 1,
        max_line_width,
        total_height
    );

    LayoutResult {
        glyphs,
        max_line_width,
        total_height,
        line_height,
        line_count: line + 1,
        unresolved,
    }
}

/// Lay out `text` with `font` at `font_scale`, using the default fallback glyph
pub fn layout(text: &str, font: &FontData, font_scale: f32) -> TextResult<LayoutResult> {
    validate_font_scale(font_scale)?;
    Ok(lay_out(GlyphResolver::new(font), font_scale, text))
}
