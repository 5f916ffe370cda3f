//! Glyph outline resolution

use crate::font::{FontData, PathCommand};
use crate::foundation::math::Point2;

use super::{TextError, TextResult};

/// Glyph used when a font lacks the requested character
pub const DEFAULT_FALLBACK_GLYPH: char = '?';

/// A glyph placed at a pen position
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGlyph {
    /// Horizontal advance in layout units
    pub advance_width: f32,
    /// Absolute outline in layout units
    pub outline: Vec<PathCommand>,
}

/// Looks up glyphs in a font, falling back to a default glyph
///
/// Resolution is pure: the font is only read and identical inputs always
/// yield identical outlines.
#[derive(Debug, Clone, Copy)]
pub struct GlyphResolver<'a> {
    font: &'a FontData,
    fallback: char,
}

impl<'a> GlyphResolver<'a> {
    /// Create a resolver using [`DEFAULT_FALLBACK_GLYPH`]
    pub fn new(font: &'a FontData) -> Self {
        Self::with_fallback(font, DEFAULT_FALLBACK_GLYPH)
    }

    /// Create a resolver with a custom fallback glyph
    pub fn with_fallback(font: &'a FontData, fallback: char) -> Self {
        Self { font, fallback }
    }

    /// Font being resolved against
    pub fn font(&self) -> &'a FontData {
        self.font
    }

    /// Resolve `character` scaled by `scale` and translated to `pen`
    ///
    /// Every outline coordinate is multiplied by `scale` and offset by the pen
    /// position, so the outline is directly renderable in layout space.
    pub fn resolve(&self, character: char, scale: f32, pen: Point2) -> TextResult<ResolvedGlyph> {
        let glyph = self
            .font
            .glyph(character)
            .or_else(|| self.font.glyph(self.fallback))
            .ok_or_else(|| TextError::GlyphResolution {
                character,
                fallback: self.fallback,
                family: self.font.family_name().to_string(),
            })?;

        let outline = glyph
            .outline
            .iter()
            .map(|command| command.transformed(scale, pen.coords))
            .collect();

        Ok(ResolvedGlyph {
            advance_width: glyph.advance_width * scale,
            outline,
        })
    }
}

/// Resolve one glyph with the default fallback
pub fn resolve_glyph(
    character: char,
    scale: f32,
    pen: Point2,
    font: &FontData,
) -> TextResult<ResolvedGlyph> {
    GlyphResolver::new(font).resolve(character, scale, pen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{GlyphDef, VerticalMetrics};
    use approx::assert_relative_eq;

    fn font() -> FontData {
        let metrics = VerticalMetrics {
            resolution: 100.0,
            bounding_box_y_min: -20.0,
            bounding_box_y_max: 80.0,
            underline_thickness: 20.0,
        };
        FontData::new("Test", metrics)
            .unwrap()
            .with_glyph(
                'a',
                GlyphDef::new(
                    50.0,
                    vec![
                        PathCommand::MoveTo(Point2::new(0.0, 0.0)),
                        PathCommand::LineTo(Point2::new(40.0, 60.0)),
                    ],
                ),
            )
            .with_glyph('?', GlyphDef::blank(30.0))
    }

    #[test]
    fn test_resolve_scales_and_translates() {
        let font = font();
        let glyph = resolve_glyph('a', 0.5, Point2::new(10.0, -12.0), &font).unwrap();

        assert_relative_eq!(glyph.advance_width, 25.0);
        assert_eq!(
            glyph.outline,
            vec![
                PathCommand::MoveTo(Point2::new(10.0, -12.0)),
                PathCommand::LineTo(Point2::new(30.0, 18.0)),
            ]
        );
    }

    #[test]
    fn test_missing_character_uses_fallback() {
        let font = font();
        let glyph = resolve_glyph('€', 1.0, Point2::origin(), &font).unwrap();

        assert_relative_eq!(glyph.advance_width, 30.0);
        assert!(glyph.outline.is_empty());
    }

    #[test]
    fn test_missing_fallback_is_an_error() {
        let font = font();
        let resolver = GlyphResolver::with_fallback(&font, '#');

        let err = resolver.resolve('z', 1.0, Point2::origin()).unwrap_err();
        assert_eq!(
            err,
            TextError::GlyphResolution {
                character: 'z',
                fallback: '#',
                family: "Test".to_string(),
            }
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let font = font();
        let resolver = GlyphResolver::new(&font);
        let pen = Point2::new(3.5, -7.25);

        assert_eq!(
            resolver.resolve('a', 0.37, pen).unwrap(),
            resolver.resolve('a', 0.37, pen).unwrap()
        );
    }
}
