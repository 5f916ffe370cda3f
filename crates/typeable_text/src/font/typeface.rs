//! Typeface JSON font data
//!
//! A typeface file stores every glyph as an advance width (`ha`) plus a
//! compact outline string (`o`), with font-wide metrics alongside:
//!
//! ```json
//! {
//!   "familyName": "Demo Sans",
//!   "resolution": 1000,
//!   "underlineThickness": 50,
//!   "boundingBox": { "yMin": -200, "yMax": 800 },
//!   "glyphs": { "a": { "ha": 600, "o": "m 0 0 l 500 0 l 500 500 l 0 500" } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::{parse_outline, FontError, FontResult, PathCommand};

/// Vertical, font-wide metrics in font units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    /// Font units per em
    pub resolution: f32,
    /// Lowest point of any glyph
    pub bounding_box_y_min: f32,
    /// Highest point of any glyph
    pub bounding_box_y_max: f32,
    /// Thickness of the underline stroke
    pub underline_thickness: f32,
}

impl VerticalMetrics {
    /// Line height in font units: bounding box height plus underline thickness
    pub fn line_height_units(&self) -> f32 {
        self.bounding_box_y_max - self.bounding_box_y_min + self.underline_thickness
    }

    fn validate(&self) -> FontResult<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(FontError::InvalidMetrics(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }

        let values = [
            self.bounding_box_y_min,
            self.bounding_box_y_max,
            self.underline_thickness,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(FontError::InvalidMetrics(
                "bounding box and underline thickness must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// A single glyph: outline in font units plus advance width
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDef {
    /// Outline commands in font units, relative to the glyph origin
    pub outline: Vec<PathCommand>,
    /// Horizontal pen advance in font units
    pub advance_width: f32,
}

impl GlyphDef {
    /// Create a glyph from already parsed outline commands
    pub fn new(advance_width: f32, outline: Vec<PathCommand>) -> Self {
        Self {
            outline,
            advance_width,
        }
    }

    /// Create a glyph without an outline (e.g. space)
    pub fn blank(advance_width: f32) -> Self {
        Self::new(advance_width, Vec::new())
    }
}

/// Read-only font data: glyph lookup and vertical metrics
#[derive(Debug, Clone)]
pub struct FontData {
    family_name: String,
    metrics: VerticalMetrics,
    glyphs: HashMap<char, GlyphDef>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeface {
    #[serde(default)]
    family_name: String,
    resolution: f32,
    #[serde(default)]
    underline_thickness: f32,
    bounding_box: RawBoundingBox,
    glyphs: HashMap<String, RawGlyph>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBoundingBox {
    y_min: f32,
    y_max: f32,
}

#[derive(Deserialize)]
struct RawGlyph {
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

impl FontData {
    /// Create an empty font with the given metrics
    pub fn new(family_name: impl Into<String>, metrics: VerticalMetrics) -> FontResult<Self> {
        metrics.validate()?;
        Ok(Self {
            family_name: family_name.into(),
            metrics,
            glyphs: HashMap::new(),
        })
    }

    /// Add or replace a glyph
    pub fn with_glyph(mut self, character: char, glyph: GlyphDef) -> Self {
        self.glyphs.insert(character, glyph);
        self
    }

    /// Parse typeface JSON text
    ///
    /// Glyph keys that are not exactly one character are skipped with a warning.
    pub fn from_json(json: &str) -> FontResult<Self> {
        let raw: RawTypeface = serde_json::from_str(json)?;

        let metrics = VerticalMetrics {
            resolution: raw.resolution,
            bounding_box_y_min: raw.bounding_box.y_min,
            bounding_box_y_max: raw.bounding_box.y_max,
            underline_thickness: raw.underline_thickness,
        };
        let mut font = Self::new(raw.family_name, metrics)?;

        for (key, glyph) in raw.glyphs {
            let mut chars = key.chars();
            let (Some(character), None) = (chars.next(), chars.next()) else {
                log::warn!("Skipping typeface glyph with multi-character key {key:?}");
                continue;
            };

            let outline = match glyph.o.as_deref() {
                Some(o) => parse_outline(character, o)?,
                None => Vec::new(),
            };
            font.glyphs.insert(character, GlyphDef::new(glyph.ha, outline));
        }

        log::info!(
            "Loaded typeface '{}': {} glyphs at resolution {}",
            font.family_name,
            font.glyphs.len(),
            font.metrics.resolution
        );
        Ok(font)
    }

    /// Load a typeface JSON file
    pub fn load(path: impl AsRef<Path>) -> FontResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Look up a glyph by character
    pub fn glyph(&self, character: char) -> Option<&GlyphDef> {
        self.glyphs.get(&character)
    }

    /// Font-wide vertical metrics
    pub fn metrics(&self) -> &VerticalMetrics {
        &self.metrics
    }

    /// Family name, empty if the file did not provide one
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Number of glyphs in the font
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
