//! Text field settings

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Horizontal alignment of the rendered text group
///
/// Alignment never changes the layout itself; it only shifts the whole group
/// along X by a constant derived from the widest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Group starts at the field origin
    Left,
    /// Group is centered on the field origin
    #[default]
    Center,
    /// Group ends at the field origin
    Right,
}

impl HorizontalAlign {
    /// Horizontal shift applied to the rendered group for a given line width
    pub fn offset(self, max_line_width: f32) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Center => -max_line_width * 0.5,
            Self::Right => -max_line_width,
        }
    }
}

/// Caret bar proportions, relative to the line height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaretStyle {
    /// Bar height as a fraction of the line height
    pub height_ratio: f32,
    /// Bar width as a fraction of the bar height
    pub width_ratio: f32,
}

impl Default for CaretStyle {
    fn default() -> Self {
        Self {
            height_ratio: 0.75,
            width_ratio: 0.1,
        }
    }
}

/// # Text Field Configuration
///
/// Everything a host can tune about an editable text field without touching
/// font data: scale, alignment, caret blink timing and caret proportions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldConfig {
    /// Font size in scene units; glyph units are divided by the font resolution
    pub font_scale: f32,
    /// Horizontal alignment of the whole group
    pub align: HorizontalAlign,
    /// Seconds between caret visibility toggles while editing
    pub blink_period: f32,
    /// Glyph used when the font lacks a character
    pub fallback_glyph: char,
    /// Text shown when the field is created
    pub initial_text: String,
    /// Caret bar proportions
    pub caret: CaretStyle,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            align: HorizontalAlign::Center,
            blink_period: 0.5,
            fallback_glyph: '?',
            initial_text: String::new(),
            caret: CaretStyle::default(),
        }
    }
}

impl TextFieldConfig {
    /// Set the font scale
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.font_scale = font_scale;
        self
    }

    /// Set the horizontal alignment
    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the caret blink period in seconds
    pub fn with_blink_period(mut self, seconds: f32) -> Self {
        self.blink_period = seconds;
        self
    }

    /// Set the text shown on creation
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "font_scale must be a positive number, got {}",
                self.font_scale
            )));
        }

        if !self.blink_period.is_finite() || self.blink_period <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "blink_period must be a positive number of seconds, got {}",
                self.blink_period
            )));
        }

        let caret_ratios = [self.caret.height_ratio, self.caret.width_ratio];
        if caret_ratios.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(ConfigError::Invalid(
                "caret ratios must be positive numbers".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config for TextFieldConfig {}
