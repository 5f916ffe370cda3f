//! # Typeable Text
//!
//! An editable, multi-line vector text field for 3D scenes.
//!
//! ## Features
//!
//! - **Typeface Loading**: JSON typeface files with quadratic and cubic outlines
//! - **Glyph Layout**: Per-glyph outlines and boxes on a +Y-up local plane
//! - **Caret Engine**: Gap indices, keyboard movement and a blinking caret
//! - **Hit Testing**: Pointer positions resolved to caret gaps
//! - **Scene Sync**: A backend trait that keeps scene nodes matched to the field
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use typeable_text::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let font = Arc::new(FontData::load("resources/fonts/demo.typeface.json")?);
//!     let config = TextFieldConfig::load_from_file("text_field.toml")?;
//!     let mut field = TextField::new(font, config)?;
//!
//!     field.handle_pointer_down(Point2::new(1.0, 1.0));
//!     field.handle_key(Key::Character('x'));
//!     field.tick(0.5);
//!
//!     println!("{} glyphs, caret at gap {}", field.glyphs().len(), field.caret_index());
//!     Ok(())
//! }
//! ```

pub mod foundation;
pub mod config;
pub mod font;
pub mod text;
pub mod caret;
pub mod input;
pub mod scene;

mod field;

pub use field::{TextField, TextFieldError};

/// Common imports for text field users
pub mod prelude {
    pub use crate::{
        TextField, TextFieldError,
        config::{Config, HorizontalAlign, TextFieldConfig},
        font::{FontData, GlyphDef, PathCommand, VerticalMetrics},
        foundation::math::{Point2, Rect, Vec2},
        input::{EditAction, Key},
        scene::{SceneBackend, TextFieldScene},
        text::{LayoutResult, PositionedGlyph},
    };
}
