//! Editable text field
//!
//! [`TextField`] owns the string, its current [`LayoutResult`] and the caret.
//! Every mutating call relayouts synchronously before returning, so callers
//! always observe a layout that matches the string.

use std::sync::Arc;

use crate::caret::{CaretEngine, CaretState};
use crate::config::{ConfigError, HorizontalAlign, TextFieldConfig};
use crate::font::{FontData, FontError};
use crate::foundation::math::{Point2, Rect, Vec2};
use crate::input::{EditAction, Key};
use crate::text::{is_line_break, LayoutResult, PositionedGlyph, TextError, TextLayout, TextResult};

/// Errors that can occur while creating a text field
#[derive(Debug, thiserror::Error)]
pub enum TextFieldError {
    /// Configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Font data could not be loaded
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    /// Text or layout parameters were rejected
    #[error("Text error: {0}")]
    Text(#[from] TextError),
}

/// An editable, multi-line vector text field
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use typeable_text::prelude::*;
///
/// let font = Arc::new(FontData::load("resources/fonts/demo.typeface.json")?);
/// let mut field = TextField::new(font, TextFieldConfig::default())?;
///
/// field.set_text("hello");
/// field.handle_activate(Some(Point2::new(0.0, 0.1)));
/// field.handle_key(Key::Character('!'));
/// field.tick(0.016);
///
/// for glyph in field.glyphs() {
///     let _outline = &glyph.outline; // one filled mesh per glyph
/// }
/// # Ok::<(), typeable_text::TextFieldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextField {
    engine: TextLayout,
    config: TextFieldConfig,
    text: String,
    layout: LayoutResult,
    caret: CaretEngine,
    revision: u64,
}

impl TextField {
    /// Create a field showing `config.initial_text`
    pub fn new(font: Arc<FontData>, config: TextFieldConfig) -> Result<Self, TextFieldError> {
        config.validate()?;

        let engine = TextLayout::with_fallback(font, config.font_scale, config.fallback_glyph)?;
        let text = config.initial_text.clone();
        let layout = engine.layout_text(&text);
        let mut caret = CaretEngine::new(config.blink_period);
        caret.reclamp(&layout);

        log::info!(
            "Created text field with font '{}' at scale {}",
            engine.font().family_name(),
            config.font_scale
        );

        Ok(Self {
            engine,
            config,
            text,
            layout,
            caret,
            revision: 0,
        })
    }

    // === API ===

    /// Replace the whole text
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.relayout();
    }

    /// Replace the whole text from raw bytes
    ///
    /// Bytes that are not valid UTF-8 are rejected and leave the field as it was.
    pub fn set_text_utf8(&mut self, bytes: &[u8]) -> TextResult<()> {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                self.set_text(text);
                Ok(())
            }
            Err(e) => {
                log::error!("Rejected text input: {e}");
                Err(TextError::InvalidInput(e.to_string()))
            }
        }
    }

    /// Insert a character at the caret and move past it
    ///
    /// A line break splits the line at the caret; the caret then stays in
    /// front of the glyph that moved to the new line.
    pub fn handle_insert(&mut self, character: char) {
        let index = self.caret.text_index();
        let offset = self.layout.byte_offset_of_gap(index, self.text.len());

        self.text.insert(offset, character);
        self.relayout();

        if !is_line_break(character) {
            self.caret.set_text_index(index + 1, &self.layout);
        }
        self.caret.reveal();
    }

    /// Remove the character before the caret
    ///
    /// When a line break sits right before the caret's gap it is removed and
    /// the two lines join with the caret index unchanged. Otherwise the glyph
    /// before the caret is removed and the caret steps back over it. No-op at
    /// gap 0.
    pub fn handle_delete_forward(&mut self) {
        let index = self.caret.text_index();
        if index == 0 {
            return;
        }

        let offset = self.layout.byte_offset_of_gap(index, self.text.len());
        if self.text[..offset].ends_with(is_line_break) {
            self.text.replace_range(offset - 1..offset, "");
            self.relayout();
        } else {
            self.remove_glyph_character(index - 1);
            self.caret.set_text_index(index - 1, &self.layout);
        }
        self.caret.reveal();
    }

    /// Remove the character after the caret
    ///
    /// No-op when the caret is after the last glyph.
    pub fn handle_delete_backward(&mut self) {
        let index = self.caret.text_index();
        if index >= self.layout.glyph_count() {
            return;
        }

        self.remove_glyph_character(index);
        self.caret.reveal();
    }

    /// Move the caret by `delta` gaps
    pub fn handle_move_caret(&mut self, delta: isize) {
        self.caret.move_by(delta, &self.layout);
    }

    /// Enter edit mode at a field-local point, or leave it with `None`
    pub fn handle_activate(&mut self, point: Option<Point2>) {
        self.caret.set_active(point, &self.layout);
        log::debug!(
            "Text field {} (caret at gap {})",
            if self.caret.is_active() { "activated" } else { "deactivated" },
            self.caret.text_index()
        );
    }

    /// Pointer press at a field-local point
    ///
    /// Presses inside [`hit_area`](Self::hit_area) enter edit mode, presses
    /// anywhere else leave it.
    pub fn handle_pointer_down(&mut self, point: Point2) {
        let hit = self.hit_area().contains(point);
        self.handle_activate(hit.then_some(point));
    }

    /// Decode and apply a key press
    pub fn handle_key(&mut self, key: Key) {
        if let Some(action) = key.to_action() {
            self.apply(action);
        }
    }

    /// Apply a decoded edit action
    pub fn apply(&mut self, action: EditAction) {
        match action {
            EditAction::Insert(character) => self.handle_insert(character),
            EditAction::DeleteForward => self.handle_delete_forward(),
            EditAction::DeleteBackward => self.handle_delete_backward(),
            EditAction::MoveCaret(delta) => self.handle_move_caret(delta),
            EditAction::Activate(point) => self.handle_activate(point),
        }
    }

    /// Advance the caret blink to `elapsed_seconds` on the host clock
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.caret.tick(elapsed_seconds);
    }

    /// Change the horizontal alignment
    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.config.align = align;
    }

    // === Queries ===

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current layout snapshot
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Glyphs to render, in string order
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        self.layout.glyphs()
    }

    /// Number of successful relayouts since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Caret state snapshot
    pub fn caret(&self) -> CaretState {
        self.caret.state()
    }

    /// Caret gap index
    pub fn caret_index(&self) -> usize {
        self.caret.text_index()
    }

    /// Whether the caret should be drawn this frame
    pub fn caret_visible(&self) -> bool {
        self.caret.is_visible()
    }

    /// Whether the field is in edit mode
    pub fn is_active(&self) -> bool {
        self.caret.is_active()
    }

    /// Field-local caret anchor (bottom of the caret bar)
    pub fn caret_position(&self) -> Point2 {
        self.caret.screen_position(&self.layout)
    }

    /// Field-local caret bar rectangle, horizontally centered on the anchor
    pub fn caret_rect(&self) -> Rect {
        let style = self.config.caret;
        let height = self.layout.line_height() * style.height_ratio;
        let width = height * style.width_ratio;
        let anchor = self.caret_position();

        Rect::from_origin_size(
            Point2::new(anchor.x - width * 0.5, anchor.y),
            Vec2::new(width, height),
        )
    }

    /// Width of the widest line
    pub fn max_line_width(&self) -> f32 {
        self.layout.max_line_width()
    }

    /// Height of all lines
    pub fn total_height(&self) -> f32 {
        self.layout.total_height()
    }

    /// Height of one line
    pub fn line_height(&self) -> f32 {
        self.layout.line_height()
    }

    /// Field-local rectangle used as click target and background
    pub fn hit_area(&self) -> Rect {
        self.layout.bounds()
    }

    /// Horizontal shift applied to the whole rendered group
    pub fn alignment_offset(&self) -> f32 {
        self.config.align.offset(self.layout.max_line_width())
    }

    /// Convert a point in the group's parent space into field-local space
    pub fn to_field_local(&self, point: Point2) -> Point2 {
        point - Vec2::new(self.alignment_offset(), 0.0)
    }

    /// Active configuration
    pub fn config(&self) -> &TextFieldConfig {
        &self.config
    }

    // === Internals ===

    fn relayout(&mut self) {
        self.layout = self.engine.layout_text(&self.text);
        self.caret.reclamp(&self.layout);
        self.revision += 1;
    }

    fn remove_glyph_character(&mut self, glyph_index: usize) {
        let Some(glyph) = self.layout.glyphs().get(glyph_index) else {
            return;
        };
        let start = glyph.byte_offset;
        let end = start + glyph.character.len_utf8();

        self.text.replace_range(start..end, "");
        self.relayout();
    }
}
