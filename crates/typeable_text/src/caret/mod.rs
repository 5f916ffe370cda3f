//! Caret engine
//!
//! The caret stands in a *gap* between glyphs: gap 0 is before the first
//! glyph and gap `glyph_count` is after the last one. All operations are
//! total; out-of-range requests are clamped or ignored, never reported.
//!
//! Whenever a new [`LayoutResult`] replaces the old one the owner must call
//! [`CaretEngine::reclamp`] before using the index again.

mod blink;

pub use blink::BlinkTimer;

use crate::foundation::math::Point2;
use crate::text::LayoutResult;

/// Snapshot of the caret's state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretState {
    /// Gap index, always in `[0, glyph_count]`
    pub text_index: usize,
    /// Whether the caret bar is currently drawn
    pub visible: bool,
    /// Whether the field is in edit mode
    pub active: bool,
    /// Time of the last visibility change, in seconds
    pub last_toggle_time: f32,
}

/// Caret index and blink state for one text field
#[derive(Debug, Clone)]
pub struct CaretEngine {
    text_index: usize,
    blink: BlinkTimer,
}

impl CaretEngine {
    /// Create an inactive, hidden caret at gap 0
    pub fn new(blink_period: f32) -> Self {
        Self {
            text_index: 0,
            blink: BlinkTimer::new(blink_period),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> CaretState {
        CaretState {
            text_index: self.text_index,
            visible: self.blink.visible(),
            active: self.blink.active(),
            last_toggle_time: self.blink.last_toggle_time(),
        }
    }

    /// Current gap index
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    /// Whether the caret is drawn right now
    pub fn is_visible(&self) -> bool {
        self.blink.visible()
    }

    /// Whether the field is in edit mode
    pub fn is_active(&self) -> bool {
        self.blink.active()
    }

    /// Clamp `index` into the valid gap range of `layout`
    pub fn clamp(index: isize, layout: &LayoutResult) -> usize {
        let max = layout.glyph_count();
        usize::try_from(index.max(0)).map_or(max, |index| index.min(max))
    }

    /// Place the caret at `index`, clamped
    pub fn set_text_index(&mut self, index: usize, layout: &LayoutResult) {
        self.text_index = index.min(layout.glyph_count());
    }

    /// Re-clamp after `layout` replaced the previous layout
    pub fn reclamp(&mut self, layout: &LayoutResult) {
        self.set_text_index(self.text_index, layout);
    }

    /// Move by `delta` gaps
    ///
    /// In edit mode the caret is shown and its blink cycle restarts. Outside
    /// edit mode only the index changes; the caret stays hidden.
    pub fn move_by(&mut self, delta: isize, layout: &LayoutResult) {
        let current = isize::try_from(self.text_index).unwrap_or(isize::MAX);
        self.text_index = Self::clamp(current.saturating_add(delta), layout);
        self.reveal();
        log::trace!("Caret moved by {delta} to gap {}", self.text_index);
    }

    /// Move the caret to the gap under `point`
    ///
    /// Returns `true` when a glyph box contained the point. A miss leaves the
    /// index untouched.
    pub fn resolve_index_from_point(&mut self, point: Point2, layout: &LayoutResult) -> bool {
        match layout.hit_test(point) {
            Some(index) => {
                self.text_index = index;
                true
            }
            None => false,
        }
    }

    /// Enter edit mode at `point`, or leave it with `None`
    pub fn set_active(&mut self, point: Option<Point2>, layout: &LayoutResult) {
        match point {
            Some(point) => {
                self.resolve_index_from_point(point, layout);
                self.reclamp(layout);
                self.blink.activate();
            }
            None => self.blink.deactivate(),
        }
    }

    /// Restart the blink cycle with the caret shown, if in edit mode
    pub fn reveal(&mut self) {
        if self.blink.active() {
            self.blink.show();
        }
    }

    /// Advance the blink animation to `elapsed` seconds
    pub fn tick(&mut self, elapsed: f32) {
        self.blink.tick(elapsed);
    }

    /// Local-space position of the caret's bottom-left anchor
    pub fn screen_position(&self, layout: &LayoutResult) -> Point2 {
        layout.caret_position(self.text_index)
    }
}
