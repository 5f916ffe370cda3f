//! # Scene Backend Abstraction
//!
//! The text field produces data; a scene graph turns it into drawable nodes.
//! [`SceneBackend`] is the narrow interface the scene graph implements, and
//! [`TextFieldScene`] keeps a backend's nodes in step with a [`TextField`].
//!
//! ## Node Ownership
//!
//! - One filled-mesh node per glyph that has an outline
//! - One caret node, built once and moved around
//! - All nodes live inside a group shifted by the field's alignment offset
//!
//! Glyph nodes are rebuilt wholesale whenever the field's layout revision
//! changes.

use crate::field::TextField;
use crate::font::PathCommand;
use crate::foundation::math::{Point2, Rect};

/// Interface a scene graph implements to display a text field
pub trait SceneBackend {
    /// Handle to a renderable node
    type Node: Copy + PartialEq + std::fmt::Debug;

    /// Backend-specific error
    type Error: std::error::Error;

    /// Tessellate the closed contours described by `commands` into a filled mesh node
    fn build_filled_mesh(&mut self, commands: &[PathCommand]) -> Result<Self::Node, Self::Error>;

    /// Build a filled rectangle node
    fn build_rect_mesh(&mut self, rect: Rect) -> Result<Self::Node, Self::Error>;

    /// Attach a node to the text field's group
    fn add_node(&mut self, node: Self::Node);

    /// Detach a node from the group and release it
    fn remove_node(&mut self, node: Self::Node);

    /// Show or hide a node
    fn set_node_visible(&mut self, node: Self::Node, visible: bool);

    /// Move a node within the group
    fn set_node_position(&mut self, node: Self::Node, position: Point2);

    /// Shift the whole group horizontally
    fn set_group_offset(&mut self, x: f32);
}

/// Keeps scene nodes in sync with one text field
#[derive(Debug)]
pub struct TextFieldScene<B: SceneBackend> {
    glyph_nodes: Vec<B::Node>,
    caret_node: Option<B::Node>,
    synced_revision: Option<u64>,
}

impl<B: SceneBackend> Default for TextFieldScene<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SceneBackend> TextFieldScene<B> {
    /// Create an empty scene mirror; nothing is built until the first sync
    pub fn new() -> Self {
        Self {
            glyph_nodes: Vec::new(),
            caret_node: None,
            synced_revision: None,
        }
    }

    /// Glyph nodes currently attached, in glyph order (blank glyphs skipped)
    pub fn glyph_nodes(&self) -> &[B::Node] {
        &self.glyph_nodes
    }

    /// Caret node, once built
    pub fn caret_node(&self) -> Option<B::Node> {
        self.caret_node
    }

    /// Bring the backend up to date with `field`
    ///
    /// Call once per frame after input and [`TextField::tick`].
    pub fn sync(&mut self, field: &TextField, backend: &mut B) -> Result<(), B::Error> {
        if self.synced_revision != Some(field.revision()) {
            self.rebuild_glyphs(field, backend)?;
            self.synced_revision = Some(field.revision());
        }

        let caret = match self.caret_node {
            Some(node) => node,
            None => {
                let anchor = field.caret_position();
                let rect = field.caret_rect();
                let local = Rect::from_corners(
                    Point2::from(rect.min - anchor),
                    Point2::from(rect.max - anchor),
                );
                let node = backend.build_rect_mesh(local)?;
                backend.add_node(node);
                self.caret_node = Some(node);
                node
            }
        };

        backend.set_node_position(caret, field.caret_position());
        backend.set_node_visible(caret, field.caret_visible());
        backend.set_group_offset(field.alignment_offset());

        Ok(())
    }

    /// Remove every node this mirror created
    pub fn clear(&mut self, backend: &mut B) {
        for node in self.glyph_nodes.drain(..) {
            backend.remove_node(node);
        }
        if let Some(node) = self.caret_node.take() {
            backend.remove_node(node);
        }
        self.synced_revision = None;
    }

    fn rebuild_glyphs(&mut self, field: &TextField, backend: &mut B) -> Result<(), B::Error> {
        for node in self.glyph_nodes.drain(..) {
            backend.remove_node(node);
        }

        for glyph in field.glyphs().iter().filter(|g| g.has_outline()) {
            let node = backend.build_filled_mesh(&glyph.outline)?;
            backend.add_node(node);
            self.glyph_nodes.push(node);
        }

        log::debug!(
            "Rebuilt {} glyph nodes for layout revision {}",
            self.glyph_nodes.len(),
            field.revision()
        );
        Ok(())
    }
}
