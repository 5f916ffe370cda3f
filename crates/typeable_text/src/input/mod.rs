//! Decoded edit actions
//!
//! The text field never listens to devices itself. The host's input layer
//! turns key and pointer events into [`EditAction`]s; [`Key`] covers the
//! keys a single-line-navigation text field reacts to.

use crate::foundation::math::Point2;

/// One edit operation on a text field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditAction {
    /// Insert a character at the caret
    Insert(char),
    /// Remove the character before the caret, moving the caret back
    DeleteForward,
    /// Remove the character after the caret
    DeleteBackward,
    /// Move the caret by a number of gaps
    MoveCaret(isize),
    /// Click: `Some` enters edit mode at a field-local point, `None` leaves it
    Activate(Option<Point2>),
}

/// Keys relevant to text editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key producing a character
    Character(char),
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any other key
    Other,
}

impl Key {
    /// Decode a key press into an edit action
    ///
    /// Backspace removes the character before the caret and Delete the one
    /// after it. Control characters other than line feed produce nothing.
    pub fn to_action(self) -> Option<EditAction> {
        match self {
            Self::Character(c) if c == '\n' || !c.is_control() => Some(EditAction::Insert(c)),
            Self::Character(_) | Self::Other => None,
            Self::Backspace => Some(EditAction::DeleteForward),
            Self::Delete => Some(EditAction::DeleteBackward),
            Self::Left => Some(EditAction::MoveCaret(-1)),
            Self::Right => Some(EditAction::MoveCaret(1)),
        }
    }
}
