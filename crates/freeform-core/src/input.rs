//! Pointer, keyboard and container events delivered by the host.

use crate::element::ElementId;
use crate::selection::Corner;
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Identifier of a pointer (mouse, pen or one touch contact).
pub type PointerId = i64;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    /// The element body: starts a move.
    Body,
    /// A corner handle: starts a resize.
    Handle(Corner),
}

/// Pointer event in container pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Scoped to an element body or one of its handles.
    Down {
        pointer_id: PointerId,
        position: Point,
        element_id: ElementId,
        target: PointerTarget,
    },
    /// Global; only delivered while a gesture holds the pointer capture.
    Move {
        pointer_id: PointerId,
        position: Point,
    },
    Up {
        pointer_id: PointerId,
        position: Point,
    },
    Cancel {
        pointer_id: PointerId,
    },
}

impl PointerEvent {
    pub fn pointer_id(&self) -> PointerId {
        match self {
            PointerEvent::Down { pointer_id, .. }
            | PointerEvent::Move { pointer_id, .. }
            | PointerEvent::Up { pointer_id, .. }
            | PointerEvent::Cancel { pointer_id } => *pointer_id,
        }
    }
}

/// Keys the engine reacts to. Anything else is carried as its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Delete,
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other(String),
}

impl Key {
    /// Unit direction of an arrow key.
    pub fn arrow_direction(&self) -> Option<Vec2> {
        match self {
            Key::ArrowLeft => Some(Vec2::new(-1.0, 0.0)),
            Key::ArrowRight => Some(Vec2::new(1.0, 0.0)),
            Key::ArrowUp => Some(Vec2::new(0.0, -1.0)),
            Key::ArrowDown => Some(Vec2::new(0.0, 1.0)),
            _ => None,
        }
    }

    /// Whether this key deletes the selection.
    pub fn is_delete(&self) -> bool {
        matches!(self, Key::Delete | Key::Backspace)
    }

    /// Key name as reported by the host (DOM `KeyboardEvent.key` style).
    pub fn name(&self) -> &str {
        match self {
            Key::Delete => "Delete",
            Key::Backspace => "Backspace",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::Other(name) => name,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "Delete" => Key::Delete,
            "Backspace" => Key::Backspace,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            other => Key::Other(other.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from(name.as_str())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

/// Key-down event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<Key>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Key press without modifiers.
    pub fn plain(key: impl Into<Key>) -> Self {
        Self::new(key, Modifiers::default())
    }
}

/// Everything the engine can be told by its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    /// The visible delete control on an element was pressed.
    DeleteElement { element_id: ElementId },
    /// The container was remeasured.
    Resized { size: Size },
}
