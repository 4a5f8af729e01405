//! Replay scripts: an ordered list of host input steps.

use crate::error::ReplayResult;
use crate::scene::read_json;
use freeform_core::{
    CanvasEvent, Corner, ElementId, KeyEvent, Modifiers, PointerEvent, PointerId, PointerTarget,
};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_pointer() -> PointerId {
    1
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Press on an element body, or on one of its handles when `handle` is set.
    PointerDown {
        #[serde(default = "default_pointer")]
        pointer_id: PointerId,
        x: f64,
        y: f64,
        element: ElementId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        handle: Option<Corner>,
    },
    PointerMove {
        #[serde(default = "default_pointer")]
        pointer_id: PointerId,
        x: f64,
        y: f64,
    },
    PointerUp {
        #[serde(default = "default_pointer")]
        pointer_id: PointerId,
        x: f64,
        y: f64,
    },
    PointerCancel {
        #[serde(default = "default_pointer")]
        pointer_id: PointerId,
    },
    Key {
        key: String,
        #[serde(default)]
        shift: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
    /// Click on an element's delete control.
    Delete {
        element: ElementId,
    },
    /// Move input focus into or out of an editable field.
    Focus {
        focused: bool,
    },
    EditText {
        element: ElementId,
        text: String,
    },
}

impl Step {
    /// The engine event for this step, if it is one.
    ///
    /// `focus` and `edit_text` act on the host directly and return `None`.
    pub fn to_event(&self) -> Option<CanvasEvent> {
        let event = match self {
            Step::PointerDown {
                pointer_id,
                x,
                y,
                element,
                handle,
            } => CanvasEvent::Pointer(PointerEvent::Down {
                pointer_id: *pointer_id,
                position: Point::new(*x, *y),
                element_id: *element,
                target: handle.map_or(PointerTarget::Body, PointerTarget::Handle),
            }),
            Step::PointerMove { pointer_id, x, y } => CanvasEvent::Pointer(PointerEvent::Move {
                pointer_id: *pointer_id,
                position: Point::new(*x, *y),
            }),
            Step::PointerUp { pointer_id, x, y } => CanvasEvent::Pointer(PointerEvent::Up {
                pointer_id: *pointer_id,
                position: Point::new(*x, *y),
            }),
            Step::PointerCancel { pointer_id } => CanvasEvent::Pointer(PointerEvent::Cancel {
                pointer_id: *pointer_id,
            }),
            Step::Key { key, shift } => {
                let modifiers = if *shift { Modifiers::SHIFT } else { Modifiers::default() };
                CanvasEvent::Key(KeyEvent::new(key.as_str(), modifiers))
            }
            Step::Resize { width, height } => CanvasEvent::Resized {
                size: Size::new(*width, *height),
            },
            Step::Delete { element } => CanvasEvent::DeleteElement { element_id: *element },
            Step::Focus { .. } | Step::EditText { .. } => return None,
        };
        Some(event)
    }
}

/// Load a script from a JSON file holding an array of steps.
pub fn load_script(path: impl AsRef<Path>) -> ReplayResult<Vec<Step>> {
    read_json(path.as_ref())
}
