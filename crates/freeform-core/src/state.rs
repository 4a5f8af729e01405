//! Ephemeral UI state: selection, active gesture and guide indicator.

use crate::element::ElementId;
use crate::selection::DragState;
use crate::snap::GuideIndicator;
use serde::{Deserialize, Serialize};

/// UI state owned by the engine. Never persisted by the host.
///
/// Only one element can be selected and only one gesture can be active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Currently selected element.
    pub selected: Option<ElementId>,
    /// Gesture in progress, if any.
    pub drag: Option<DragState>,
    /// Guides to highlight while dragging.
    pub indicator: GuideIndicator,
}

impl UiState {
    /// Create an idle state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        self.drag.is_none()
    }

    /// Check if an element is selected.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Select a single element, replacing any previous selection.
    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Start a gesture. The indicator starts empty.
    pub fn begin_gesture(&mut self, drag: DragState) {
        self.select(drag.element_id());
        self.drag = Some(drag);
        self.indicator = GuideIndicator::default();
    }

    /// Return to idle. The indicator is cleared with the gesture.
    pub fn end_gesture(&mut self) {
        self.drag = None;
        self.indicator = GuideIndicator::default();
    }

    /// Forget an element that has been removed from the list.
    pub fn forget(&mut self, id: ElementId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.as_ref().is_some_and(|drag| drag.element_id() == id) {
            self.end_gesture();
        }
    }
}
