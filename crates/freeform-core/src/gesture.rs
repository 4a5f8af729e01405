//! The engine as a pure function of `(ui, elements, size, event)`.
//!
//! [`reduce`] never touches the host list: a mutation is reported as a complete
//! new list in [`Transition::elements`], which the binding forwards to the host.

use crate::canvas::{remove_element, replace_placement};
use crate::config::EngineConfig;
use crate::element::{Element, ElementId, find};
use crate::geometry::{clamp_rect, is_within, to_percent, to_pixel};
use crate::input::{CanvasEvent, PointerEvent, PointerId, PointerTarget};
use crate::keyboard::handle_key;
use crate::selection::DragState;
use crate::snap::{collect_guides, snap_rect};
use crate::state::UiState;
use kurbo::{Point, Size};

/// Read-only inputs for one reducer step.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Engine settings. [`reduce`] normalizes them before use.
    pub config: &'a EngineConfig,
    /// Host's element list for this tick.
    pub elements: &'a [Element],
    /// Current container size in pixels.
    pub size: Size,
    /// Whether input focus is inside an editable field.
    pub input_focused: bool,
}

/// Result of one reducer step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// UI state after the event.
    pub ui: UiState,
    /// New element list to hand to the host, if anything changed.
    pub elements: Option<Vec<Element>>,
    /// Whether the event was consumed (the host should suppress its default).
    pub handled: bool,
}

impl Transition {
    /// The event was not for us.
    pub fn ignored(ui: &UiState) -> Self {
        Self {
            ui: ui.clone(),
            elements: None,
            handled: false,
        }
    }

    /// UI state changed, element list did not.
    pub fn ui_only(ui: UiState) -> Self {
        Self {
            ui,
            elements: None,
            handled: true,
        }
    }

    /// UI state and element list both changed.
    pub fn commit(ui: UiState, elements: Vec<Element>) -> Self {
        Self {
            ui,
            elements: Some(elements),
            handled: true,
        }
    }
}

/// Apply one event.
pub fn reduce(ctx: &Context<'_>, ui: &UiState, event: &CanvasEvent) -> Transition {
    let config = ctx.config.normalized();
    let ctx = &Context { config: &config, ..*ctx };
    match event {
        CanvasEvent::Pointer(pointer) => handle_pointer(ctx, ui, pointer),
        CanvasEvent::Key(key) => handle_key(ctx, ui, key),
        CanvasEvent::DeleteElement { element_id } => delete_element(ctx, ui, *element_id),
        // Percentages are resolution independent; nothing to recompute here.
        CanvasEvent::Resized { .. } => Transition::ignored(ui),
    }
}

fn handle_pointer(ctx: &Context<'_>, ui: &UiState, event: &PointerEvent) -> Transition {
    match *event {
        PointerEvent::Down {
            pointer_id,
            position,
            element_id,
            target,
        } => pointer_down(ctx, ui, pointer_id, position, element_id, target),
        PointerEvent::Move {
            pointer_id,
            position,
        } => pointer_move(ctx, ui, pointer_id, position),
        PointerEvent::Up { pointer_id, .. } | PointerEvent::Cancel { pointer_id } => {
            pointer_release(ui, pointer_id)
        }
    }
}

fn pointer_down(
    ctx: &Context<'_>,
    ui: &UiState,
    pointer_id: PointerId,
    position: Point,
    element_id: ElementId,
    target: PointerTarget,
) -> Transition {
    if let Some(active) = &ui.drag {
        log::debug!(
            "Ignoring pointer {} down: pointer {} already owns a gesture",
            pointer_id,
            active.pointer_id()
        );
        return Transition::ignored(ui);
    }
    let Some(element) = find(ctx.elements, element_id) else {
        log::warn!("Pointer down on unknown element {}", element_id);
        return Transition::ignored(ui);
    };

    let base = to_pixel(element, ctx.size);
    let drag = match target {
        PointerTarget::Body => DragState::Move {
            pointer_id,
            offset: position - base.origin(),
            base,
            element_id,
        },
        PointerTarget::Handle(corner) => DragState::Resize {
            pointer_id,
            origin: position,
            base,
            corner,
            element_id,
        },
    };
    log::debug!("Gesture start: {:?} on {}", target, element_id);

    let mut next = ui.clone();
    next.begin_gesture(drag);
    Transition::ui_only(next)
}

/// Commit one tick of the active gesture: clamp, snap, clamp again if the snap
/// left the container.
///
/// Snapping translates the whole rect, for resizes too, so the edge opposite
/// the dragged handle can drift by up to the snap threshold.
fn pointer_move(ctx: &Context<'_>, ui: &UiState, pointer_id: PointerId, position: Point) -> Transition {
    let Some(drag) = &ui.drag else {
        return Transition::ignored(ui);
    };
    if drag.pointer_id() != pointer_id {
        return Transition::ignored(ui);
    }

    let element_id = drag.element_id();
    let mut next = ui.clone();
    if find(ctx.elements, element_id).is_none() {
        log::debug!("Element {} vanished mid-gesture; ending it", element_id);
        next.end_gesture();
        return Transition::ui_only(next);
    }

    let config = ctx.config;
    let clamped = clamp_rect(drag.candidate(position), ctx.size, config.min_size);
    let guides = collect_guides(ctx.elements, ctx.size, Some(element_id));
    let snapped = snap_rect(clamped, &guides, config.snap_threshold);
    let rect = if is_within(snapped.rect, ctx.size, config.min_size) {
        snapped.rect
    } else {
        clamp_rect(snapped.rect, ctx.size, config.min_size)
    };

    next.indicator = snapped.indicator();
    log::trace!("Commit {} at {:?}", element_id, rect);
    let elements = replace_placement(ctx.elements, element_id, to_percent(rect, ctx.size));
    Transition::commit(next, elements)
}

fn pointer_release(ui: &UiState, pointer_id: PointerId) -> Transition {
    match &ui.drag {
        Some(drag) if drag.pointer_id() == pointer_id => {
            log::debug!("Gesture end on {}", drag.element_id());
            let mut next = ui.clone();
            next.end_gesture();
            Transition::ui_only(next)
        }
        _ => Transition::ignored(ui),
    }
}

/// Remove one element from the list, forgetting any UI state pointing at it.
pub(crate) fn delete_element(ctx: &Context<'_>, ui: &UiState, id: ElementId) -> Transition {
    let Some(elements) = remove_element(ctx.elements, id) else {
        let mut next = ui.clone();
        next.forget(id);
        return Transition {
            handled: next != *ui,
            ..Transition::ui_only(next)
        };
    };
    log::debug!("Deleted element {}", id);
    let mut next = ui.clone();
    next.forget(id);
    Transition::commit(next, elements)
}
