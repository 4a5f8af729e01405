//! Host binding and the stateful engine instance.
//!
//! The host implements [`HostBinding`]; [`CanvasEngine`] owns the UI state and
//! the listener subscriptions, and forwards every commit of the reducer to
//! [`HostBinding::on_change`].

use crate::canvas::{ElementRect, add_element, layout, update_text};
use crate::config::EngineConfig;
use crate::element::{Element, ElementId, ElementKind, Placement};
use crate::gesture::{Context, Transition, reduce};
use crate::input::{CanvasEvent, PointerId};
use crate::selection::{Handle, handles};
use crate::snap::GuideIndicator;
use crate::state::UiState;
use kurbo::Size;
use std::fmt;

/// Guard for a host listener. Dropping it releases the listener exactly once.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release callback.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Narrow interface between the engine and whatever hosts it (web canvas,
/// native window, game overlay).
pub trait HostBinding {
    /// Receive a complete new element list.
    fn on_change(&mut self, elements: Vec<Element>);

    /// Whether input focus is inside an editable field (content-editable
    /// region, text input, text area, text box role).
    fn is_input_focused(&self) -> bool;

    /// Start delivering global move/up/cancel events for `pointer_id`.
    fn capture_pointer(&mut self, pointer_id: PointerId) -> Subscription;

    /// Start delivering container size changes as [`CanvasEvent::Resized`].
    fn watch_container(&mut self) -> Subscription;
}

/// A mounted engine instance.
///
/// The container watch is acquired on construction and released on drop. The
/// pointer capture exists exactly while a gesture is active.
pub struct CanvasEngine<H: HostBinding> {
    host: H,
    config: EngineConfig,
    size: Size,
    ui: UiState,
    pointer_capture: Option<Subscription>,
    container_watch: Subscription,
}

impl<H: HostBinding> CanvasEngine<H> {
    /// Mount an engine on a host.
    pub fn new(mut host: H, config: EngineConfig, size: Size) -> Self {
        let container_watch = host.watch_container();
        log::debug!("Engine mounted at {}x{}", size.width, size.height);
        Self {
            host,
            config: config.normalized(),
            size,
            ui: UiState::new(),
            pointer_capture: None,
            container_watch,
        }
    }

    /// Handle one host event against the host's current element list.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_event(&mut self, elements: &[Element], event: &CanvasEvent) -> bool {
        if let CanvasEvent::Resized { size } = event {
            self.resize(*size);
            return true;
        }
        let ctx = Context {
            config: &self.config,
            elements,
            size: self.size,
            input_focused: self.host.is_input_focused(),
        };
        let transition = reduce(&ctx, &self.ui, event);
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> bool {
        let before = self.ui.drag.as_ref().map(|drag| drag.pointer_id());
        let after = transition.ui.drag.as_ref().map(|drag| drag.pointer_id());
        if before != after {
            // Release the old capture before acquiring a new one.
            self.pointer_capture = None;
            if let Some(pointer_id) = after {
                self.pointer_capture = Some(self.host.capture_pointer(pointer_id));
            }
        }

        self.ui = transition.ui;
        if let Some(elements) = transition.elements {
            self.host.on_change(elements);
        }
        transition.handled
    }

    /// Record a new container size. Element data is left untouched.
    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            log::debug!("Container resized to {}x{}", size.width, size.height);
            self.size = size;
        }
    }

    /// Replace the content of a text element.
    pub fn edit_text(&mut self, elements: &[Element], id: ElementId, text: &str) -> bool {
        match update_text(elements, id, text) {
            Some(next) => {
                self.host.on_change(next);
                true
            }
            None => false,
        }
    }

    /// Append a new element, clamped into the container, and select it.
    pub fn add_element(&mut self, elements: &[Element], kind: ElementKind, placement: Placement) -> ElementId {
        let (next, id) = add_element(elements, kind, placement, self.size, self.config.min_size);
        log::debug!("Added element {}", id);
        self.ui.select(id);
        self.host.on_change(next);
        id
    }

    /// Deselect. The engine never does this on its own.
    pub fn clear_selection(&mut self) {
        self.ui.clear_selection();
    }

    /// Pixel rects to render for the current container size.
    pub fn layout(&self, elements: &[Element]) -> Vec<ElementRect> {
        layout(elements, self.size)
    }

    /// Resize handles for the selected element, if it is in the list.
    pub fn selected_handles(&self, elements: &[Element]) -> Option<[Handle; 4]> {
        let id = self.ui.selected?;
        self.layout(elements)
            .into_iter()
            .find(|entry| entry.id == id)
            .map(|entry| handles(entry.rect))
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.ui.selected
    }

    pub fn indicator(&self) -> GuideIndicator {
        self.ui.indicator
    }

    pub fn is_dragging(&self) -> bool {
        !self.ui.is_idle()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear down, releasing every subscription, and hand the host back.
    pub fn unmount(self) -> H {
        let Self {
            host,
            pointer_capture,
            container_watch,
            ..
        } = self;
        drop(pointer_capture);
        container_watch.release();
        log::debug!("Engine unmounted");
        host
    }
}

impl<H: HostBinding + fmt::Debug> fmt::Debug for CanvasEngine<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasEngine")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("size", &self.size)
            .field("ui", &self.ui)
            .field("pointer_capture", &self.pointer_capture)
            .field("container_watch", &self.container_watch)
            .finish()
    }
}
