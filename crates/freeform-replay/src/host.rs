//! In-memory host binding used for replays.

use freeform_core::{Element, HostBinding, PointerId, Subscription};
use std::cell::Cell;
use std::rc::Rc;

/// Headless host: owns the element list and counts live listeners.
#[derive(Debug, Default)]
pub struct ReplayHost {
    elements: Vec<Element>,
    focused: bool,
    changes: usize,
    live: Rc<Cell<usize>>,
}

impl ReplayHost {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// Simulate focus entering or leaving an editable field.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Number of `on_change` calls received.
    pub fn change_count(&self) -> usize {
        self.changes
    }

    /// Number of listeners currently held by the engine.
    pub fn live_subscriptions(&self) -> usize {
        self.live.get()
    }

    /// Shared handle to the live listener count, readable after the host is moved.
    pub fn live_counter(&self) -> Rc<Cell<usize>> {
        self.live.clone()
    }

    fn subscribe(&self, what: String) -> Subscription {
        let live = self.live.clone();
        live.set(live.get() + 1);
        log::trace!("Subscribed {}", what);
        Subscription::new(move || {
            live.set(live.get().saturating_sub(1));
            log::trace!("Released {}", what);
        })
    }
}

impl HostBinding for ReplayHost {
    fn on_change(&mut self, elements: Vec<Element>) {
        self.changes += 1;
        self.elements = elements;
    }

    fn is_input_focused(&self) -> bool {
        self.focused
    }

    fn capture_pointer(&mut self, pointer_id: PointerId) -> Subscription {
        self.subscribe(format!("pointer {pointer_id}"))
    }

    fn watch_container(&mut self) -> Subscription {
        self.subscribe("container".to_string())
    }
}
