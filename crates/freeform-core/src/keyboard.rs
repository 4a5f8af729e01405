//! Keyboard deletion and arrow-key nudging of the selected element.

use crate::canvas::replace_placement;
use crate::element::{ElementId, find};
use crate::geometry::{clamp_rect, to_percent, to_pixel};
use crate::gesture::{Context, Transition, delete_element};
use crate::input::KeyEvent;
use crate::state::UiState;
use kurbo::Vec2;

/// Handle a key-down.
///
/// Nothing is claimed while an editable field has focus, so typing in a text
/// element never deletes or moves it.
pub fn handle_key(ctx: &Context<'_>, ui: &UiState, event: &KeyEvent) -> Transition {
    if ctx.input_focused {
        return Transition::ignored(ui);
    }
    let Some(selected) = ui.selected else {
        return Transition::ignored(ui);
    };

    if event.key.is_delete() {
        return delete_element(ctx, ui, selected);
    }
    if let Some(direction) = event.key.arrow_direction() {
        let distance = ctx.config.nudge_distance(event.modifiers.shift);
        return nudge(ctx, ui, selected, direction * distance);
    }
    Transition::ignored(ui)
}

/// Move an element by `delta` pixels, clamped into the container. No snapping.
pub fn nudge(ctx: &Context<'_>, ui: &UiState, id: ElementId, delta: Vec2) -> Transition {
    let Some(element) = find(ctx.elements, id) else {
        return Transition::ignored(ui);
    };
    let rect = clamp_rect(to_pixel(element, ctx.size) + delta, ctx.size, ctx.config.min_size);
    log::debug!("Nudged {} by ({}, {})", id, delta.x, delta.y);
    let elements = replace_placement(ctx.elements, id, to_percent(rect, ctx.size));
    Transition::commit(ui.clone(), elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::element::{Element, Placement};
    use crate::geometry::rect_xywh;
    use crate::input::Modifiers;
    use kurbo::{Rect, Size};

    const EPS: f64 = 1e-9;

    fn size() -> Size {
        Size::new(1000.0, 500.0)
    }

    fn elements() -> Vec<Element> {
        vec![
            Element::text("a", Placement::new(10.0, 10.0, 20.0, 20.0)),
            Element::image("b.png", "b", Placement::new(50.0, 50.0, 10.0, 10.0)),
        ]
    }

    fn selected(id: ElementId) -> UiState {
        let mut ui = UiState::new();
        ui.select(id);
        ui
    }

    fn press(elements: &[Element], ui: &UiState, event: KeyEvent, input_focused: bool) -> Transition {
        let config = EngineConfig::default();
        let ctx = Context {
            config: &config,
            elements,
            size: size(),
            input_focused,
        };
        handle_key(&ctx, ui, &event)
    }

    fn pixel(transition: &Transition, id: ElementId) -> Rect {
        to_pixel(find(transition.elements.as_ref().unwrap(), id).unwrap(), size())
    }

    fn assert_rect_eq(a: Rect, b: Rect) {
        assert!(
            (a.x0 - b.x0).abs() < EPS
                && (a.y0 - b.y0).abs() < EPS
                && (a.x1 - b.x1).abs() < EPS
                && (a.y1 - b.y1).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_backspace_deletes_selected() {
        let list = elements();
        let t = press(&list, &selected(list[0].id), KeyEvent::plain("Backspace"), false);

        assert!(t.handled);
        assert_eq!(t.elements, Some(vec![list[1].clone()]));
        assert_eq!(t.ui.selected, None);
    }

    #[test]
    fn test_delete_key_deletes_selected() {
        let list = elements();
        let t = press(&list, &selected(list[1].id), KeyEvent::plain("Delete"), false);
        assert_eq!(t.elements, Some(vec![list[0].clone()]));
    }

    #[test]
    fn test_backspace_in_editable_is_ignored() {
        let list = elements();
        let ui = selected(list[0].id);
        let t = press(&list, &ui, KeyEvent::plain("Backspace"), true);

        assert!(!t.handled);
        assert!(t.elements.is_none());
        assert_eq!(t.ui, ui);
    }

    #[test]
    fn test_arrow_in_editable_is_ignored() {
        let list = elements();
        let t = press(&list, &selected(list[0].id), KeyEvent::plain("ArrowLeft"), true);
        assert!(!t.handled);
        assert!(t.elements.is_none());
    }

    #[test]
    fn test_no_selection_is_ignored() {
        let list = elements();
        let t = press(&list, &UiState::new(), KeyEvent::plain("Delete"), false);
        assert!(!t.handled);
        assert!(t.elements.is_none());
    }

    #[test]
    fn test_arrow_nudges_one_pixel() {
        let list = elements();
        let id = list[0].id;
        let ui = selected(id);

        assert_rect_eq(pixel(&press(&list, &ui, KeyEvent::plain("ArrowRight"), false), id), rect_xywh(101.0, 50.0, 200.0, 100.0));
        assert_rect_eq(pixel(&press(&list, &ui, KeyEvent::plain("ArrowLeft"), false), id), rect_xywh(99.0, 50.0, 200.0, 100.0));
        assert_rect_eq(pixel(&press(&list, &ui, KeyEvent::plain("ArrowUp"), false), id), rect_xywh(100.0, 49.0, 200.0, 100.0));
        assert_rect_eq(pixel(&press(&list, &ui, KeyEvent::plain("ArrowDown"), false), id), rect_xywh(100.0, 51.0, 200.0, 100.0));
    }

    #[test]
    fn test_shift_arrow_nudges_ten_pixels() {
        let list = elements();
        let id = list[0].id;
        let t = press(&list, &selected(id), KeyEvent::new("ArrowRight", Modifiers::SHIFT), false);
        assert_rect_eq(pixel(&t, id), rect_xywh(110.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn test_nudge_is_clamped() {
        let list = vec![Element::text("edge", Placement::new(0.0, 0.0, 10.0, 10.0))];
        let id = list[0].id;
        let t = press(&list, &selected(id), KeyEvent::new("ArrowLeft", Modifiers::SHIFT), false);

        assert!(t.handled);
        assert_rect_eq(pixel(&t, id), rect_xywh(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_nudge_does_not_snap() {
        // B's left edge sits at x = 500; A's right edge is 3px away after the nudge.
        let list = vec![
            Element::text("a", Placement::new(29.6, 10.0, 20.0, 20.0)),
            Element::text("b", Placement::new(50.0, 50.0, 10.0, 10.0)),
        ];
        let id = list[0].id;
        let t = press(&list, &selected(id), KeyEvent::plain("ArrowRight"), false);
        assert!((pixel(&t, id).x1 - 497.0).abs() < 1e-6);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let list = elements();
        let t = press(&list, &selected(list[0].id), KeyEvent::plain("Enter"), false);
        assert!(!t.handled);
    }

    #[test]
    fn test_nudge_keeps_selection() {
        let list = elements();
        let id = list[1].id;
        let t = press(&list, &selected(id), KeyEvent::plain("ArrowDown"), false);
        assert_eq!(t.ui.selected, Some(id));
    }
}
