//! Operations over the host's element list.
//!
//! Each operation takes the current list as an immutable snapshot and returns
//! a complete new list. List order is z-order and is always preserved.

use crate::element::{Element, ElementId, ElementKind, Placement};
use crate::geometry::{clamp_rect, placement_to_pixel, to_percent, to_pixel};
use kurbo::{Rect, Size};

/// Pixel rect of one element for the current container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub id: ElementId,
    pub rect: Rect,
}

/// Pixel rects of all elements, in list order.
///
/// This is what the host renders. It is recomputed whenever the container is
/// remeasured; the percentages themselves never change on resize.
pub fn layout(elements: &[Element], size: Size) -> Vec<ElementRect> {
    elements
        .iter()
        .map(|element| ElementRect {
            id: element.id,
            rect: to_pixel(element, size),
        })
        .collect()
}

/// Copy of the list with one element's placement replaced.
pub fn replace_placement(elements: &[Element], id: ElementId, placement: Placement) -> Vec<Element> {
    elements
        .iter()
        .map(|element| {
            if element.id == id {
                element.with_placement(placement)
            } else {
                element.clone()
            }
        })
        .collect()
}

/// Copy of the list without the given element.
///
/// Returns `None` if no element has that id.
pub fn remove_element(elements: &[Element], id: ElementId) -> Option<Vec<Element>> {
    if !elements.iter().any(|element| element.id == id) {
        return None;
    }
    Some(elements.iter().filter(|element| element.id != id).cloned().collect())
}

/// Copy of the list with the content of a text element replaced.
///
/// Returns `None` if the id is unknown or does not name a text element.
pub fn update_text(elements: &[Element], id: ElementId, text: &str) -> Option<Vec<Element>> {
    let target = elements.iter().find(|element| element.id == id)?;
    if !matches!(target.kind, ElementKind::Text { .. }) {
        return None;
    }
    Some(
        elements
            .iter()
            .map(|element| {
                if element.id == id {
                    Element {
                        kind: ElementKind::Text { text: text.to_string() },
                        ..element.clone()
                    }
                } else {
                    element.clone()
                }
            })
            .collect(),
    )
}

/// Copy of the list with a new element appended on top.
///
/// The placement is clamped into the container first. Returns the new list and
/// the id of the inserted element.
pub fn add_element(
    elements: &[Element],
    kind: ElementKind,
    placement: Placement,
    size: Size,
    min_size: f64,
) -> (Vec<Element>, ElementId) {
    let rect = clamp_rect(placement_to_pixel(&placement, size), size, min_size);
    let element = Element::new(kind, to_percent(rect, size));
    let id = element.id;
    let mut next = elements.to_vec();
    next.push(element);
    (next, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Element> {
        vec![
            Element::text("a", Placement::new(10.0, 10.0, 20.0, 20.0)),
            Element::rect("#fff", "#000", Placement::new(40.0, 40.0, 10.0, 10.0)),
            Element::image("c.png", "c", Placement::new(70.0, 5.0, 20.0, 30.0)),
        ]
    }

    #[test]
    fn test_layout_follows_container_size() {
        let elements = sample();
        let small = layout(&elements, Size::new(1000.0, 500.0));
        let large = layout(&elements, Size::new(2000.0, 1000.0));

        assert_eq!(small.len(), 3);
        assert_eq!(small[0].id, elements[0].id);
        assert!((small[0].rect.x0 - 100.0).abs() < 1e-9);
        assert!((large[0].rect.x0 - 200.0).abs() < 1e-9);
        assert!((large[0].rect.height() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_replace_placement_only_touches_target() {
        let elements = sample();
        let placement = Placement::new(1.0, 2.0, 3.0, 4.0);
        let next = replace_placement(&elements, elements[1].id, placement);

        assert_eq!(next[0], elements[0]);
        assert_eq!(next[1].placement, placement);
        assert_eq!(next[1].kind, elements[1].kind);
        assert_eq!(next[2], elements[2]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let elements = sample();
        let next = remove_element(&elements, elements[1].id).unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next[0], elements[0]);
        assert_eq!(next[1], elements[2]);
    }

    #[test]
    fn test_remove_unknown() {
        assert!(remove_element(&sample(), uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_update_text() {
        let elements = sample();
        let next = update_text(&elements, elements[0].id, "changed").unwrap();

        assert_eq!(next[0].kind, ElementKind::Text { text: "changed".to_string() });
        assert_eq!(next[0].placement, elements[0].placement);
        assert_eq!(next[1..], elements[1..]);
    }

    #[test]
    fn test_update_text_rejects_other_kinds() {
        let elements = sample();
        assert!(update_text(&elements, elements[1].id, "nope").is_none());
    }

    #[test]
    fn test_add_element_clamps_and_appends() {
        let elements = sample();
        let size = Size::new(1000.0, 500.0);
        let (next, id) = add_element(
            &elements,
            ElementKind::Text { text: String::new() },
            Placement::new(95.0, 0.0, 20.0, 0.0),
            size,
            8.0,
        );

        assert_eq!(next.len(), 4);
        let added = next.last().unwrap();
        assert_eq!(added.id, id);
        assert!((added.placement.x_pct - 80.0).abs() < 1e-9);
        assert!((added.placement.h_pct - 1.6).abs() < 1e-9);
    }
}
