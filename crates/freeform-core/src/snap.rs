//! Alignment guides and snapping of rects onto them.

use crate::element::{Element, ElementId};
use crate::geometry::{rect_xywh, to_pixel};
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Default distance (in pixels) within which an edge or center snaps to a guide.
pub const SNAP_THRESHOLD: f64 = 6.0;

/// Vertical (`xs`) and horizontal (`ys`) alignment lines, in iteration order.
///
/// Container guides come first, then the guides of each element in list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guides {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Collect guides from the container edges/midline and every element's
/// edges/midline. `exclude` skips the element being manipulated.
pub fn collect_guides(elements: &[Element], size: Size, exclude: Option<ElementId>) -> Guides {
    let mut xs = Vec::with_capacity(3 + elements.len() * 3);
    let mut ys = Vec::with_capacity(3 + elements.len() * 3);

    xs.extend([0.0, size.width / 2.0, size.width]);
    ys.extend([0.0, size.height / 2.0, size.height]);

    for element in elements.iter().filter(|e| Some(e.id) != exclude) {
        let rect = to_pixel(element, size);
        let center = rect.center();
        xs.extend([rect.x0, center.x, rect.x1]);
        ys.extend([rect.y0, center.y, rect.y1]);
    }

    Guides { xs, ys }
}

/// Guide positions currently highlighted by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideIndicator {
    /// Vertical guide line at this x.
    pub x: Option<f64>,
    /// Horizontal guide line at this y.
    pub y: Option<f64>,
}

impl GuideIndicator {
    /// Check if any guide is shown.
    pub fn is_active(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped rect.
    pub rect: Rect,
    /// Guide the rect was aligned to on the x axis.
    pub matched_x: Option<f64>,
    /// Guide the rect was aligned to on the y axis.
    pub matched_y: Option<f64>,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(rect: Rect) -> Self {
        Self {
            rect,
            matched_x: None,
            matched_y: None,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.matched_x.is_some() || self.matched_y.is_some()
    }

    /// Indicator to render for this result.
    pub fn indicator(&self) -> GuideIndicator {
        GuideIndicator {
            x: self.matched_x,
            y: self.matched_y,
        }
    }
}

/// Snap one axis. Tests the start edge, then the center, then the end edge,
/// each against every guide in order; the first guide within `threshold` wins.
///
/// Returns the new start coordinate and the matched guide.
fn snap_axis(start: f64, extent: f64, guides: &[f64], threshold: f64) -> Option<(f64, f64)> {
    let anchors = [0.0, extent / 2.0, extent];
    anchors.iter().find_map(|&offset| {
        let anchor = start + offset;
        guides
            .iter()
            .find(|&&guide| (anchor - guide).abs() <= threshold)
            .map(|&guide| (guide - offset, guide))
    })
}

/// Align a rect with the first guide within `threshold`, independently per axis.
///
/// The rect is translated; its size never changes.
pub fn snap_rect(rect: Rect, guides: &Guides, threshold: f64) -> SnapResult {
    let width = rect.width();
    let height = rect.height();
    let mut result = SnapResult::none(rect);
    let mut x = rect.x0;
    let mut y = rect.y0;

    if let Some((snapped, guide)) = snap_axis(x, width, &guides.xs, threshold) {
        x = snapped;
        result.matched_x = Some(guide);
    }
    if let Some((snapped, guide)) = snap_axis(y, height, &guides.ys, threshold) {
        y = snapped;
        result.matched_y = Some(guide);
    }

    result.rect = rect_xywh(x, y, width, height);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Placement;

    fn container() -> Size {
        Size::new(1000.0, 500.0)
    }

    #[test]
    fn test_container_guides_come_first() {
        let a = Element::text("", Placement::new(10.0, 10.0, 20.0, 20.0));
        let guides = collect_guides(&[a], container(), None);

        assert_eq!(guides.xs, vec![0.0, 500.0, 1000.0, 100.0, 200.0, 300.0]);
        assert_eq!(guides.ys, vec![0.0, 250.0, 500.0, 50.0, 100.0, 150.0]);
    }

    #[test]
    fn test_collect_excludes_dragged_element() {
        let a = Element::text("", Placement::new(10.0, 10.0, 20.0, 20.0));
        let b = Element::text("", Placement::new(50.0, 50.0, 10.0, 10.0));
        let guides = collect_guides(&[a.clone(), b], container(), Some(a.id));

        assert_eq!(guides.xs.len(), 6);
        assert!(!guides.xs.contains(&100.0));
        assert!(guides.xs.contains(&550.0));
    }

    #[test]
    fn test_empty_list_has_container_guides() {
        let guides = collect_guides(&[], container(), None);
        assert_eq!(guides.xs, vec![0.0, 500.0, 1000.0]);
        assert_eq!(guides.ys, vec![0.0, 250.0, 500.0]);
    }

    #[test]
    fn test_center_snaps_to_midline() {
        let guides = collect_guides(&[], container(), None);
        // Center at x = 504, within 6px of the container midline.
        let rect = rect_xywh(404.0, 52.0, 200.0, 100.0);
        let result = snap_rect(rect, &guides, SNAP_THRESHOLD);

        assert_eq!(result.matched_x, Some(500.0));
        assert_eq!(result.rect.center().x, 500.0);
        assert_eq!(result.rect.width(), 200.0);
        assert_eq!(result.matched_y, None);
        assert_eq!(result.rect.y0, 52.0);
    }

    #[test]
    fn test_left_edge_tested_before_center() {
        let guides = Guides {
            xs: vec![105.0, 200.0],
            ys: vec![],
        };
        // Left edge 100 is 5px from 105; center 200 matches exactly but loses.
        let result = snap_rect(rect_xywh(100.0, 0.0, 200.0, 50.0), &guides, SNAP_THRESHOLD);
        assert_eq!(result.matched_x, Some(105.0));
        assert_eq!(result.rect.x0, 105.0);
    }

    #[test]
    fn test_first_guide_wins_not_closest() {
        let guides = Guides {
            xs: vec![95.0, 100.0],
            ys: vec![],
        };
        let result = snap_rect(rect_xywh(100.0, 0.0, 50.0, 50.0), &guides, SNAP_THRESHOLD);
        assert_eq!(result.matched_x, Some(95.0));
    }

    #[test]
    fn test_right_and_bottom_edges() {
        let guides = Guides {
            xs: vec![400.0],
            ys: vec![300.0],
        };
        let result = snap_rect(rect_xywh(197.0, 98.0, 200.0, 198.0), &guides, SNAP_THRESHOLD);
        assert_eq!(result.rect.x1, 400.0);
        assert_eq!(result.rect.y1, 300.0);
        assert!(result.is_snapped());
        assert!(result.indicator().is_active());
    }

    #[test]
    fn test_outside_threshold_is_unchanged() {
        let guides = collect_guides(&[], container(), None);
        let rect = rect_xywh(103.0, 52.0, 200.0, 100.0);
        let result = snap_rect(rect, &guides, SNAP_THRESHOLD);

        assert!(!result.is_snapped());
        assert_eq!(result.rect, rect);
        assert_eq!(result.indicator(), GuideIndicator::default());
    }

    #[test]
    fn test_custom_threshold() {
        let guides = Guides {
            xs: vec![0.0],
            ys: vec![0.0],
        };
        let rect = rect_xywh(10.0, 10.0, 50.0, 50.0);
        assert!(!snap_rect(rect, &guides, 6.0).is_snapped());
        assert!(snap_rect(rect, &guides, 10.0).is_snapped());
    }
}
