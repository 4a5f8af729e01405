//! Resize handles and the state of an in-progress gesture.

use crate::element::ElementId;
use crate::geometry::rect_xywh;
use crate::input::PointerId;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 10.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Whether this handle drags the left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Whether this handle drags the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Position of this corner on a rect.
    pub fn position(self, rect: Rect) -> Point {
        let x = if self.is_left() { rect.x0 } else { rect.x1 };
        let y = if self.is_top() { rect.y0 } else { rect.y1 };
        Point::new(x, y)
    }
}

/// A resize handle with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in container pixels.
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    /// Check if a point hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point.x - self.position.x).abs() <= tolerance && (point.y - self.position.y).abs() <= tolerance
    }
}

/// The four corner handles of a rect, in `tl, tr, bl, br` order.
pub fn handles(rect: Rect) -> [Handle; 4] {
    Corner::ALL.map(|corner| Handle {
        position: corner.position(rect),
        corner,
    })
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(rect: Rect, point: Point, tolerance: f64) -> Option<Corner> {
    handles(rect)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.corner)
}

/// Resize a rect by dragging one corner by `delta`.
///
/// Right/bottom handles grow the extent; left/top handles move the origin and
/// shrink the extent by the same amount. No clamping happens here, so the
/// extent can go negative.
pub fn resize_from_corner(base: Rect, corner: Corner, delta: Vec2) -> Rect {
    let (x, w) = if corner.is_left() {
        (base.x0 + delta.x, base.width() - delta.x)
    } else {
        (base.x0, base.width() + delta.x)
    };
    let (y, h) = if corner.is_top() {
        (base.y0 + delta.y, base.height() - delta.y)
    } else {
        (base.y0, base.height() + delta.y)
    };
    rect_xywh(x, y, w, h)
}

/// An in-progress gesture. Exists only between pointer-down and pointer-up/cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DragState {
    /// Moving the whole element.
    Move {
        pointer_id: PointerId,
        /// Pointer offset from the element's top-left at grab time.
        offset: Vec2,
        /// Pixel rect at grab time.
        base: Rect,
        element_id: ElementId,
    },
    /// Dragging a corner handle.
    Resize {
        pointer_id: PointerId,
        /// Pointer position at grab time.
        origin: Point,
        /// Pixel rect at grab time.
        base: Rect,
        corner: Corner,
        element_id: ElementId,
    },
}

impl DragState {
    pub fn pointer_id(&self) -> PointerId {
        match self {
            DragState::Move { pointer_id, .. } | DragState::Resize { pointer_id, .. } => *pointer_id,
        }
    }

    pub fn element_id(&self) -> ElementId {
        match self {
            DragState::Move { element_id, .. } | DragState::Resize { element_id, .. } => *element_id,
        }
    }

    /// Unclamped rect for the pointer at `position`.
    ///
    /// Always derived from the grab-time rect and the total displacement, so
    /// repeated ticks never accumulate drift.
    pub fn candidate(&self, position: Point) -> Rect {
        match self {
            DragState::Move { offset, base, .. } => {
                let origin = position - *offset;
                rect_xywh(origin.x, origin.y, base.width(), base.height())
            }
            DragState::Resize {
                origin,
                base,
                corner,
                ..
            } => resize_from_corner(*base, *corner, position - *origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn base() -> Rect {
        rect_xywh(100.0, 50.0, 200.0, 100.0)
    }

    #[test]
    fn test_handles_order_and_positions() {
        let hs = handles(base());
        assert_eq!(hs[0].corner, Corner::TopLeft);
        assert_eq!(hs[0].position, Point::new(100.0, 50.0));
        assert_eq!(hs[1].position, Point::new(300.0, 50.0));
        assert_eq!(hs[2].position, Point::new(100.0, 150.0));
        assert_eq!(hs[3].corner, Corner::BottomRight);
        assert_eq!(hs[3].position, Point::new(300.0, 150.0));
    }

    #[test]
    fn test_hit_test_handles() {
        assert_eq!(hit_test_handles(base(), Point::new(298.0, 152.0), HANDLE_SIZE / 2.0), Some(Corner::BottomRight));
        assert_eq!(hit_test_handles(base(), Point::new(200.0, 100.0), HANDLE_SIZE / 2.0), None);
    }

    #[test]
    fn test_resize_bottom_right() {
        let rect = resize_from_corner(base(), Corner::BottomRight, Vec2::new(50.0, 30.0));
        assert_eq!(rect, rect_xywh(100.0, 50.0, 250.0, 130.0));
    }

    #[test]
    fn test_resize_top_left() {
        let rect = resize_from_corner(base(), Corner::TopLeft, Vec2::new(20.0, -10.0));
        assert_eq!(rect.x0, 120.0);
        assert_eq!(rect.width(), 180.0);
        assert_eq!(rect.y0, 40.0);
        assert_eq!(rect.height(), 110.0);
        // Opposite corner stays put.
        assert_eq!(rect.x1, 300.0);
        assert_eq!(rect.y1, 150.0);
    }

    #[test]
    fn test_resize_top_right_and_bottom_left() {
        let tr = resize_from_corner(base(), Corner::TopRight, Vec2::new(10.0, 10.0));
        assert_eq!((tr.x0, tr.y0, tr.width(), tr.height()), (100.0, 60.0, 210.0, 90.0));

        let bl = resize_from_corner(base(), Corner::BottomLeft, Vec2::new(10.0, 10.0));
        assert_eq!((bl.x0, bl.y0, bl.width(), bl.height()), (110.0, 50.0, 190.0, 110.0));
    }

    #[test]
    fn test_resize_past_opposite_edge_goes_negative() {
        let rect = resize_from_corner(base(), Corner::BottomRight, Vec2::new(-300.0, 0.0));
        assert_eq!(rect.width(), -100.0);
    }

    #[test]
    fn test_move_candidate_uses_total_displacement() {
        let drag = DragState::Move {
            pointer_id: 1,
            offset: Vec2::new(10.0, 5.0),
            base: base(),
            element_id: Uuid::new_v4(),
        };
        // Grabbed at (110, 55); now at (113, 57).
        let rect = drag.candidate(Point::new(113.0, 57.0));
        assert_eq!(rect, rect_xywh(103.0, 52.0, 200.0, 100.0));
    }

    #[test]
    fn test_corner_serde_names() {
        assert_eq!(serde_json::to_string(&Corner::TopLeft).unwrap(), "\"tl\"");
        let corner: Corner = serde_json::from_str("\"br\"").unwrap();
        assert_eq!(corner, Corner::BottomRight);
    }
}
