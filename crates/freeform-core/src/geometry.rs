//! Coordinate transforms and bounds clamping.
//!
//! Percentages are the persisted representation; pixels are only used while
//! interacting. Every conversion uses the container size measured right now.

use crate::element::{Element, Placement};
use kurbo::{Rect, Size};

/// Build a rect from origin and size without normalizing negative extents.
///
/// `Rect::from_origin_size` flips a negative width, which would hide an
/// over-dragged resize handle from the clamp.
pub fn rect_xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

/// Divisor used for a container dimension. Zero (or garbage) becomes 1.
fn divisor(dimension: f64) -> f64 {
    if dimension > 0.0 { dimension } else { 1.0 }
}

/// Pixel rect of a placement inside a container of the given size.
pub fn placement_to_pixel(placement: &Placement, size: Size) -> Rect {
    rect_xywh(
        placement.x_pct / 100.0 * size.width,
        placement.y_pct / 100.0 * size.height,
        placement.w_pct / 100.0 * size.width,
        placement.h_pct / 100.0 * size.height,
    )
}

/// Pixel rect of an element inside a container of the given size.
pub fn to_pixel(element: &Element, size: Size) -> Rect {
    placement_to_pixel(&element.placement, size)
}

/// Percentage placement of a pixel rect. Inverse of [`to_pixel`].
pub fn to_percent(rect: Rect, size: Size) -> Placement {
    let width = divisor(size.width);
    let height = divisor(size.height);
    Placement {
        x_pct: rect.x0 / width * 100.0,
        y_pct: rect.y0 / height * 100.0,
        w_pct: rect.width() / width * 100.0,
        h_pct: rect.height() / height * 100.0,
    }
}

/// Constrain a rect to the container and to a minimum size.
///
/// Size is bounded first so the position range accounts for it. When the
/// container is smaller than `min_size` the minimum wins and the rect is
/// pinned to the top-left.
pub fn clamp_rect(rect: Rect, size: Size, min_size: f64) -> Rect {
    let w = rect.width().clamp(min_size, size.width.max(min_size));
    let h = rect.height().clamp(min_size, size.height.max(min_size));
    let x = rect.x0.clamp(0.0, (size.width - w).max(0.0));
    let y = rect.y0.clamp(0.0, (size.height - h).max(0.0));
    rect_xywh(x, y, w, h)
}

/// Whether a rect already satisfies the clamp invariant.
pub fn is_within(rect: Rect, size: Size, min_size: f64) -> bool {
    rect.x0 >= 0.0
        && rect.y0 >= 0.0
        && rect.x1 <= size.width
        && rect.y1 <= size.height
        && rect.width() >= min_size
        && rect.height() >= min_size
}
