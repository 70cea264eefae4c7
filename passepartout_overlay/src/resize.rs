// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use passepartout_geometry::rect_contains_rect;

use crate::Corner;

/// Resizes `rect` by dragging `corner` to `touch`.
///
/// The two edges adjacent to `corner` follow the touch point; the opposite
/// edges stay. Each axis is checked on its own: if the new width would be
/// below `min_size` the old left and right edges are kept, and likewise for
/// the height. With `allow_drag` unset the rectangle is returned unchanged.
#[must_use]
pub fn resize(corner: Corner, touch: Point, rect: Rect, min_size: f64, allow_drag: bool) -> Rect {
    if !allow_drag {
        return rect;
    }
    let tentative = match corner {
        Corner::TopLeft => Rect::new(touch.x, touch.y, rect.x1, rect.y1),
        Corner::TopRight => Rect::new(rect.x0, touch.y, touch.x, rect.y1),
        Corner::BottomRight => Rect::new(rect.x0, rect.y0, touch.x, touch.y),
        Corner::BottomLeft => Rect::new(touch.x, rect.y0, rect.x1, touch.y),
    };
    let keep_width = tentative.width() >= min_size;
    let keep_height = tentative.height() >= min_size;
    Rect::new(
        if keep_width { tentative.x0 } else { rect.x0 },
        if keep_height { tentative.y0 } else { rect.y0 },
        if keep_width { tentative.x1 } else { rect.x1 },
        if keep_height { tentative.y1 } else { rect.y1 },
    )
}

/// Resizes `rect` by dragging `corner` while keeping `aspect` (width over
/// height).
///
/// The opposite corner stays anchored and the horizontal distance from it to
/// `touch` sets the new width. Returns `None` when either side would drop
/// below `min_size` or the result would leave a non-empty `container`.
#[must_use]
pub fn resize_locked(
    corner: Corner,
    touch: Point,
    rect: Rect,
    aspect: f64,
    min_size: f64,
    container: Rect,
) -> Option<Rect> {
    if !(aspect.is_finite() && aspect > 0.0) {
        return None;
    }
    let anchor = corner.opposite().of(rect);
    let width = if corner.is_left() {
        anchor.x - touch.x
    } else {
        touch.x - anchor.x
    };
    let height = width / aspect;
    if width < min_size || height < min_size {
        return None;
    }
    let (x0, x1) = if corner.is_left() {
        (anchor.x - width, anchor.x)
    } else {
        (anchor.x, anchor.x + width)
    };
    let (y0, y1) = if corner.is_top() {
        (anchor.y - height, anchor.y)
    } else {
        (anchor.y, anchor.y + height)
    };
    let resized = Rect::new(x0, y0, x1, y1);
    if container.area() > 0.0 && !rect_contains_rect(container, resized) {
        return None;
    }
    Some(resized)
}

/// Moves `rect` by the pointer motion from `previous` to `touch`.
///
/// The move is all or nothing: it is refused (`None`) unless the moved
/// rectangle lies strictly inside `container` on every side.
#[must_use]
pub fn move_within(touch: Point, previous: Point, rect: Rect, container: Rect) -> Option<Rect> {
    let moved = rect + (touch - previous);
    let inside = moved.x0 > container.x0
        && moved.y0 > container.y0
        && moved.x1 < container.x1
        && moved.y1 < container.y1;
    inside.then_some(moved)
}
