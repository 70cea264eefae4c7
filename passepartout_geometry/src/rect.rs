// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::quad::Quad;

/// Corners of `rect` in top-left, top-right, bottom-right, bottom-left order.
#[must_use]
pub fn corners_of(rect: Rect) -> Quad {
    Quad::from_rect(rect)
}

/// Center of `rect`.
#[must_use]
pub fn center_of(rect: Rect) -> Point {
    rect.center()
}

/// Edge 0→1 and edge 1→2 lengths of `corners`.
#[must_use]
pub fn side_lengths_of(corners: &Quad) -> Size {
    corners.side_lengths()
}

/// Smallest axis-aligned rectangle containing `points`.
///
/// Coordinates are rounded to one decimal before the min/max reduction, so
/// two point sets that differ only by floating noise yield the same bounds.
/// The result is normalized so that `x0 <= x1` and `y0 <= y1`. An empty slice
/// yields [`Rect::ZERO`].
#[must_use]
pub fn bounding_rect_of(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::ZERO;
    }
    let mut r = Rect::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for pt in points {
        let x = round_to_tenth(pt.x);
        let y = round_to_tenth(pt.y);
        r.x0 = r.x0.min(x);
        r.y0 = r.y0.min(y);
        r.x1 = r.x1.max(x);
        r.y1 = r.y1.max(y);
    }
    r.abs()
}

/// `true` when `outer` is non-empty and fully contains `inner` (edges may
/// touch).
#[must_use]
pub fn rect_contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 < outer.x1
        && outer.y0 < outer.y1
        && outer.x0 <= inner.x0
        && outer.y0 <= inner.y0
        && outer.x1 >= inner.x1
        && outer.y1 >= inner.y1
}

/// Tests whether the image quad `outer`, rotated by `angle` degrees, covers
/// the axis-aligned rectangle `inner`.
///
/// Both shapes are rotated by `-angle` about the origin, which makes `outer`
/// axis-aligned again. Each is then reduced to its bounding rectangle and an
/// ordinary containment test is performed.
///
/// Note that this tests the bounding box of the counter-rotated `inner`, not
/// its exact footprint, so it can report "not covered" for a rectangle that
/// is in fact covered. The wrap correction relies on exactly this predicate.
#[must_use]
pub fn rotated_rect_contains_rect(outer: &Quad, inner: Rect, angle: f64) -> bool {
    let unrotated_outer = outer.rotated(-angle).bounding_rect();
    let unrotated_inner = Quad::from_rect(inner).rotated(-angle).bounding_rect();
    rect_contains_rect(unrotated_outer, unrotated_inner)
}

/// Rounds half up to one decimal place.
fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0 + 0.5).floor() / 10.0
}


#[cfg(test)]
mod proptests {
    use kurbo::Rect;
    use proptest::prelude::*;

    use super::{corners_of, rotated_rect_contains_rect};

    proptest! {
        /// An axis-aligned rect always covers itself for any angle argument.
        #[test]
        fn prop_identical_rects_contain_each_other(
            angle in -180.0_f64..180.0,
            x0 in -1000.0_f64..1000.0,
            y0 in -1000.0_f64..1000.0,
            w in 1.0_f64..2000.0,
            h in 1.0_f64..2000.0,
        ) {
            let rect = Rect::new(x0, y0, x0 + w, y0 + h);
            prop_assert!(rotated_rect_contains_rect(&corners_of(rect), rect, angle));
        }
    }
}
