// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::rect::bounding_rect_of;

/// Four corners of a possibly rotated rectangle.
///
/// Corners are always stored in the order top-left, top-right, bottom-right,
/// bottom-left of the *source* rectangle, so after a rotation "top-left" means
/// "where the source top-left ended up":
///
/// ```text
/// 0 -------> 1
/// ^          |
/// |          v
/// 3 <------- 2
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    corners: [Point; 4],
}

impl Quad {
    /// Creates a quad from corners given in top-left, top-right,
    /// bottom-right, bottom-left order.
    #[must_use]
    pub const fn new(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    /// Corners of an axis-aligned rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new([
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ])
    }

    /// Returns the four corners.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Returns the corner at `index` (0 top-left .. 3 bottom-left).
    #[must_use]
    pub fn corner(&self, index: usize) -> Option<Point> {
        self.corners.get(index).copied()
    }

    /// Lengths of edge 0→1 ("width") and edge 1→2 ("height").
    #[must_use]
    pub fn side_lengths(&self) -> Size {
        let [p0, p1, p2, _] = self.corners;
        Size::new(p0.distance(p1), p1.distance(p2))
    }

    /// Center of the quad (midpoint of its diagonal).
    #[must_use]
    pub fn center(&self) -> Point {
        self.corners[0].midpoint(self.corners[2])
    }

    /// Smallest axis-aligned rectangle containing all corners, see
    /// [`bounding_rect_of`].
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        bounding_rect_of(&self.corners)
    }

    /// `true` when either side has zero length or any coordinate is not
    /// finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let sides = self.side_lengths();
        !(sides.width.is_finite() && sides.height.is_finite())
            || sides.width <= 0.0
            || sides.height <= 0.0
    }

    /// Returns this quad mapped through `affine`.
    #[must_use]
    pub fn transformed(&self, affine: Affine) -> Self {
        Self::new(self.corners.map(|pt| affine * pt))
    }

    /// Returns this quad translated by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.corners.map(|pt| pt + delta))
    }

    /// Returns this quad rotated by `degrees` about the origin.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Self {
        self.transformed(Affine::rotate(degrees.to_radians()))
    }
}

impl From<Rect> for Quad {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
