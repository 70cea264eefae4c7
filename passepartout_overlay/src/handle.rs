// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use passepartout_geometry::corners_of;

/// A corner of the crop rectangle, in clockwise order from the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopRight,
    /// Index 2.
    BottomRight,
    /// Index 3.
    BottomLeft,
}

impl Corner {
    /// All corners in index order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Index of this corner (0 top-left .. 3 bottom-left).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }

    /// Corner at `index`, if it is in `0..4`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The diagonally opposite corner.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomRight => Self::TopLeft,
            Self::BottomLeft => Self::TopRight,
        }
    }

    /// Position of this corner on `rect`.
    #[must_use]
    pub fn of(self, rect: Rect) -> Point {
        corners_of(rect).corners()[self.index()]
    }

    /// `true` for the two left corners.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// `true` for the two top corners.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Part of the crop rectangle a pointer grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CropHandle {
    /// A corner: dragging resizes.
    Corner(Corner),
    /// The interior: dragging moves the whole rectangle.
    Body,
}

/// Finds the handle of `rect` under `point`.
///
/// The nearest corner strictly closer than `threshold` wins. Otherwise, when
/// `body_enabled` is set and `point` lies inside `rect`, the body is hit.
#[must_use]
pub fn hit_test(point: Point, rect: Rect, threshold: f64, body_enabled: bool) -> Option<CropHandle> {
    let mut best: Option<(Corner, f64)> = None;
    let corners = corners_of(rect).corners();
    for (corner, pt) in Corner::ALL.into_iter().zip(corners) {
        let distance = point.distance(pt);
        let closest = best.map_or(threshold, |(_, d)| d);
        if distance < closest {
            best = Some((corner, distance));
        }
    }
    if let Some((corner, _)) = best {
        return Some(CropHandle::Corner(corner));
    }
    (body_enabled && rect.area() > 0.0 && rect.contains(point)).then_some(CropHandle::Body)
}
