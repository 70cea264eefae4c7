// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::quad::Quad;

/// Uniform-scale, rotation and translation transform from image space into
/// view space.
///
/// `ImageMatrix` wraps a [`kurbo::Affine`] but only exposes compositions that
/// keep it decomposable into a single positive scale, a single angle and a
/// translation. Every `post_*` operation is applied *after* the existing
/// content, in call order, so a sequence of gesture deltas composes exactly as
/// the user performed them on screen.
///
/// Each mutator returns `true` when the matrix changed. Zero deltas (a zero
/// translation, a scale factor of `1.0`, a zero angle) leave the matrix
/// untouched and return `false`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMatrix {
    affine: Affine,
}

impl Default for ImageMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ImageMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        affine: Affine::IDENTITY,
    };

    /// Returns the identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Initial placement: uniform `scale` about the origin, then `translation`.
    ///
    /// Non-positive or non-finite scales fall back to `1.0`.
    #[must_use]
    pub fn from_scale_translate(scale: f64, translation: Vec2) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            affine: Affine::translate(translation) * Affine::scale(scale),
        }
    }

    /// Returns the underlying affine transform.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.affine
    }

    /// Resets to the identity transform.
    pub fn reset(&mut self) {
        self.affine = Affine::IDENTITY;
    }

    /// Translates by `delta` in view space.
    pub fn post_translate(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return false;
        }
        self.affine = Affine::translate(delta) * self.affine;
        true
    }

    /// Scales uniformly by `factor` about `pivot` (view space).
    ///
    /// Factors that are not strictly positive and finite are ignored, as is
    /// the multiplicative identity.
    pub fn post_scale(&mut self, factor: f64, pivot: Point) -> bool {
        if factor == 1.0 || !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let pivot = pivot.to_vec2();
        self.affine =
            Affine::translate(pivot) * Affine::scale(factor) * Affine::translate(-pivot) * self.affine;
        true
    }

    /// Rotates by `degrees` about `pivot` (view space). Positive is clockwise
    /// on a y-down screen.
    pub fn post_rotate(&mut self, degrees: f64, pivot: Point) -> bool {
        if degrees == 0.0 || !degrees.is_finite() {
            return false;
        }
        let pivot = pivot.to_vec2();
        self.affine = Affine::translate(pivot)
            * Affine::rotate(degrees.to_radians())
            * Affine::translate(-pivot)
            * self.affine;
        true
    }

    /// Current uniform scale: the length of the transformed x axis.
    #[must_use]
    pub fn scale(&self) -> f64 {
        let [a, b, ..] = self.affine.as_coeffs();
        a.hypot(b)
    }

    /// Current rotation in degrees, normalized to `(-180, 180]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let [a, _, c, ..] = self.affine.as_coeffs();
        normalize_degrees(-c.atan2(a).to_degrees())
    }

    /// Current translation (where the image-space origin lands).
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        let [.., e, f] = self.affine.as_coeffs();
        Vec2::new(e, f)
    }

    /// Maps a single point from image space to view space.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        self.affine * pt
    }

    /// Maps every point of `points` in place.
    pub fn map_points(&self, points: &mut [Point]) {
        for pt in points {
            *pt = self.affine * *pt;
        }
    }

    /// Maps the corners of `rect`.
    ///
    /// The result is a quadrilateral and is not re-axis-aligned, since a
    /// rotated rectangle is generally not axis-aligned.
    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Quad {
        Quad::from_rect(rect).transformed(self.affine)
    }

    /// Returns the inverse transform (view space back to image space).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            affine: self.affine.inverse(),
        }
    }
}

/// Normalizes an angle in degrees into `(-180, 180]`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    let mut d = degrees % 360.0;
    if d <= -180.0 {
        d += 360.0;
    } else if d > 180.0 {
        d -= 360.0;
    }
    d
}
