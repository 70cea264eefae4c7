// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use passepartout_geometry::{ImageMatrix, Quad};

use crate::{ScaleBounds, TransformError};

/// Transform of one loaded image into view space.
///
/// The state owns the image's natural size and its [`ImageMatrix`]. Current
/// corners and center are derived values: after every change they are
/// re-mapped from the natural-size rectangle through the whole matrix, never
/// nudged incrementally, so long gesture sessions do not accumulate drift.
///
/// Mutators return `Ok(true)` or `true` when the transform changed and
/// `false` for no-op deltas. Each change bumps [`ImageTransformState::revision`].
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTransformState {
    natural_size: Size,
    matrix: ImageMatrix,
    initial_corners: Quad,
    initial_center: Point,
    current_corners: Quad,
    current_center: Point,
    revision: u64,
}

impl ImageTransformState {
    /// State for an image of `natural_size` with the identity transform.
    pub fn new(natural_size: Size) -> Result<Self, TransformError> {
        Self::with_matrix(natural_size, ImageMatrix::IDENTITY)
    }

    /// State for an image of `natural_size` with an explicit initial matrix.
    pub fn with_matrix(natural_size: Size, matrix: ImageMatrix) -> Result<Self, TransformError> {
        let Size { width, height } = natural_size;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(TransformError::InvalidGeometry {
                reason: "image has zero or non-finite natural size",
            });
        }
        let natural_rect = natural_size.to_rect();
        let initial_corners = Quad::from_rect(natural_rect);
        let initial_center = natural_rect.center();
        let mut state = Self {
            natural_size,
            matrix,
            initial_corners,
            initial_center,
            current_corners: initial_corners,
            current_center: initial_center,
            revision: 0,
        };
        state.remap();
        Ok(state)
    }

    /// Natural (unscaled) size of the image.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    /// The current matrix.
    #[must_use]
    pub fn matrix(&self) -> ImageMatrix {
        self.matrix
    }

    /// The current matrix as an affine transform, for rendering.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.matrix.affine()
    }

    /// Image corners in view space (top-left, top-right, bottom-right,
    /// bottom-left of the natural image).
    #[must_use]
    pub fn current_corners(&self) -> Quad {
        self.current_corners
    }

    /// Image center in view space.
    #[must_use]
    pub fn current_center(&self) -> Point {
        self.current_center
    }

    /// Current uniform scale.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.matrix.scale()
    }

    /// Current angle in degrees, in `(-180, 180]`.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        self.matrix.angle()
    }

    /// Axis-aligned bounds of the current corners.
    #[must_use]
    pub fn current_image_rect(&self) -> Rect {
        self.current_corners.bounding_rect()
    }

    /// Counter bumped on every effective change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Translates by `delta` in view space.
    pub fn translate(&mut self, delta: Vec2) -> bool {
        self.apply(|m| m.post_translate(delta))
    }

    /// Scales by `delta` about `pivot` if `bounds` admits the result.
    ///
    /// A refused delta leaves the state untouched; the bound is never snapped
    /// to.
    pub fn scale_about(
        &mut self,
        delta: f64,
        pivot: Point,
        bounds: &ScaleBounds,
    ) -> Result<bool, TransformError> {
        if delta == 1.0 {
            return Ok(false);
        }
        bounds.check(self.current_scale(), delta)?;
        Ok(self.apply(|m| m.post_scale(delta, pivot)))
    }

    /// Rotates by `degrees` about `pivot`. Rotation is never clamped.
    pub fn rotate_about(&mut self, degrees: f64, pivot: Point) -> bool {
        self.apply(|m| m.post_rotate(degrees, pivot))
    }

    /// Scales about `pivot` so that the current scale becomes `target`.
    ///
    /// Targets above the maximum or below the minimum are refused.
    pub fn zoom_to(
        &mut self,
        target: f64,
        pivot: Point,
        bounds: &ScaleBounds,
    ) -> Result<bool, TransformError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(TransformError::InvalidGeometry {
                reason: "target scale must be positive and finite",
            });
        }
        if !bounds.contains(target) {
            return Err(TransformError::OutOfBounds {
                requested: target,
                min: bounds.min_scale(),
                max: bounds.max_scale(),
            });
        }
        self.scale_about(target / self.current_scale(), pivot, bounds)
    }

    /// Scales about `pivot` toward `target`, checking a growing scale against
    /// the maximum only.
    ///
    /// Unlike [`ImageTransformState::zoom_to`] this admits targets below the
    /// minimum as long as the scale grows. Settling animations start below a
    /// minimum that rose with a larger crop rectangle and climb toward it.
    pub fn zoom_in_to(
        &mut self,
        target: f64,
        pivot: Point,
        bounds: &ScaleBounds,
    ) -> Result<bool, TransformError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(TransformError::InvalidGeometry {
                reason: "target scale must be positive and finite",
            });
        }
        self.scale_about(target / self.current_scale(), pivot, bounds)
    }

    /// Replaces the transform with the initial placement for `crop`.
    ///
    /// The image is scaled by `max(crop.w / w, crop.h / h)`, the smallest
    /// upright scale that covers the crop rectangle, and centered on it.
    pub fn place_to_cover(&mut self, crop: Rect) -> Result<(), TransformError> {
        let (cw, ch) = (crop.width(), crop.height());
        if !(cw > 0.0 && ch > 0.0 && cw.is_finite() && ch.is_finite()) {
            return Err(TransformError::InvalidGeometry {
                reason: "crop rectangle is empty",
            });
        }
        let Size { width, height } = self.natural_size;
        let scale = (cw / width).max(ch / height);
        let translation = Vec2::new(
            (cw - width * scale) / 2.0 + crop.x0,
            (ch - height * scale) / 2.0 + crop.y0,
        );
        self.matrix = ImageMatrix::from_scale_translate(scale, translation);
        self.remap();
        self.revision += 1;
        Ok(())
    }

    /// Returns a snapshot of the derived quantities for logging or tests.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        TransformDebugInfo {
            natural_size: self.natural_size,
            scale: self.current_scale(),
            angle: self.current_angle(),
            translation: self.matrix.translation(),
            center: self.current_center,
            image_rect: self.current_image_rect(),
            revision: self.revision,
        }
    }

    fn apply(&mut self, op: impl FnOnce(&mut ImageMatrix) -> bool) -> bool {
        if !op(&mut self.matrix) {
            return false;
        }
        self.remap();
        self.revision += 1;
        true
    }

    fn remap(&mut self) {
        self.current_corners = self.initial_corners.transformed(self.matrix.affine());
        self.current_center = self.matrix.map_point(self.initial_center);
    }
}

/// Snapshot of an [`ImageTransformState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformDebugInfo {
    /// Natural image size.
    pub natural_size: Size,
    /// Current uniform scale.
    pub scale: f64,
    /// Current angle in degrees.
    pub angle: f64,
    /// Translation component of the matrix.
    pub translation: Vec2,
    /// Image center in view space.
    pub center: Point,
    /// Axis-aligned bounds of the image in view space.
    pub image_rect: Rect,
    /// Change counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::ImageTransformState;
    use crate::{ScaleBounds, TransformError};

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn placed() -> (ImageTransformState, Rect) {
        let crop = Rect::new(100.0, 200.0, 900.0, 1000.0);
        let mut state = ImageTransformState::new(Size::new(2000.0, 1000.0)).unwrap();
        state.place_to_cover(crop).unwrap();
        (state, crop)
    }

    #[test]
    fn zero_size_image_is_invalid() {
        assert!(matches!(
            ImageTransformState::new(Size::new(0.0, 10.0)),
            Err(TransformError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn place_to_cover_centers_on_crop() {
        let (state, crop) = placed();
        assert!(near(state.current_scale(), 0.8));
        let c = state.current_center();
        assert!(near(c.x, crop.center().x) && near(c.y, crop.center().y));
        let r = state.current_image_rect();
        assert_eq!(r, Rect::new(-300.0, 200.0, 1300.0, 1000.0));
    }

    #[test]
    fn place_to_cover_rejects_empty_crop() {
        let mut state = ImageTransformState::new(Size::new(10.0, 10.0)).unwrap();
        assert!(state.place_to_cover(Rect::ZERO).is_err());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn no_op_mutators_leave_state_bit_identical() {
        let (mut state, _) = placed();
        let bounds = ScaleBounds::from_limits(0.1, 10.0);
        let before = state.clone();
        assert!(!state.translate(Vec2::ZERO));
        assert_eq!(state.scale_about(1.0, Point::new(3.0, 4.0), &bounds), Ok(false));
        assert!(!state.rotate_about(0.0, Point::new(3.0, 4.0)));
        assert_eq!(state, before);
    }

    #[test]
    fn refused_scale_leaves_state_untouched() {
        let (mut state, crop) = placed();
        let bounds = ScaleBounds::compute(state.natural_size(), crop, 10.0).unwrap();
        let before = state.clone();
        assert!(matches!(
            state.scale_about(0.5, crop.center(), &bounds),
            Err(TransformError::OutOfBounds { .. })
        ));
        assert_eq!(state, before);

        assert_eq!(state.scale_about(2.0, crop.center(), &bounds), Ok(true));
        assert!(near(state.current_scale(), 1.6));
        assert_eq!(state.revision(), before.revision() + 1);
    }

    #[test]
    fn corners_are_derived_from_full_transform() {
        let (mut state, crop) = placed();
        for _ in 0..360 {
            state.rotate_about(1.0, crop.center());
        }
        let fresh = state.matrix().map_rect(state.natural_size().to_rect());
        assert_eq!(state.current_corners(), fresh);
        assert!(state.current_angle().abs() < 1e-6);
    }

    #[test]
    fn zoom_to_respects_bounds() {
        let (mut state, crop) = placed();
        let bounds = ScaleBounds::compute(state.natural_size(), crop, 10.0).unwrap();
        assert_eq!(state.zoom_to(4.0, crop.center(), &bounds), Ok(true));
        assert!(near(state.current_scale(), 4.0));
        assert!(state.zoom_to(8.5, crop.center(), &bounds).is_err());
        assert!(state.zoom_to(0.5, crop.center(), &bounds).is_err());
        assert!(near(state.current_scale(), 4.0));
    }

    #[test]
    fn zoom_in_to_climbs_from_below_minimum() {
        let (mut state, crop) = placed();
        // The crop rectangle grew: the minimum is now above the current 0.8.
        let bounds = ScaleBounds::from_limits(1.0, 10.0);
        assert!(state.zoom_to(0.9, crop.center(), &bounds).is_err());

        assert_eq!(state.zoom_in_to(0.9, crop.center(), &bounds), Ok(true));
        assert!(near(state.current_scale(), 0.9));
        assert!(state.zoom_in_to(0.85, crop.center(), &bounds).is_err());
        assert!(state.zoom_in_to(10.5, crop.center(), &bounds).is_err());
        assert!(state.zoom_in_to(f64::NAN, crop.center(), &bounds).is_err());
        assert!(near(state.current_scale(), 0.9));
    }

    #[test]
    fn debug_info_reflects_state() {
        let (mut state, _) = placed();
        state.translate(Vec2::new(10.0, 0.0));
        let info = state.debug_info();
        assert!(near(info.scale, 0.8));
        assert!(near(info.translation.x, -290.0));
        assert_eq!(info.revision, 2);
    }
}
