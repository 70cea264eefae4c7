// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the image wrapped around the crop rectangle.
//!
//! After a gesture ends, or the crop rectangle changes, the image may no longer
//! cover the crop rectangle. [`compute_correction`] works out how to fix that:
//!
//! 1. Move the image center onto the crop center. If that alone would restore
//!    coverage, the exact fix is a translation that closes the *indents*, the
//!    gaps between image edges and crop edges measured in the image's own
//!    (de-rotated) frame. See [`indent_correction`].
//! 2. Otherwise keep the center move and add the smallest scale increase that
//!    makes the image's sides span the crop rectangle's footprint at the
//!    current angle.
//!
//! [`CropBoundsFitter`] plays a correction back over time. The host calls
//! [`CropBoundsFitter::step`] from its frame callback with the current time;
//! translation follows a cubic ease-out and scale a cubic ease-in-out. Every
//! tick moves the image by the difference between where it should be and
//! where it is, so other changes made in between are not overwritten.

use core::time::Duration;

use kurbo::{Affine, Point, Rect, Vec2};
use passepartout_geometry::{Quad, rotated_rect_contains_rect};
use passepartout_timing::{Easing, Tween};

use crate::{ImageTransformState, ScaleBounds};

/// Offsets below this length count as "no move".
const NEGLIGIBLE_OFFSET: f64 = 1e-6;
/// Scale deltas below this magnitude count as "no zoom".
const NEGLIGIBLE_SCALE: f64 = 1e-9;

/// `true` when the image `corners`, rotated by `angle`, do not cover `crop`.
///
/// A degenerate crop rectangle or image quad never needs correcting.
#[must_use]
pub fn needs_correction(corners: &Quad, crop: Rect, angle: f64) -> bool {
    if is_degenerate(crop) || corners.is_degenerate() {
        return false;
    }
    !rotated_rect_contains_rect(corners, crop, angle)
}

/// Translation that closes the gaps between the image and `crop`.
///
/// Both shapes are de-rotated by `-angle`. A gap exists on the left when the
/// image's left edge lies right of the crop's left edge, on the right when the
/// image's right edge lies left of the crop's right edge, and likewise
/// vertically. Sides without a gap contribute nothing. The gaps are rotated
/// back by `angle` and the negated sum is returned.
#[must_use]
pub fn indent_correction(corners: &Quad, crop: Rect, angle: f64) -> Vec2 {
    let image = corners.rotated(-angle).bounding_rect();
    let frame = Quad::from_rect(crop).rotated(-angle).bounding_rect();

    let left = (image.x0 - frame.x0).max(0.0);
    let top = (image.y0 - frame.y0).max(0.0);
    let right = (image.x1 - frame.x1).min(0.0);
    let bottom = (image.y1 - frame.y1).min(0.0);

    let back = Affine::rotate(angle.to_radians());
    let leading = back * Point::new(left, top);
    let trailing = back * Point::new(right, bottom);
    Vec2::new(-(leading.x + trailing.x), -(leading.y + trailing.y))
}

/// How to bring the image back over the crop rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsCorrection {
    /// Translation to apply.
    pub delta: Vec2,
    /// Scale to add to the current scale. Zero when translating suffices.
    pub delta_scale: f64,
    /// Whether translating alone restores coverage.
    pub translate_only_suffices: bool,
}

impl BoundsCorrection {
    /// A correction that changes nothing.
    pub const NONE: Self = Self {
        delta: Vec2::ZERO,
        delta_scale: 0.0,
        translate_only_suffices: true,
    };

    /// `true` when applying this correction would change nothing noticeable.
    #[must_use]
    pub fn is_negligible(&self) -> bool {
        self.delta.hypot() < NEGLIGIBLE_OFFSET && self.delta_scale.abs() < NEGLIGIBLE_SCALE
    }
}

/// Computes the correction for an image with `corners` and `center` at
/// `current_scale` and `angle` against `crop`.
///
/// Degenerate inputs yield [`BoundsCorrection::NONE`].
#[must_use]
pub fn compute_correction(
    corners: &Quad,
    center: Point,
    crop: Rect,
    current_scale: f64,
    angle: f64,
) -> BoundsCorrection {
    if is_degenerate(crop) || corners.is_degenerate() {
        return BoundsCorrection::NONE;
    }
    let to_center = crop.center() - center;
    if rotated_rect_contains_rect(&corners.translated(to_center), crop, angle) {
        return BoundsCorrection {
            delta: indent_correction(corners, crop, angle),
            delta_scale: 0.0,
            translate_only_suffices: true,
        };
    }

    let footprint = Affine::rotate(angle.to_radians()).transform_rect_bbox(crop);
    let sides = corners.side_lengths();
    let needed = (footprint.width() / sides.width).max(footprint.height() / sides.height);
    BoundsCorrection {
        delta: to_center,
        delta_scale: needed * current_scale - current_scale,
        translate_only_suffices: false,
    }
}

/// Coarse state of a [`CropBoundsFitter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitterState {
    /// No correction is running.
    Idle,
    /// A correction is being played back.
    Correcting,
}

/// Outcome of one [`CropBoundsFitter::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapStep {
    /// Nothing was running; nothing was done.
    Idle,
    /// The correction continues; request another frame.
    Running,
    /// The image covers the crop rectangle again.
    Finished,
    /// The correction ran out without restoring coverage and cannot make
    /// further progress (for example because the needed scale exceeds the
    /// maximum). The fitter is idle again.
    Stalled,
}

#[derive(Clone, Copy, Debug)]
struct WrapRun {
    tween: Tween,
    start_center: Point,
    start_scale: f64,
    correction: BoundsCorrection,
    revision_at_start: u64,
}

impl WrapRun {
    fn new(image: &ImageTransformState, correction: BoundsCorrection, tween: Tween) -> Self {
        Self {
            tween,
            start_center: image.current_center(),
            start_scale: image.current_scale(),
            correction,
            revision_at_start: image.revision(),
        }
    }
}

/// Animated wrap correction, driven by an external clock.
#[derive(Clone, Debug)]
pub struct CropBoundsFitter {
    duration: Duration,
    run: Option<WrapRun>,
}

impl CropBoundsFitter {
    /// Creates an idle fitter whose corrections last `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            run: None,
        }
    }

    /// Length of one correction run.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sets the length of future correction runs.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FitterState {
        if self.run.is_some() {
            FitterState::Correcting
        } else {
            FitterState::Idle
        }
    }

    /// `true` when no correction is pending.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.run.is_none()
    }

    /// The correction being played back, if any.
    #[must_use]
    pub fn correction(&self) -> Option<BoundsCorrection> {
        self.run.map(|run| run.correction)
    }

    /// Starts a correction at `now` if the image does not cover `crop`.
    ///
    /// Returns the correction that will be played back, or `None` (and stays
    /// or becomes idle) when the image already covers the crop rectangle.
    pub fn begin(
        &mut self,
        image: &ImageTransformState,
        crop: Rect,
        now: Duration,
    ) -> Option<BoundsCorrection> {
        self.run = None;
        let corners = image.current_corners();
        let angle = image.current_angle();
        if !needs_correction(&corners, crop, angle) {
            return None;
        }
        let correction = compute_correction(
            &corners,
            image.current_center(),
            crop,
            image.current_scale(),
            angle,
        );
        tracing::debug!(
            dx = correction.delta.x,
            dy = correction.delta.y,
            delta_scale = correction.delta_scale,
            translate_only = correction.translate_only_suffices,
            "wrap correction started"
        );
        self.run = Some(WrapRun::new(
            image,
            correction,
            Tween::new(now, self.duration),
        ));
        Some(correction)
    }

    /// Advances the running correction to `now`.
    ///
    /// Work per call is constant. Once this returns anything other than
    /// [`WrapStep::Running`] the fitter is idle and further calls return
    /// [`WrapStep::Idle`] without touching `image`.
    pub fn step(
        &mut self,
        image: &mut ImageTransformState,
        crop: Rect,
        bounds: &ScaleBounds,
        now: Duration,
    ) -> WrapStep {
        let Some(mut run) = self.run.take() else {
            return WrapStep::Idle;
        };

        let progress = run.tween.progress(now);
        let BoundsCorrection {
            delta,
            delta_scale,
            translate_only_suffices,
        } = run.correction;
        let moved = Vec2::new(
            Easing::CubicOut.interpolate(progress, delta.x),
            Easing::CubicOut.interpolate(progress, delta.y),
        );
        let nudge = run.start_center + moved - image.current_center();
        if nudge.hypot() >= NEGLIGIBLE_OFFSET {
            image.translate(nudge);
        }
        if !translate_only_suffices {
            let target = run.start_scale + Easing::CubicInOut.interpolate(progress, delta_scale);
            if let Err(err) = image.zoom_in_to(target, crop.center(), bounds) {
                tracing::trace!(%err, target, "wrap zoom refused");
            }
        }
        tracing::trace!(progress, "wrap step");

        let corners = image.current_corners();
        let angle = image.current_angle();
        if !needs_correction(&corners, crop, angle) {
            return WrapStep::Finished;
        }
        if !run.tween.is_elapsed(now) {
            self.run = Some(run);
            return WrapStep::Running;
        }

        let fresh = compute_correction(
            &corners,
            image.current_center(),
            crop,
            image.current_scale(),
            angle,
        );
        if image.revision() == run.revision_at_start || fresh.is_negligible() {
            tracing::warn!(
                dx = fresh.delta.x,
                dy = fresh.delta.y,
                delta_scale = fresh.delta_scale,
                "wrap correction stalled without covering the crop rectangle"
            );
            return WrapStep::Stalled;
        }
        tracing::debug!(
            dx = fresh.delta.x,
            dy = fresh.delta.y,
            delta_scale = fresh.delta_scale,
            "wrap correction restarted"
        );
        run = WrapRun::new(image, fresh, Tween::new(now, self.duration));
        self.run = Some(run);
        WrapStep::Running
    }

    /// Stops the running correction. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        self.run.take().is_some()
    }

    /// Cancels any running correction and applies the full correction at
    /// once. Returns `true` when the image changed.
    pub fn wrap_now(
        &mut self,
        image: &mut ImageTransformState,
        crop: Rect,
        bounds: &ScaleBounds,
    ) -> bool {
        self.cancel();
        let corners = image.current_corners();
        let angle = image.current_angle();
        if !needs_correction(&corners, crop, angle) {
            return false;
        }
        let correction = compute_correction(
            &corners,
            image.current_center(),
            crop,
            image.current_scale(),
            angle,
        );
        let target_scale = image.current_scale() + correction.delta_scale;
        let mut changed = image.translate(correction.delta);
        if !correction.translate_only_suffices {
            match image.zoom_in_to(target_scale, crop.center(), bounds) {
                Ok(zoomed) => changed |= zoomed,
                Err(err) => tracing::trace!(%err, target_scale, "wrap zoom refused"),
            }
        }
        changed
    }
}

fn is_degenerate(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0 && rect.is_finite())
}
