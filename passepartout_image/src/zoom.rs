// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Point;
use passepartout_timing::{Easing, Tween};

use crate::{ImageTransformState, ScaleBounds};

/// Outcome of one [`ZoomAnimation::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    /// Still zooming; request another frame.
    Running,
    /// The target scale was reached.
    Finished,
    /// The animation was cancelled; nothing was done.
    Cancelled,
}

/// Animated zoom toward a target scale about a fixed point.
///
/// Used for double taps. Scale follows a cubic ease-in-out.
#[derive(Clone, Copy, Debug)]
pub struct ZoomAnimation {
    tween: Tween,
    start_scale: f64,
    delta_scale: f64,
    pivot: Point,
}

impl ZoomAnimation {
    /// Zooms from `start_scale` to `target` (capped at the bounds' maximum)
    /// about `pivot`, starting at `now`.
    #[must_use]
    pub fn new(
        start_scale: f64,
        target: f64,
        pivot: Point,
        bounds: &ScaleBounds,
        now: Duration,
        duration: Duration,
    ) -> Self {
        let target = target.min(bounds.max_scale());
        Self {
            tween: Tween::new(now, duration),
            start_scale,
            delta_scale: target - start_scale,
            pivot,
        }
    }

    /// Scale the animation ends at.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.start_scale + self.delta_scale
    }

    /// Point that stays fixed while zooming.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Advances to `now`.
    pub fn step(
        &mut self,
        image: &mut ImageTransformState,
        bounds: &ScaleBounds,
        now: Duration,
    ) -> ZoomStep {
        if self.tween.is_cancelled() {
            return ZoomStep::Cancelled;
        }
        let eased = self.tween.sample(now, Easing::CubicInOut);
        let target = self.start_scale + self.delta_scale * eased;
        if let Err(err) = image.zoom_in_to(target, self.pivot, bounds) {
            tracing::trace!(%err, target, "double-tap zoom refused");
        }
        if self.tween.is_elapsed(now) {
            // Cancel so that late steps become no-ops.
            self.tween.cancel();
            ZoomStep::Finished
        } else {
            ZoomStep::Running
        }
    }

    /// Stops the animation. Later steps return [`ZoomStep::Cancelled`].
    pub fn cancel(&mut self) {
        self.tween.cancel();
    }

    /// `true` once finished or cancelled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tween.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Size};

    use super::{ZoomAnimation, ZoomStep};
    use crate::{ImageTransformState, ScaleBounds};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn zooms_to_target_about_pivot() {
        let mut image = ImageTransformState::new(Size::new(400.0, 400.0)).unwrap();
        let bounds = ScaleBounds::from_limits(1.0, 8.0);
        let pivot = Point::new(100.0, 100.0);
        let mut anim = ZoomAnimation::new(1.0, 2.0, pivot, &bounds, ms(0), ms(200));

        assert_eq!(anim.step(&mut image, &bounds, ms(100)), ZoomStep::Running);
        assert!((image.current_scale() - 1.5).abs() < 1e-9);
        assert_eq!(anim.step(&mut image, &bounds, ms(200)), ZoomStep::Finished);
        assert!((image.current_scale() - 2.0).abs() < 1e-9);
        assert!(anim.is_complete());

        // The pivot is a fixed point of the zoom.
        let mapped = image.matrix().map_point(pivot);
        assert!((mapped - pivot).hypot() < 1e-9);
    }

    #[test]
    fn target_is_capped_at_max() {
        let bounds = ScaleBounds::from_limits(1.0, 3.0);
        let anim = ZoomAnimation::new(2.0, 9.0, Point::ZERO, &bounds, ms(0), ms(200));
        assert_eq!(anim.target_scale(), 3.0);
    }

    #[test]
    fn cancelled_animation_does_nothing() {
        let mut image = ImageTransformState::new(Size::new(400.0, 400.0)).unwrap();
        let bounds = ScaleBounds::from_limits(1.0, 8.0);
        let mut anim = ZoomAnimation::new(1.0, 4.0, Point::ZERO, &bounds, ms(0), ms(200));
        anim.cancel();
        assert_eq!(anim.step(&mut image, &bounds, ms(100)), ZoomStep::Cancelled);
        assert_eq!(image.revision(), 0);
    }
}
