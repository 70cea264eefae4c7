// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::TransformError;

/// Relative slack applied when comparing a resulting scale to a bound.
///
/// `current * (target / current)` is not always bit-identical to `target`.
const BOUND_EPSILON: f64 = 1e-9;

/// Legal scale range for an image of a given natural size under a given crop
/// rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    min_scale: f64,
    max_scale: f64,
}

impl ScaleBounds {
    /// Computes the bounds for `natural` under `crop`.
    ///
    /// The minimum is the smallest scale at which *some* orientation of the
    /// image (as is, or turned a quarter) still covers the crop rectangle.
    /// The maximum is `min_scale * max_scale_multiplier`.
    ///
    /// ```
    /// use kurbo::{Rect, Size};
    /// use passepartout_image::ScaleBounds;
    ///
    /// let crop = Rect::from_center_size((500.0, 500.0), (800.0, 800.0));
    /// let bounds = ScaleBounds::compute(Size::new(2000.0, 1000.0), crop, 10.0).unwrap();
    /// assert!((bounds.min_scale() - 0.8).abs() < 1e-12);
    /// assert!((bounds.max_scale() - 8.0).abs() < 1e-12);
    /// ```
    pub fn compute(
        natural: Size,
        crop: Rect,
        max_scale_multiplier: f64,
    ) -> Result<Self, TransformError> {
        let (nw, nh) = (natural.width, natural.height);
        let (cw, ch) = (crop.width(), crop.height());
        if !(nw > 0.0 && nh > 0.0 && nw.is_finite() && nh.is_finite()) {
            return Err(TransformError::InvalidGeometry {
                reason: "image has zero or non-finite natural size",
            });
        }
        if !(cw > 0.0 && ch > 0.0 && cw.is_finite() && ch.is_finite()) {
            return Err(TransformError::InvalidGeometry {
                reason: "crop rectangle is empty",
            });
        }
        if !(max_scale_multiplier.is_finite() && max_scale_multiplier > 0.0) {
            return Err(TransformError::InvalidGeometry {
                reason: "max scale multiplier must be positive",
            });
        }
        let cover_upright = (cw / nw).max(ch / nh);
        let cover_turned = (cw / nh).max(ch / nw);
        let min_scale = cover_upright.min(cover_turned);
        Ok(Self {
            min_scale,
            max_scale: min_scale * max_scale_multiplier,
        })
    }

    /// Bounds with explicit limits. `min` and `max` are swapped if needed.
    #[must_use]
    pub fn from_limits(min: f64, max: f64) -> Self {
        Self {
            min_scale: min.min(max),
            max_scale: min.max(max),
        }
    }

    /// Smallest legal scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest legal scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// `true` when `scale` lies within the bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min_scale * (1.0 - BOUND_EPSILON)
            && scale <= self.max_scale * (1.0 + BOUND_EPSILON)
    }

    /// Clamps `scale` into the bounds.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Whether multiplying `current` by `delta` is admissible.
    ///
    /// A growing delta is rejected when it would pass `max_scale`, and a
    /// shrinking one when it would pass `min_scale`. The bound is not snapped
    /// to; the whole delta is refused. A delta of exactly `1.0` is always
    /// admissible.
    #[must_use]
    pub fn allows(&self, current: f64, delta: f64) -> bool {
        self.check(current, delta).is_ok()
    }

    /// Like [`ScaleBounds::allows`], but reports why a delta is refused.
    pub fn check(&self, current: f64, delta: f64) -> Result<(), TransformError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(TransformError::InvalidGeometry {
                reason: "scale delta must be positive and finite",
            });
        }
        let requested = current * delta;
        let refused = (delta > 1.0 && requested > self.max_scale * (1.0 + BOUND_EPSILON))
            || (delta < 1.0 && requested < self.min_scale * (1.0 - BOUND_EPSILON));
        if refused {
            return Err(TransformError::OutOfBounds {
                requested,
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }

    /// Target scale of a double tap from `current`.
    ///
    /// Each tap multiplies the scale by `(max / min)^(1 / steps)`, so `steps`
    /// taps walk from minimum to maximum evenly in log space. The result is
    /// capped at `max_scale`.
    #[must_use]
    pub fn double_tap_target(&self, current: f64, steps: u32) -> f64 {
        let ratio = self.max_scale / self.min_scale;
        let step = ratio.powf(1.0 / f64::from(steps.max(1)));
        (current * step).min(self.max_scale)
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::ScaleBounds;

    proptest! {
        /// Any scale inside the bounds is reachable from any in-bounds scale.
        #[test]
        fn prop_in_bounds_targets_are_admitted(
            min in 0.01_f64..5.0,
            multiplier in 1.0_f64..20.0,
            current_t in 0.0_f64..=1.0,
            target_t in 0.0_f64..=1.0,
        ) {
            let b = ScaleBounds::from_limits(min, min * multiplier);
            let current = b.min_scale() + (b.max_scale() - b.min_scale()) * current_t;
            let target = b.min_scale() + (b.max_scale() - b.min_scale()) * target_t;
            prop_assert!(b.allows(current, target / current));
        }

        /// Targets clearly outside the bounds are refused.
        #[test]
        fn prop_out_of_bounds_targets_are_refused(
            min in 0.01_f64..5.0,
            multiplier in 1.0_f64..20.0,
            current_t in 0.0_f64..=1.0,
            overshoot in 1.001_f64..10.0,
            above in any::<bool>(),
        ) {
            let b = ScaleBounds::from_limits(min, min * multiplier);
            let current = b.min_scale() + (b.max_scale() - b.min_scale()) * current_t;
            let target = if above {
                b.max_scale() * overshoot
            } else {
                b.min_scale() / overshoot
            };
            prop_assert!(!b.allows(current, target / current));
        }
    }
}
