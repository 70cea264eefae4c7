// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::ConfigError;

/// Tunables of the image transform engine.
///
/// The defaults reproduce the behavior users of mobile crop screens expect: a
/// tenfold zoom range, a half-second wrap animation and five double-tap steps
/// from minimum to maximum zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropConfig {
    /// `max_scale = min_scale * max_scale_multiplier`.
    pub max_scale_multiplier: f64,
    /// Length of the animated wrap correction.
    pub wrap_duration: Duration,
    /// Number of double taps needed to go from minimum to maximum scale.
    pub double_tap_scale_steps: u32,
    /// Length of the double-tap zoom animation.
    pub double_tap_zoom_duration: Duration,
    /// Largest output size in pixels, if the result should be downscaled.
    pub max_result_size: Option<(u32, u32)>,
    /// Whether pinch gestures zoom the image.
    pub scale_enabled: bool,
    /// Whether rotation gestures rotate the image.
    pub rotate_enabled: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            max_scale_multiplier: 10.0,
            wrap_duration: Duration::from_millis(500),
            double_tap_scale_steps: 5,
            double_tap_zoom_duration: Duration::from_millis(200),
            max_result_size: None,
            scale_enabled: true,
            rotate_enabled: true,
        }
    }
}

impl CropConfig {
    /// Sets [`CropConfig::max_scale_multiplier`].
    #[must_use]
    pub fn with_max_scale_multiplier(mut self, multiplier: f64) -> Self {
        self.max_scale_multiplier = multiplier;
        self
    }

    /// Sets [`CropConfig::wrap_duration`].
    #[must_use]
    pub fn with_wrap_duration(mut self, duration: Duration) -> Self {
        self.wrap_duration = duration;
        self
    }

    /// Sets [`CropConfig::double_tap_scale_steps`].
    #[must_use]
    pub fn with_double_tap_scale_steps(mut self, steps: u32) -> Self {
        self.double_tap_scale_steps = steps;
        self
    }

    /// Sets [`CropConfig::double_tap_zoom_duration`].
    #[must_use]
    pub fn with_double_tap_zoom_duration(mut self, duration: Duration) -> Self {
        self.double_tap_zoom_duration = duration;
        self
    }

    /// Sets [`CropConfig::max_result_size`].
    #[must_use]
    pub fn with_max_result_size(mut self, size: Option<(u32, u32)>) -> Self {
        self.max_result_size = size;
        self
    }

    /// Sets [`CropConfig::scale_enabled`].
    #[must_use]
    pub fn with_scale_enabled(mut self, enabled: bool) -> Self {
        self.scale_enabled = enabled;
        self
    }

    /// Sets [`CropConfig::rotate_enabled`].
    #[must_use]
    pub fn with_rotate_enabled(mut self, enabled: bool) -> Self {
        self.rotate_enabled = enabled;
        self
    }

    /// Checks that every value is usable.
    ///
    /// Durations may be zero, in which case the animation completes on its
    /// first step. The multiplier must be positive and finite, and the
    /// double-tap step count must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_scale_multiplier.is_finite() || self.max_scale_multiplier <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "max_scale_multiplier",
                value: self.max_scale_multiplier,
            });
        }
        if self.double_tap_scale_steps == 0 {
            return Err(ConfigError::Zero {
                field: "double_tap_scale_steps",
            });
        }
        if let Some((w, h)) = self.max_result_size
            && (w == 0 || h == 0)
        {
            return Err(ConfigError::Zero {
                field: "max_result_size",
            });
        }
        Ok(())
    }
}
