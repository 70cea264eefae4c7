// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use thiserror::Error;

/// Which crop-rectangle gestures the editor accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FreestyleMode {
    /// The crop rectangle is fixed; all touches go to the image.
    #[default]
    Disabled,
    /// Corners resize and the body moves the crop rectangle.
    Enabled,
    /// Corners resize; touches on the body are left to the image.
    EnabledWithPassThrough,
}

/// Tunables of the crop-rectangle editor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Smallest allowed width and height of the crop rectangle.
    pub min_size: f64,
    /// Radius around a corner within which a touch grabs it.
    pub touch_threshold: f64,
    /// Accepted gestures.
    pub freestyle: FreestyleMode,
    /// Whether grabbed corners actually resize the rectangle.
    pub drag_frame: bool,
    /// Whether corner resizes keep the current aspect ratio.
    pub lock_aspect_ratio: bool,
    /// Length of the glide back to the container center after a release.
    pub recenter_duration: Duration,
    /// Overshoot of the recenter glide.
    pub overshoot_tension: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            min_size: 100.0,
            touch_threshold: 30.0,
            freestyle: FreestyleMode::Disabled,
            drag_frame: true,
            lock_aspect_ratio: false,
            recenter_duration: Duration::from_millis(1000),
            overshoot_tension: 2.0,
        }
    }
}

impl OverlayConfig {
    /// Sets [`OverlayConfig::min_size`].
    #[must_use]
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Sets [`OverlayConfig::touch_threshold`].
    #[must_use]
    pub fn with_touch_threshold(mut self, threshold: f64) -> Self {
        self.touch_threshold = threshold;
        self
    }

    /// Sets [`OverlayConfig::freestyle`].
    #[must_use]
    pub fn with_freestyle(mut self, mode: FreestyleMode) -> Self {
        self.freestyle = mode;
        self
    }

    /// Sets [`OverlayConfig::drag_frame`].
    #[must_use]
    pub fn with_drag_frame(mut self, drag_frame: bool) -> Self {
        self.drag_frame = drag_frame;
        self
    }

    /// Sets [`OverlayConfig::lock_aspect_ratio`].
    #[must_use]
    pub fn with_lock_aspect_ratio(mut self, lock: bool) -> Self {
        self.lock_aspect_ratio = lock;
        self
    }

    /// Sets [`OverlayConfig::recenter_duration`].
    #[must_use]
    pub fn with_recenter_duration(mut self, duration: Duration) -> Self {
        self.recenter_duration = duration;
        self
    }

    /// Sets [`OverlayConfig::overshoot_tension`].
    #[must_use]
    pub fn with_overshoot_tension(mut self, tension: f64) -> Self {
        self.overshoot_tension = tension;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            return Err(ConfigError::Negative {
                field: "min_size",
                value: self.min_size,
            });
        }
        if !self.touch_threshold.is_finite() || self.touch_threshold < 0.0 {
            return Err(ConfigError::Negative {
                field: "touch_threshold",
                value: self.touch_threshold,
            });
        }
        if !self.overshoot_tension.is_finite() || self.overshoot_tension < 0.0 {
            return Err(ConfigError::Negative {
                field: "overshoot_tension",
                value: self.overshoot_tension,
            });
        }
        Ok(())
    }
}

/// An overlay configuration value is out of range.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A length or tension must be finite and not negative.
    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
