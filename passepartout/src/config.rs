// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use passepartout_image::CropConfig;
use passepartout_overlay::{AspectRatio, OverlayConfig};

use crate::SessionError;

/// Configuration of a [`CropSession`](crate::CropSession).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Transform engine settings.
    pub crop: CropConfig,
    /// Crop-rectangle editor settings.
    pub overlay: OverlayConfig,
    /// Initial aspect ratio of the crop rectangle.
    pub aspect_ratio: AspectRatio,
}

impl SessionConfig {
    /// Sets [`SessionConfig::crop`].
    #[must_use]
    pub fn with_crop(mut self, crop: CropConfig) -> Self {
        self.crop = crop;
        self
    }

    /// Sets [`SessionConfig::overlay`].
    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    /// Sets [`SessionConfig::aspect_ratio`].
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Validates both halves of the configuration.
    pub fn validate(&self) -> Result<(), SessionError> {
        self.crop.validate()?;
        self.overlay.validate()?;
        if let AspectRatio::Fixed(ratio) = self.aspect_ratio
            && !(ratio.is_finite() && ratio > 0.0)
        {
            return Err(passepartout_image::ConfigError::NotPositive {
                field: "aspect_ratio",
                value: ratio,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use passepartout_image::{ConfigError, CropConfig};
    use passepartout_overlay::AspectRatio;

    use super::SessionConfig;
    use crate::SessionError;

    #[test]
    fn fixed_ratio_must_be_positive() {
        assert!(SessionConfig::default().validate().is_ok());
        let square = SessionConfig::default().with_aspect_ratio(AspectRatio::Fixed(1.0));
        assert!(square.validate().is_ok());

        for ratio in [0.0, -2.0, f64::INFINITY] {
            let config = SessionConfig::default().with_aspect_ratio(AspectRatio::Fixed(ratio));
            assert!(matches!(
                config.validate(),
                Err(SessionError::Config(ConfigError::NotPositive {
                    field: "aspect_ratio",
                    ..
                }))
            ));
        }
    }

    #[test]
    fn crop_half_is_checked_first() {
        let config = SessionConfig::default()
            .with_crop(CropConfig::default().with_double_tap_scale_steps(0))
            .with_aspect_ratio(AspectRatio::Fixed(-1.0));
        assert!(matches!(
            config.validate(),
            Err(SessionError::Config(ConfigError::Zero {
                field: "double_tap_scale_steps"
            }))
        ));
    }
}
