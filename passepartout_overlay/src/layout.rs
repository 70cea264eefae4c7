// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Target aspect ratio of the crop rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatio {
    /// Use the loaded image's own ratio.
    #[default]
    Source,
    /// A fixed width-over-height ratio.
    Fixed(f64),
}

impl AspectRatio {
    /// Resolves to a concrete ratio for an image of `natural` size.
    ///
    /// Returns `None` when the ratio would not be positive and finite.
    #[must_use]
    pub fn resolve(self, natural: Size) -> Option<f64> {
        let ratio = match self {
            Self::Source => natural.width / natural.height,
            Self::Fixed(ratio) => ratio,
        };
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }
}

/// Largest rectangle of `aspect` centered in `container`, on whole pixels.
///
/// Width and height are truncated to integers, as is the centering offset.
/// Returns `None` for an empty container or an unusable ratio.
#[must_use]
pub fn centered_crop_rect(container: Rect, aspect: f64) -> Option<Rect> {
    let (cw, ch) = (container.width(), container.height());
    if !(cw > 0.0 && ch > 0.0 && aspect.is_finite() && aspect > 0.0) {
        return None;
    }
    let (cw, ch) = (cw.trunc(), ch.trunc());
    let height = (cw / aspect).trunc();
    let rect = if height > ch {
        let width = (ch * aspect).trunc();
        let half_diff = ((cw - width) / 2.0).trunc();
        Rect::new(
            container.x0 + half_diff,
            container.y0,
            container.x0 + half_diff + width,
            container.y0 + ch,
        )
    } else {
        let half_diff = ((ch - height) / 2.0).trunc();
        Rect::new(
            container.x0,
            container.y0 + half_diff,
            container.x0 + cw,
            container.y0 + half_diff + height,
        )
    };
    Some(rect)
}
