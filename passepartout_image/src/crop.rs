// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input for the external crop executor.
//!
//! A [`CropRequest`] snapshots everything an executor needs to cut the
//! committed region out of the source bitmap: the crop rectangle and image
//! bounds in view space, the current scale and angle, and an optional maximum
//! output size. [`CropRequest::region`] converts that into pixel offsets and
//! dimensions in the (possibly downscaled, rotated) source bitmap.

use kurbo::Rect;

use crate::{ImageTransformState, TransformError};

/// Pixel region to cut out of the source bitmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRegion {
    /// Horizontal offset of the region in pixels.
    pub offset_x: i32,
    /// Vertical offset of the region in pixels.
    pub offset_y: i32,
    /// Width of the region in pixels.
    pub width: u32,
    /// Height of the region in pixels.
    pub height: u32,
    /// Factor the source must be resized by before cutting (`1.0` for none).
    pub resize_scale: f64,
}

/// Everything the crop executor needs, in view space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRequest {
    /// Committed crop rectangle.
    pub crop_rect: Rect,
    /// Axis-aligned bounds of the transformed image.
    pub image_rect: Rect,
    /// Image scale at commit time.
    pub scale: f64,
    /// Image angle at commit time, in degrees.
    pub angle: f64,
    /// Largest allowed output size, if any.
    pub max_result_size: Option<(u32, u32)>,
}

impl CropRequest {
    /// Snapshots `image` against `crop_rect`.
    pub fn new(
        image: &ImageTransformState,
        crop_rect: Rect,
        max_result_size: Option<(u32, u32)>,
    ) -> Result<Self, TransformError> {
        let request = Self {
            crop_rect,
            image_rect: image.current_image_rect(),
            scale: image.current_scale(),
            angle: image.current_angle(),
            max_result_size,
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), TransformError> {
        if self.image_rect.area() <= 0.0 || !self.image_rect.is_finite() {
            return Err(TransformError::InvalidGeometry {
                reason: "image rectangle is empty",
            });
        }
        if self.crop_rect.area() <= 0.0 || !self.crop_rect.is_finite() {
            return Err(TransformError::InvalidGeometry {
                reason: "crop rectangle is empty",
            });
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(TransformError::InvalidGeometry {
                reason: "scale must be positive and finite",
            });
        }
        Ok(())
    }

    fn max_size(&self) -> Option<(f64, f64)> {
        self.max_result_size
            .filter(|&(w, h)| w > 0 && h > 0)
            .map(|(w, h)| (f64::from(w), f64::from(h)))
    }

    /// Factor the source bitmap is resized by so the output fits the maximum
    /// size. `1.0` when no resize is needed.
    #[must_use]
    pub fn resize_scale(&self) -> f64 {
        let Some((max_w, max_h)) = self.max_size() else {
            return 1.0;
        };
        let out_w = self.crop_rect.width() / self.scale;
        let out_h = self.crop_rect.height() / self.scale;
        if out_w > max_w || out_h > max_h {
            (max_w / out_w).min(max_h / out_h)
        } else {
            1.0
        }
    }

    /// Pixel region of the crop in the resized source bitmap.
    pub fn region(&self) -> Result<CropRegion, TransformError> {
        self.validate()?;
        let resize_scale = self.resize_scale();
        let scale = self.scale / resize_scale;
        Ok(CropRegion {
            offset_x: round_to_i32((self.crop_rect.x0 - self.image_rect.x0) / scale),
            offset_y: round_to_i32((self.crop_rect.y0 - self.image_rect.y0) / scale),
            width: round_to_u32(self.crop_rect.width() / scale),
            height: round_to_u32(self.crop_rect.height() / scale),
            resize_scale,
        })
    }

    /// Whether the executor has to crop at all.
    ///
    /// Returns `false` only when no maximum size is set, the image is not
    /// rotated, and every crop edge lies within `1 + round(max(w, h) / 1000)`
    /// pixels of the matching image edge. The source can then be copied as
    /// is.
    #[must_use]
    pub fn should_crop(&self, region: &CropRegion) -> bool {
        let tolerance = 1.0 + round_half_up(f64::from(region.width.max(region.height)) / 1000.0);
        let (c, i) = (self.crop_rect, self.image_rect);
        self.max_size().is_some()
            || self.angle != 0.0
            || (c.x0 - i.x0).abs() > tolerance
            || (c.y0 - i.y0).abs() > tolerance
            || (c.x1 - i.x1).abs() > tolerance
            || (c.y1 - i.y1).abs() > tolerance
    }
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel offsets fit in i32; `as` saturates otherwise"
)]
fn round_to_i32(v: f64) -> i32 {
    round_half_up(v) as i32
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel sizes fit in u32; `as` saturates otherwise"
)]
fn round_to_u32(v: f64) -> u32 {
    round_half_up(v) as u32
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{CropRegion, CropRequest};
    use crate::{ImageTransformState, TransformError};

    fn request(crop: Rect, image: Rect, scale: f64, angle: f64) -> CropRequest {
        CropRequest {
            crop_rect: crop,
            image_rect: image,
            scale,
            angle,
            max_result_size: None,
        }
    }

    #[test]
    fn region_is_crop_in_source_pixels() {
        let req = request(
            Rect::new(100.0, 200.0, 900.0, 1000.0),
            Rect::new(-300.0, 200.0, 1300.0, 1000.0),
            0.8,
            0.0,
        );
        assert_eq!(
            req.region().unwrap(),
            CropRegion {
                offset_x: 500,
                offset_y: 0,
                width: 1000,
                height: 1000,
                resize_scale: 1.0,
            }
        );
    }

    #[test]
    fn oversized_output_is_downscaled() {
        let mut req = request(
            Rect::new(0.0, 0.0, 800.0, 400.0),
            Rect::new(0.0, 0.0, 800.0, 400.0),
            0.5,
            0.0,
        );
        req.max_result_size = Some((800, 800));
        // Output would be 1600 x 800; halve it.
        let region = req.region().unwrap();
        assert_eq!(region.resize_scale, 0.5);
        assert_eq!((region.width, region.height), (800, 400));
        assert!(req.should_crop(&region));
    }

    #[test]
    fn matching_bounds_skip_cropping() {
        let req = request(
            Rect::new(0.0, 0.0, 1000.0, 500.0),
            Rect::new(0.4, -0.6, 1000.9, 501.0),
            1.0,
            0.0,
        );
        let region = req.region().unwrap();
        assert!(!req.should_crop(&region));

        let rotated = CropRequest { angle: 3.0, ..req };
        assert!(rotated.should_crop(&region));

        let inset = CropRequest {
            crop_rect: Rect::new(10.0, 0.0, 1000.0, 500.0),
            ..req
        };
        assert!(inset.should_crop(&inset.region().unwrap()));
    }

    #[test]
    fn new_snapshots_image_state() {
        let mut image = ImageTransformState::new(Size::new(2000.0, 1000.0)).unwrap();
        let crop = Rect::new(100.0, 200.0, 900.0, 1000.0);
        image.place_to_cover(crop).unwrap();
        let req = CropRequest::new(&image, crop, Some((4000, 4000))).unwrap();
        assert_eq!(req.image_rect, Rect::new(-300.0, 200.0, 1300.0, 1000.0));
        assert!((req.scale - 0.8).abs() < 1e-12);
        assert_eq!(req.max_result_size, Some((4000, 4000)));
    }

    #[test]
    fn empty_rects_are_invalid() {
        let req = request(Rect::ZERO, Rect::new(0.0, 0.0, 1.0, 1.0), 1.0, 0.0);
        assert!(matches!(
            req.region(),
            Err(TransformError::InvalidGeometry { .. })
        ));
        let req = request(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::from_origin_size(Point::ZERO, (0.0, 5.0)),
            1.0,
            0.0,
        );
        assert!(req.region().is_err());
    }
}
