// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use passepartout_image::TransformError;
use thiserror::Error;

/// Boxed collaborator error.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a [`CropSession`](crate::CropSession).
#[derive(Debug, Error)]
pub enum SessionError {
    /// No image has been loaded and laid out yet.
    #[error("no image has been loaded and laid out yet")]
    NotReady,
    /// The engine configuration is invalid.
    #[error("invalid engine configuration")]
    Config(#[from] passepartout_image::ConfigError),
    /// The overlay configuration is invalid.
    #[error("invalid overlay configuration")]
    OverlayConfig(#[from] passepartout_overlay::ConfigError),
    /// A transform operation was refused.
    #[error("transform refused")]
    Transform(#[from] TransformError),
    /// The image source failed to deliver an image.
    #[error("image failed to load")]
    ImageLoad(#[source] BoxError),
    /// The crop executor failed.
    #[error("crop failed")]
    Crop(#[source] BoxError),
}
