// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passepartout_image --heading-base-level=0

//! Passepartout Image: the transform engine behind an interactive crop screen.
//!
//! An [`ImageTransformState`] holds the transform of one image into view
//! space. Around it:
//!
//! - [`ScaleBounds`] gates every scale change against the smallest scale that
//!   still covers the crop rectangle and a configurable maximum.
//! - [`CropBoundsFitter`] restores coverage after a gesture, either at once
//!   ([`CropBoundsFitter::wrap_now`]) or animated over time
//!   ([`CropBoundsFitter::begin`] + [`CropBoundsFitter::step`]).
//! - [`ZoomAnimation`] plays back a double-tap zoom.
//! - [`CropRequest`] snapshots the state for an external crop executor.
//!
//! Nothing here owns a timer or talks to a renderer. Animations take the
//! current time as a [`Duration`](core::time::Duration) argument, and callers
//! read the transform back through [`ImageTransformState::affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Size, Vec2};
//! use passepartout_image::{CropBoundsFitter, ImageTransformState, ScaleBounds, WrapStep};
//!
//! let crop = Rect::new(100.0, 100.0, 900.0, 700.0);
//! let mut image = ImageTransformState::new(Size::new(4000.0, 3000.0)).unwrap();
//! image.place_to_cover(crop).unwrap();
//! let bounds = ScaleBounds::compute(image.natural_size(), crop, 10.0).unwrap();
//!
//! // The user drags the image too far to the right.
//! image.translate(Vec2::new(120.0, 0.0));
//!
//! let mut fitter = CropBoundsFitter::new(Duration::from_millis(500));
//! let correction = fitter.begin(&image, crop, Duration::ZERO).unwrap();
//! assert!(correction.translate_only_suffices);
//!
//! let step = fitter.step(&mut image, crop, &bounds, Duration::from_millis(500));
//! assert_eq!(step, WrapStep::Finished);
//! ```
//!
//! ## Errors
//!
//! Operations that can refuse return [`TransformError`]. None of them are
//! fatal: a refused gesture leaves the state exactly as it was.

mod bounds;
mod config;
mod crop;
mod error;
mod fitter;
mod state;
mod zoom;

pub use bounds::ScaleBounds;
pub use config::CropConfig;
pub use crop::{CropRegion, CropRequest};
pub use error::{ConfigError, TransformError};
pub use fitter::{
    BoundsCorrection, CropBoundsFitter, FitterState, WrapStep, compute_correction,
    indent_correction, needs_correction,
};
pub use state::{ImageTransformState, TransformDebugInfo};
pub use zoom::{ZoomAnimation, ZoomStep};
