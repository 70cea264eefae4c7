// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passepartout --heading-base-level=0

//! Passepartout: an interactive image transform-and-crop engine.
//!
//! A [`CropSession`] backs one crop screen. The host recognizes gestures
//! (pan, pinch, rotate, double tap, crop-handle drags) and forwards them;
//! the session keeps the image covering the crop rectangle, plays back the
//! settling animations frame by frame, and finally produces a
//! [`CropRequest`] for a [`CropExecutor`].
//!
//! The session never calls into the host while handling input. It queues
//! [`SessionEvent`]s instead, which the host drains after each call and can
//! forward with [`dispatch_events`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Size, Vec2};
//! use passepartout::{CropSession, LoadedImage, SessionConfig};
//!
//! let mut session = CropSession::new(SessionConfig::default()).unwrap();
//! session.set_container(Rect::new(0.0, 0.0, 1080.0, 1920.0)).unwrap();
//! session.load_image(LoadedImage::new(Size::new(4000.0, 3000.0))).unwrap();
//!
//! // Pan too far, let go, and run frames until the image settles.
//! session.on_gesture_start();
//! session.on_pan(Vec2::new(0.0, 600.0));
//! session.on_gesture_end(Duration::ZERO);
//! let mut now = Duration::ZERO;
//! while session.on_frame(now) {
//!     now += Duration::from_millis(16);
//! }
//!
//! let request = session.prepare_crop().unwrap();
//! let region = request.region().unwrap();
//! assert!(region.width > 0 && region.height > 0);
//! ```
//!
//! ## Crates
//!
//! - `passepartout_geometry`: matrix and rotated-rectangle helpers.
//! - `passepartout_timing`: easing curves and tweens.
//! - `passepartout_image`: the image transform, scale bounds and wrap.
//! - `passepartout_overlay`: the crop-rectangle editor.
//!
//! Their main types are re-exported here.

mod collaborators;
mod config;
mod error;
mod event;
mod session;

pub use collaborators::{
    CropExecutor, FrameScheduler, ImageSource, LoadedImage, RenderSurface, dispatch_events,
};
pub use config::SessionConfig;
pub use error::{BoxError, SessionError};
pub use event::SessionEvent;
pub use session::CropSession;

pub use passepartout_image::{
    ConfigError, CropConfig, CropRegion, CropRequest, ImageTransformState, ScaleBounds,
    TransformDebugInfo, TransformError,
};
pub use passepartout_overlay::{AspectRatio, Corner, EditorState, FreestyleMode, OverlayConfig};
