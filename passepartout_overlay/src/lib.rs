// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passepartout_overlay --heading-base-level=0

//! Passepartout Overlay: the user-adjustable crop rectangle.
//!
//! The crop rectangle is axis-aligned in view space and owned by a
//! [`CropRectEditor`]. The editor turns already-recognized pointer events
//! into resizes and moves:
//!
//! - [`hit_test`] finds the grabbed [`CropHandle`]: the nearest corner within
//!   a threshold, or the body.
//! - [`resize`] moves the two edges next to a corner, keeping the old edges on
//!   any axis that would shrink below the minimum size.
//! - [`resize_locked`] does the same while keeping an aspect ratio.
//! - [`move_within`] shifts the whole rectangle, refusing moves that would
//!   leave the container.
//!
//! On release, a [`RecenterAnimation`] glides the rectangle back to the
//! container center and reports how far the image has to follow each tick.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use passepartout_overlay::{CropRectEditor, FreestyleMode, OverlayConfig};
//!
//! let config = OverlayConfig::default().with_freestyle(FreestyleMode::Enabled);
//! let mut editor = CropRectEditor::new(config);
//! let rect = editor.layout(Rect::new(0.0, 0.0, 1000.0, 800.0), 1.0).unwrap();
//! assert_eq!(rect, Rect::new(100.0, 0.0, 900.0, 800.0));
//!
//! // Grab the bottom-right corner and pull it in.
//! assert!(editor.on_drag_start(Point::new(898.0, 798.0)));
//! assert!(editor.on_drag_move(Point::new(700.0, 600.0)));
//! let committed = editor.on_drag_end(Duration::ZERO).unwrap();
//! assert_eq!(committed, Rect::new(100.0, 0.0, 700.0, 600.0));
//! assert!(editor.is_recentering());
//! ```

mod config;
mod editor;
mod handle;
mod layout;
mod recenter;
mod resize;

pub use config::{ConfigError, FreestyleMode, OverlayConfig};
pub use editor::{CropRectEditor, EditorState};
pub use handle::{Corner, CropHandle, hit_test};
pub use layout::{AspectRatio, centered_crop_rect};
pub use recenter::{RecenterAnimation, RecenterFrame};
pub use resize::{move_within, resize, resize_locked};
