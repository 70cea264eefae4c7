// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passepartout_timing --heading-base-level=0

//! Passepartout Timing: host-clocked tweens and easing curves.
//!
//! Animations in Passepartout never own a timer. The host calls a `step`
//! function from its own frame callback and passes the current monotonic time
//! as a [`Duration`](core::time::Duration) since any fixed origin it likes.
//! This crate provides the two small building blocks those steps share:
//!
//! - [`Easing`]: the curves used by the crop engine (cubic ease-out for
//!   translation, cubic ease-in-out for scale, overshoot for recentering).
//! - [`Tween`]: start time + duration bookkeeping with cooperative
//!   cancellation.
//!
//! ```rust
//! use core::time::Duration;
//! use passepartout_timing::{Easing, Tween};
//!
//! let start = Duration::from_millis(1_000);
//! let tween = Tween::new(start, Duration::from_millis(500));
//!
//! let halfway = tween.sample(start + Duration::from_millis(250), Easing::CubicInOut);
//! assert!((halfway - 0.5).abs() < 1e-12);
//! assert!(tween.is_elapsed(start + Duration::from_millis(500)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::Tween;
