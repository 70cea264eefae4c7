// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::Easing;

/// Start time and duration of one animation run.
///
/// Times are host-supplied monotonic [`Duration`]s. A `now` earlier than the
/// start is treated as the start; a `now` past the end is treated as the end.
/// A zero duration is complete immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tween {
    start: Duration,
    duration: Duration,
    cancelled: bool,
}

impl Tween {
    /// Creates a tween beginning at `start` and lasting `duration`.
    #[must_use]
    pub const fn new(start: Duration, duration: Duration) -> Self {
        Self {
            start,
            duration,
            cancelled: false,
        }
    }

    /// Start time.
    #[must_use]
    pub const fn start(&self) -> Duration {
        self.start
    }

    /// Total duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Time spent since the start, clamped to `[0, duration]`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.start).min(self.duration)
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Eased progress in `[0, 1]` (wider for overshooting curves).
    #[must_use]
    pub fn sample(&self, now: Duration, easing: Easing) -> f64 {
        easing.apply(self.progress(now))
    }

    /// `true` once `now` has reached the end of the tween.
    #[must_use]
    pub fn is_elapsed(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }

    /// Marks the tween cancelled. The owner must stop stepping it.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether [`Tween::cancel`] was called.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
