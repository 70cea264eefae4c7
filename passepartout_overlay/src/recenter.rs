// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Rect, Vec2};
use passepartout_timing::{Easing, Tween};

/// One tick of a [`RecenterAnimation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecenterFrame {
    /// Where the crop rectangle is now.
    pub rect: Rect,
    /// How far the image must move this tick to stay anchored under the
    /// crop rectangle.
    pub image_delta: Vec2,
    /// Whether this was the last tick.
    pub finished: bool,
}

/// Glides the crop rectangle back to the container center after a release.
///
/// The offset is fixed when the animation starts. Each step reports the
/// rectangle position and the increment of movement since the previous step,
/// which callers apply to the image as a translation.
#[derive(Clone, Copy, Debug)]
pub struct RecenterAnimation {
    tween: Tween,
    easing: Easing,
    from: Rect,
    offset: Vec2,
    last_eased: f64,
}

impl RecenterAnimation {
    /// Starts at `now`, moving `from` so that its center lands on the center
    /// of `container`. The offset is truncated to whole pixels.
    #[must_use]
    pub fn new(
        from: Rect,
        container: Rect,
        now: Duration,
        duration: Duration,
        tension: f64,
    ) -> Self {
        let diff = container.center() - from.center();
        Self {
            tween: Tween::new(now, duration),
            easing: Easing::Overshoot { tension },
            from,
            offset: Vec2::new(diff.x.trunc(), diff.y.trunc()),
            last_eased: 0.0,
        }
    }

    /// Total offset the rectangle travels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// `true` when the rectangle is already centered and there is nothing to
    /// animate.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.offset == Vec2::ZERO
    }

    /// Advances to `now`. Returns `None` once finished or cancelled.
    pub fn step(&mut self, now: Duration) -> Option<RecenterFrame> {
        if self.tween.is_cancelled() {
            return None;
        }
        let eased = self.tween.sample(now, self.easing);
        let image_delta = self.offset * (eased - self.last_eased);
        self.last_eased = eased;
        let finished = self.tween.is_elapsed(now);
        if finished {
            self.tween.cancel();
        }
        Some(RecenterFrame {
            rect: self.from + self.offset * eased,
            image_delta,
            finished,
        })
    }

    /// Stops the animation where it is.
    pub fn cancel(&mut self) {
        self.tween.cancel();
    }

    /// `true` once finished or cancelled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tween.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Vec2};

    use super::RecenterAnimation;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn glides_to_center_with_overshoot() {
        let container = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let from = Rect::new(0.0, 100.0, 400.0, 500.0);
        let mut anim = RecenterAnimation::new(from, container, ms(0), ms(1000), 2.0);
        assert_eq!(anim.offset(), Vec2::new(300.0, 200.0));

        let mut total = Vec2::ZERO;
        let mut overshot = false;
        let mut t = 0;
        let last = loop {
            let frame = anim.step(ms(t)).unwrap();
            total += frame.image_delta;
            overshot |= frame.rect.x0 > 300.0 + 1e-9;
            if frame.finished {
                break frame;
            }
            t += 16;
        };
        assert!(overshot);
        assert_eq!(last.rect, Rect::new(300.0, 300.0, 700.0, 700.0));
        assert!((total - Vec2::new(300.0, 200.0)).hypot() < 1e-9);
        assert!(anim.is_complete());
        assert_eq!(anim.step(ms(2000)), None);
    }

    #[test]
    fn offset_is_truncated() {
        let container = Rect::new(0.0, 0.0, 1001.0, 1000.0);
        let from = Rect::new(0.0, 0.0, 100.0, 100.0);
        let anim = RecenterAnimation::new(from, container, ms(0), ms(1000), 2.0);
        assert_eq!(anim.offset(), Vec2::new(450.0, 450.0));
    }

    #[test]
    fn cancel_stops_updates() {
        let mut anim = RecenterAnimation::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ms(0),
            ms(100),
            2.0,
        );
        anim.cancel();
        assert_eq!(anim.step(ms(50)), None);
    }
}
