// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Rect};

use crate::{
    Corner, CropHandle, FreestyleMode, OverlayConfig, RecenterAnimation, RecenterFrame,
    centered_crop_rect, hit_test, move_within, resize, resize_locked,
};

/// What the editor is doing with the current pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No crop-rectangle gesture in progress.
    #[default]
    Idle,
    /// A corner is being dragged.
    DraggingCorner(Corner),
    /// The whole rectangle is being dragged.
    DraggingBody,
}

/// Owner of the crop rectangle and its interactive editing.
///
/// The editor is the only writer of the crop rectangle. Pointer events come
/// in through [`on_drag_start`](Self::on_drag_start),
/// [`on_drag_move`](Self::on_drag_move) and [`on_drag_end`](Self::on_drag_end);
/// releasing starts a recenter glide that the host advances with
/// [`step_recenter`](Self::step_recenter).
#[derive(Clone, Debug)]
pub struct CropRectEditor {
    config: OverlayConfig,
    container: Rect,
    crop_rect: Rect,
    target_aspect: Option<f64>,
    state: EditorState,
    previous: Option<Point>,
    recenter: Option<RecenterAnimation>,
}

impl CropRectEditor {
    /// Creates an editor with an empty container and crop rectangle.
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            container: Rect::ZERO,
            crop_rect: Rect::ZERO,
            target_aspect: None,
            state: EditorState::Idle,
            previous: None,
            recenter: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next gesture.
    pub fn set_config(&mut self, config: OverlayConfig) {
        self.config = config;
    }

    /// Area the crop rectangle lives in.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// The crop rectangle.
    #[must_use]
    pub fn crop_rect(&self) -> Rect {
        self.crop_rect
    }

    /// Target aspect ratio set by the last layout, if any.
    #[must_use]
    pub fn target_aspect_ratio(&self) -> Option<f64> {
        self.target_aspect
    }

    /// Gesture state.
    #[must_use]
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Lays out a centered crop rectangle of `aspect` inside `container`.
    ///
    /// Ends any gesture and recenter glide. Returns the new rectangle, or
    /// `None` (leaving everything unchanged) for an empty container or an
    /// unusable ratio.
    pub fn layout(&mut self, container: Rect, aspect: f64) -> Option<Rect> {
        let rect = centered_crop_rect(container, aspect)?;
        self.cancel_gesture();
        self.container = container;
        self.target_aspect = Some(aspect);
        self.crop_rect = rect;
        tracing::debug!(?container, aspect, ?rect, "crop rect laid out");
        Some(rect)
    }

    /// Re-lays out the crop rectangle for a new `aspect` in the current
    /// container.
    pub fn set_target_aspect_ratio(&mut self, aspect: f64) -> Option<Rect> {
        self.layout(self.container, aspect)
    }

    /// Replaces the crop rectangle. Returns `true` when it changed.
    ///
    /// Rectangles with non-finite coordinates or negative extent are ignored.
    pub fn set_crop_rect(&mut self, rect: Rect) -> bool {
        if !rect.is_finite() || rect.width() < 0.0 || rect.height() < 0.0 || rect == self.crop_rect
        {
            return false;
        }
        self.crop_rect = rect;
        true
    }

    /// Handle under `point`, honoring the freestyle mode.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<CropHandle> {
        if self.config.freestyle == FreestyleMode::Disabled {
            return None;
        }
        hit_test(
            point,
            self.crop_rect,
            self.config.touch_threshold,
            self.config.freestyle == FreestyleMode::Enabled,
        )
    }

    /// Pointer down. Returns `true` when the editor takes the gesture.
    ///
    /// Any recenter glide stops where it is.
    pub fn on_drag_start(&mut self, point: Point) -> bool {
        self.cancel_gesture();
        if self.crop_rect.area() <= 0.0 {
            return false;
        }
        let Some(handle) = self.hit_test(point) else {
            return false;
        };
        self.state = match handle {
            CropHandle::Corner(corner) => EditorState::DraggingCorner(corner),
            CropHandle::Body => EditorState::DraggingBody,
        };
        self.previous = Some(point);
        tracing::trace!(?handle, ?point, "crop rect drag started");
        true
    }

    /// Pointer move. Returns `true` when the crop rectangle changed.
    ///
    /// The point is clamped into the container first.
    pub fn on_drag_move(&mut self, point: Point) -> bool {
        let point = self.clamp_to_container(point);
        let previous = self.previous.replace(point);
        let next = match self.state {
            EditorState::Idle => return false,
            EditorState::DraggingCorner(corner) => self.resized(corner, point),
            EditorState::DraggingBody => {
                let Some(previous) = previous else {
                    return false;
                };
                move_within(point, previous, self.crop_rect, self.container)
            }
        };
        match next {
            Some(rect) if rect != self.crop_rect => {
                self.crop_rect = rect;
                true
            }
            Some(_) => false,
            None => {
                tracing::trace!(?point, "crop rect change refused");
                false
            }
        }
    }

    /// Pointer up at `now`.
    ///
    /// Returns the committed crop rectangle when a drag was in progress, and
    /// starts gliding it back to the container center.
    pub fn on_drag_end(&mut self, now: Duration) -> Option<Rect> {
        if self.state == EditorState::Idle {
            return None;
        }
        self.state = EditorState::Idle;
        self.previous = None;
        let anim = RecenterAnimation::new(
            self.crop_rect,
            self.container,
            now,
            self.config.recenter_duration,
            self.config.overshoot_tension,
        );
        self.recenter = (!anim.is_trivial()).then_some(anim);
        tracing::debug!(rect = ?self.crop_rect, "crop rect committed");
        Some(self.crop_rect)
    }

    /// Advances the recenter glide to `now`.
    ///
    /// Returns `None` when no glide is running. The returned frame's
    /// `image_delta` must be applied to the image so it stays put under the
    /// moving rectangle.
    pub fn step_recenter(&mut self, now: Duration) -> Option<RecenterFrame> {
        let frame = self.recenter.as_mut()?.step(now);
        match frame {
            Some(frame) => {
                self.crop_rect = frame.rect;
                if frame.finished {
                    self.recenter = None;
                }
                Some(frame)
            }
            None => {
                self.recenter = None;
                None
            }
        }
    }

    /// `true` while a recenter glide is pending.
    #[must_use]
    pub fn is_recentering(&self) -> bool {
        self.recenter.is_some()
    }

    /// Stops the recenter glide. Returns `true` if one was running.
    pub fn cancel_recenter(&mut self) -> bool {
        self.recenter.take().is_some()
    }

    fn cancel_gesture(&mut self) {
        self.state = EditorState::Idle;
        self.previous = None;
        if let Some(mut anim) = self.recenter.take() {
            anim.cancel();
        }
    }

    fn clamp_to_container(&self, point: Point) -> Point {
        let c = self.container;
        if c.area() <= 0.0 {
            return point;
        }
        Point::new(point.x.clamp(c.x0, c.x1), point.y.clamp(c.y0, c.y1))
    }

    fn resized(&self, corner: Corner, point: Point) -> Option<Rect> {
        let min_size = self.config.min_size;
        if !self.config.lock_aspect_ratio {
            return Some(resize(
                corner,
                point,
                self.crop_rect,
                min_size,
                self.config.drag_frame,
            ));
        }
        if !self.config.drag_frame {
            return Some(self.crop_rect);
        }
        let aspect = self
            .target_aspect
            .unwrap_or_else(|| self.crop_rect.width() / self.crop_rect.height());
        resize_locked(
            corner,
            point,
            self.crop_rect,
            aspect,
            min_size,
            self.container,
        )
    }
}
