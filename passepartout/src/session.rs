// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use passepartout_image::{
    CropBoundsFitter, CropRequest, ImageTransformState, ScaleBounds, TransformError, WrapStep,
    ZoomAnimation, ZoomStep,
};
use passepartout_overlay::{AspectRatio, CropRectEditor};

use crate::{CropExecutor, ImageSource, LoadedImage, SessionConfig, SessionError, SessionEvent};

/// One interactive crop screen.
///
/// A session composes the image transform, the crop-rectangle editor and
/// their animations. The host feeds it recognized gestures and frame ticks,
/// and drains [`SessionEvent`]s to redraw and schedule frames.
///
/// Until an image is loaded *and* a container is known the session is not
/// ready: gestures are ignored and [`CropSession::prepare_crop`] fails with
/// [`SessionError::NotReady`].
#[derive(Debug)]
pub struct CropSession {
    config: SessionConfig,
    container: Rect,
    loaded: Option<LoadedImage>,
    image: Option<ImageTransformState>,
    bounds: Option<ScaleBounds>,
    fitter: CropBoundsFitter,
    zoom: Option<ZoomAnimation>,
    editor: CropRectEditor,
    events: Vec<SessionEvent>,
    last_scale: f64,
    last_angle: f64,
}

impl CropSession {
    /// Creates a session after validating `config`.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            config,
            container: Rect::ZERO,
            loaded: None,
            image: None,
            bounds: None,
            fitter: CropBoundsFitter::new(config.crop.wrap_duration),
            zoom: None,
            editor: CropRectEditor::new(config.overlay),
            events: Vec::new(),
            last_scale: 1.0,
            last_angle: 0.0,
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// `true` once an image is loaded and laid out.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    /// The image transform, when ready.
    #[must_use]
    pub fn image(&self) -> Option<&ImageTransformState> {
        self.image.as_ref()
    }

    /// Current scale bounds, when ready.
    #[must_use]
    pub fn scale_bounds(&self) -> Option<ScaleBounds> {
        self.bounds
    }

    /// The crop rectangle.
    #[must_use]
    pub fn crop_rect(&self) -> Rect {
        self.editor.crop_rect()
    }

    /// The crop-rectangle editor.
    #[must_use]
    pub fn editor(&self) -> &CropRectEditor {
        &self.editor
    }

    /// `true` while any animation is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_some() || !self.fitter.is_complete() || self.editor.is_recentering()
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        core::mem::take(&mut self.events)
    }

    /// Sets the area the crop rectangle is laid out in.
    ///
    /// If an image is loaded this lays everything out again.
    pub fn set_container(&mut self, container: Rect) -> Result<(), SessionError> {
        self.container = container;
        if self.loaded.is_some() {
            self.layout()?;
        }
        Ok(())
    }

    /// Takes a finished load from `source`.
    pub fn load_from<S: ImageSource + ?Sized>(&mut self, source: &mut S) -> Result<(), SessionError> {
        match source.take_result() {
            Ok(loaded) => self.load_image(loaded),
            Err(err) => Err(self.image_failed(err)),
        }
    }

    /// Installs a decoded image and lays it out if the container is known.
    pub fn load_image(&mut self, loaded: LoadedImage) -> Result<(), SessionError> {
        self.cancel_all_animations();
        // Validate the size before dropping the previous image.
        ImageTransformState::new(loaded.natural_size)?;
        self.loaded = Some(loaded);
        self.image = None;
        self.bounds = None;
        tracing::debug!(
            width = loaded.natural_size.width,
            height = loaded.natural_size.height,
            exif_orientation = loaded.exif_orientation,
            "image loaded"
        );
        self.events.push(SessionEvent::LoadComplete {
            natural_size: loaded.natural_size,
            exif_orientation: loaded.exif_orientation,
        });
        if self.container.area() > 0.0 {
            self.layout()?;
        }
        Ok(())
    }

    /// Reports that the image source failed.
    ///
    /// Queues [`SessionEvent::LoadFailed`] and returns the error for the
    /// host to present.
    pub fn image_failed<E>(&mut self, err: E) -> SessionError
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        tracing::warn!(%err, "image failed to load");
        self.events.push(SessionEvent::LoadFailed);
        SessionError::ImageLoad(Box::new(err))
    }

    /// Changes the crop rectangle's aspect ratio and lays it out again.
    pub fn set_target_aspect_ratio(&mut self, aspect_ratio: AspectRatio) -> Result<(), SessionError> {
        self.config.aspect_ratio = aspect_ratio;
        if self.loaded.is_some() && self.container.area() > 0.0 {
            self.layout()?;
        }
        Ok(())
    }

    /// Replaces the crop rectangle and starts an animated wrap at `now`.
    pub fn set_crop_rect(&mut self, rect: Rect, now: Duration) -> Result<bool, SessionError> {
        if !self.editor.set_crop_rect(rect) {
            return Ok(false);
        }
        self.events.push(SessionEvent::CropRectChanged(rect));
        if self.image.is_some() {
            self.refresh_bounds()?;
            self.begin_wrap(now);
        }
        Ok(true)
    }

    // --- Image gestures -------------------------------------------------

    /// A new image gesture begins: cancels running image animations.
    pub fn on_gesture_start(&mut self) {
        if self.zoom.is_some() || !self.fitter.is_complete() {
            self.cancel_image_animations();
            self.events.push(SessionEvent::FramesCancelled);
        }
    }

    /// Pans the image by `delta`.
    pub fn on_pan(&mut self, delta: Vec2) -> bool {
        self.with_image("pan", |image, _| Ok(image.translate(delta)))
    }

    /// Scales the image by `factor` about `focus`.
    pub fn on_scale(&mut self, factor: f64, focus: Point) -> bool {
        if !self.config.crop.scale_enabled {
            return false;
        }
        self.with_image("scale", |image, bounds| {
            image.scale_about(factor, focus, bounds)
        })
    }

    /// Rotates the image by `degrees` about `focus`.
    pub fn on_rotate(&mut self, degrees: f64, focus: Point) -> bool {
        if !self.config.crop.rotate_enabled {
            return false;
        }
        self.with_image("rotate", |image, _| Ok(image.rotate_about(degrees, focus)))
    }

    /// Starts an animated zoom step toward the maximum about `point`.
    pub fn on_double_tap(&mut self, point: Point, now: Duration) -> bool {
        if !self.config.crop.scale_enabled {
            return false;
        }
        let (Some(image), Some(bounds)) = (self.image.as_ref(), self.bounds) else {
            tracing::trace!("double tap ignored: not ready");
            return false;
        };
        let current = image.current_scale();
        let target = bounds.double_tap_target(current, self.config.crop.double_tap_scale_steps);
        self.fitter.cancel();
        self.zoom = Some(ZoomAnimation::new(
            current,
            target,
            point,
            &bounds,
            now,
            self.config.crop.double_tap_zoom_duration,
        ));
        self.events.push(SessionEvent::FrameRequested);
        true
    }

    /// The image gesture ended: starts an animated wrap at `now`.
    pub fn on_gesture_end(&mut self, now: Duration) {
        if self.zoom.is_none() {
            self.begin_wrap(now);
        }
    }

    // --- Crop-rectangle gestures ----------------------------------------

    /// Pointer down on the overlay. Returns `true` when the editor takes the
    /// gesture; otherwise the host should route it to the image.
    pub fn on_crop_drag_start(&mut self, point: Point) -> bool {
        self.editor.on_drag_start(point)
    }

    /// Pointer move on the overlay.
    pub fn on_crop_drag_move(&mut self, point: Point) -> bool {
        let changed = self.editor.on_drag_move(point);
        if changed {
            self.events
                .push(SessionEvent::CropRectChanged(self.editor.crop_rect()));
        }
        changed
    }

    /// Pointer up on the overlay at `now`.
    ///
    /// Commits the crop rectangle. If it has to glide back to the container
    /// center, the image follows it and the wrap starts once the glide ends;
    /// otherwise the wrap starts right away.
    pub fn on_crop_drag_end(&mut self, now: Duration) -> Option<Rect> {
        let committed = self.editor.on_drag_end(now)?;
        self.events.push(SessionEvent::CropRectChanged(committed));
        if self.image.is_some() {
            if let Err(err) = self.refresh_bounds() {
                tracing::trace!(%err, "scale bounds unchanged");
            }
            if self.editor.is_recentering() {
                self.cancel_image_animations();
                self.events.push(SessionEvent::FrameRequested);
            } else {
                self.begin_wrap(now);
            }
        }
        Some(committed)
    }

    // --- Frames ---------------------------------------------------------

    /// Advances every running animation to `now`.
    ///
    /// Returns `true` (and queues [`SessionEvent::FrameRequested`]) when
    /// another frame is needed.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        let before = self.revision();

        if let Some(frame) = self.editor.step_recenter(now) {
            if let Some(image) = self.image.as_mut() {
                image.translate(frame.image_delta);
            }
            self.events.push(SessionEvent::CropRectChanged(frame.rect));
            if frame.finished {
                if let Err(err) = self.refresh_bounds() {
                    tracing::trace!(%err, "scale bounds unchanged");
                }
                self.begin_wrap(now);
            }
        }

        let zoom_step = match (self.zoom.as_mut(), self.image.as_mut(), self.bounds) {
            (Some(zoom), Some(image), Some(bounds)) => Some(zoom.step(image, &bounds, now)),
            _ => None,
        };
        match zoom_step {
            Some(ZoomStep::Running) => {}
            Some(ZoomStep::Finished | ZoomStep::Cancelled) => {
                self.zoom = None;
                self.begin_wrap(now);
            }
            None => {
                let crop = self.editor.crop_rect();
                if let (Some(image), Some(bounds)) = (self.image.as_mut(), self.bounds)
                    && self.fitter.step(image, crop, &bounds, now) == WrapStep::Stalled
                {
                    tracing::debug!(?crop, "wrap gave up");
                }
            }
        }

        self.note_transform(before);
        let more = self.is_animating();
        if more {
            self.events.push(SessionEvent::FrameRequested);
        }
        more
    }

    // --- Programmatic adjustments ---------------------------------------

    /// Rotates the image by `degrees` about the crop center.
    pub fn rotate_by(&mut self, degrees: f64) -> bool {
        let center = self.editor.crop_rect().center();
        self.with_image("rotate", |image, _| Ok(image.rotate_about(degrees, center)))
    }

    /// Rotates the image back to zero degrees about the crop center.
    pub fn reset_rotation(&mut self) -> bool {
        match self.image.as_ref().map(ImageTransformState::current_angle) {
            Some(angle) if angle != 0.0 => self.rotate_by(-angle),
            _ => false,
        }
    }

    /// Zooms to `scale` about `pivot`. Refused outside the scale bounds.
    pub fn zoom_to(&mut self, scale: f64, pivot: Point) -> bool {
        self.with_image("zoom", |image, bounds| image.zoom_to(scale, pivot, bounds))
    }

    /// Cancels animations and restores coverage at once.
    pub fn wrap_now(&mut self) -> bool {
        self.cancel_image_animations();
        let crop = self.editor.crop_rect();
        let (Some(image), Some(bounds)) = (self.image.as_mut(), self.bounds) else {
            return false;
        };
        let before = image.revision();
        let changed = self.fitter.wrap_now(image, crop, &bounds);
        if changed {
            self.note_transform(Some(before));
        }
        changed
    }

    /// Stops every animation, image and overlay alike.
    pub fn cancel_all_animations(&mut self) {
        let was_animating = self.is_animating();
        self.cancel_image_animations();
        self.editor.cancel_recenter();
        if was_animating {
            self.events.push(SessionEvent::FramesCancelled);
        }
    }

    // --- Cropping -------------------------------------------------------

    /// Settles the image and snapshots the input for the crop executor.
    pub fn prepare_crop(&mut self) -> Result<CropRequest, SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NotReady);
        }
        self.cancel_all_animations();
        self.wrap_now();
        let image = self.image.as_ref().ok_or(SessionError::NotReady)?;
        let request = CropRequest::new(image, self.editor.crop_rect(), self.config.crop.max_result_size)?;
        tracing::debug!(
            crop = ?request.crop_rect,
            image = ?request.image_rect,
            scale = request.scale,
            angle = request.angle,
            "crop prepared"
        );
        Ok(request)
    }

    /// Prepares the crop and hands it to `executor`.
    pub fn crop_with<E: CropExecutor + ?Sized>(
        &mut self,
        executor: &mut E,
    ) -> Result<E::Output, SessionError> {
        let request = self.prepare_crop()?;
        let region = request.region()?;
        executor.crop(&request, &region).map_err(|err| {
            tracing::warn!(%err, "crop executor failed");
            SessionError::Crop(Box::new(err))
        })
    }

    // --- Internals ------------------------------------------------------

    fn layout(&mut self) -> Result<(), SessionError> {
        let Some(loaded) = self.loaded else {
            return Err(SessionError::NotReady);
        };
        let aspect = self
            .config
            .aspect_ratio
            .resolve(loaded.natural_size)
            .ok_or(TransformError::InvalidGeometry {
                reason: "aspect ratio is not positive",
            })?;
        self.cancel_all_animations();
        let crop = self
            .editor
            .layout(self.container, aspect)
            .ok_or(TransformError::InvalidGeometry {
                reason: "container is empty",
            })?;
        let mut image = ImageTransformState::new(loaded.natural_size)?;
        image.place_to_cover(crop)?;
        let bounds = ScaleBounds::compute(
            loaded.natural_size,
            crop,
            self.config.crop.max_scale_multiplier,
        )?;
        tracing::debug!(
            ?crop,
            aspect,
            min_scale = bounds.min_scale(),
            max_scale = bounds.max_scale(),
            "laid out"
        );
        self.image = Some(image);
        self.bounds = Some(bounds);
        self.events.push(SessionEvent::AspectRatioChanged(aspect));
        self.events.push(SessionEvent::CropRectChanged(crop));
        // Always report the fresh placement.
        self.last_scale = f64::NAN;
        self.last_angle = f64::NAN;
        self.note_transform(None);
        Ok(())
    }

    fn refresh_bounds(&mut self) -> Result<(), SessionError> {
        let image = self.image.as_ref().ok_or(SessionError::NotReady)?;
        let bounds = ScaleBounds::compute(
            image.natural_size(),
            self.editor.crop_rect(),
            self.config.crop.max_scale_multiplier,
        )?;
        self.bounds = Some(bounds);
        Ok(())
    }

    fn begin_wrap(&mut self, now: Duration) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        if self
            .fitter
            .begin(image, self.editor.crop_rect(), now)
            .is_some()
        {
            self.events.push(SessionEvent::FrameRequested);
        }
    }

    fn cancel_image_animations(&mut self) {
        self.fitter.cancel();
        if let Some(mut zoom) = self.zoom.take() {
            zoom.cancel();
        }
    }

    fn revision(&self) -> Option<u64> {
        self.image.as_ref().map(ImageTransformState::revision)
    }

    /// Runs `op` on the image if ready and reports whether it changed.
    fn with_image(
        &mut self,
        what: &'static str,
        op: impl FnOnce(&mut ImageTransformState, &ScaleBounds) -> Result<bool, TransformError>,
    ) -> bool {
        let (Some(image), Some(bounds)) = (self.image.as_mut(), self.bounds) else {
            tracing::trace!(what, "ignored: not ready");
            return false;
        };
        let before = image.revision();
        match op(image, &bounds) {
            Ok(true) => {
                self.note_transform(Some(before));
                true
            }
            Ok(false) => false,
            Err(err) => {
                tracing::trace!(what, %err, "refused");
                false
            }
        }
    }

    /// Queues change events if the transform moved past `before`.
    fn note_transform(&mut self, before: Option<u64>) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        if before == Some(image.revision()) {
            return;
        }
        self.events.push(SessionEvent::TransformChanged(image.affine()));
        let scale = image.current_scale();
        if scale != self.last_scale {
            self.last_scale = scale;
            self.events.push(SessionEvent::ScaleChanged(scale));
        }
        let angle = image.current_angle();
        if angle != self.last_angle {
            self.last_angle = angle;
            self.events.push(SessionEvent::AngleChanged(angle));
        }
    }
}
