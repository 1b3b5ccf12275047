// SPDX-License-Identifier: MPL-2.0

//! Time-based transitions for the highlight and the strip scroll offset.

use super::highlight::HighlightGeometry;
use std::time::{Duration, Instant};

/// Duration of highlight moves and scroll-into-view.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(200);

/// Values that can be blended between two end states.
pub trait Interpolate: Copy {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for HighlightGeometry {
    /// Width and center move together; placement and corner radius are
    /// structural and switch to the target immediately.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            width: self.width.interpolate(&to.width, t),
            center_x: self.center_x.interpolate(&to.center_x, t),
            placement: to.placement,
            corner_radius: to.corner_radius,
        }
    }
}

/// A value moving toward a target over a fixed duration.
///
/// Retargeting while in flight starts from the value currently displayed,
/// so rapid changes never queue up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    started: Option<Instant>,
    duration: Duration,
}

impl<T: Interpolate> Transition<T> {
    /// Creates a transition resting at `value`.
    pub fn new(value: T, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration,
        }
    }

    /// Starts moving toward `to` from wherever the value is at `now`.
    pub fn retarget(&mut self, to: T, now: Instant) {
        self.from = self.value(now);
        self.to = to;
        self.started = Some(now);
    }

    /// Jumps to `to` without animating.
    pub fn snap(&mut self, to: T) {
        self.from = to;
        self.to = to;
        self.started = None;
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn value(&self, now: Instant) -> T {
        match self.progress(now) {
            Some(t) => self.from.interpolate(&self.to, ease_out(t)),
            None => self.to,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now).is_some()
    }

    /// True once the transition was snapped or never started.
    pub fn is_resting(&self) -> bool {
        self.started.is_none()
    }

    /// Linear progress in `[0, 1)`, or `None` once settled.
    fn progress(&self, now: Instant) -> Option<f32> {
        let started = self.started?;
        if self.duration.is_zero() {
            return None;
        }

        let t = now.saturating_duration_since(started).as_secs_f32() / self.duration.as_secs_f32();
        (t < 1.0).then_some(t)
    }
}

/// Ease-out cubic.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
