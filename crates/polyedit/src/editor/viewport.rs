//! World-space window onto the scene (pan/zoom) and pixel mapping.

use crate::shapes::utils::dist2d;
use crate::shapes::{pt2, Point2, Vec2};

/// Smallest per-step zoom factor; keeps a fast right-drag from flipping the view.
const MIN_ZOOM_FACTOR: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    lower_left: Point2,
    upper_right: Point2,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Window of `width`×`height` pixels showing the default view.
    pub fn new(width: f64, height: f64) -> Self {
        let mut v = Self {
            lower_left: pt2(0.0, 0.0),
            upper_right: pt2(0.0, 0.0),
            width,
            height,
        };
        v.default_view();
        v
    }

    /// One world unit per pixel, origin at the window centre.
    pub fn default_view(&mut self) {
        self.lower_left = pt2(-self.width / 2.0, -self.height / 2.0);
        self.upper_right = pt2(self.width / 2.0, self.height / 2.0);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[inline]
    pub fn corners(&self) -> (Point2, Point2) {
        (self.lower_left, self.upper_right)
    }

    /// Window pixel (origin top-left, y down) to world point.
    pub fn window_to_world(&self, x: f64, y: f64) -> Point2 {
        let u = x / self.width;
        let v = (self.height - y) / self.height;
        let span = self.upper_right - self.lower_left;
        pt2(
            self.lower_left[0] + span[0] * u,
            self.lower_left[1] + span[1] * v,
        )
    }

    /// Shift the view so content follows a drag of `change` world units.
    pub fn pan(&mut self, change: Vec2) {
        self.lower_left -= change;
        self.upper_right -= change;
    }

    /// Zoom about the view centre; positive `dy` (cursor moved up) zooms in.
    /// The factor `1 - dy/rate` is clamped to `MIN_ZOOM_FACTOR`.
    pub fn zoom(&mut self, dy: f64, rate: f64) {
        let center = (self.lower_left + self.upper_right) * 0.5;
        let factor = (1.0 - dy / rate).max(MIN_ZOOM_FACTOR);
        self.lower_left = center + (self.lower_left - center) * factor;
        self.upper_right = center + (self.upper_right - center) * factor;
    }

    /// World-space pick radius for `px` pixels, relative to a `ref_diag` diagonal.
    pub fn pick_radius(&self, px: f64, ref_diag: f64) -> f64 {
        dist2d(&self.lower_left, &self.upper_right) / ref_diag * px
    }
}
