//! Circle entity and its per-frame update step.
//!
//! Each frame a circle:
//!
//! 1. reflects its velocity off any surface edge it crosses,
//! 2. integrates its position, keeping its centre on the surface,
//! 3. records its distance to the pointer (two samples),
//! 4. grows toward `max_radius` while the pointer hovers near it and it fits
//!    on the surface, otherwise shrinks back toward `min_radius`,
//! 5. reverses direction when a button is held nearby and it is moving
//!    toward the pointer.
//!
//! The radius is clamped to `[min_radius, max_radius]` at every step.

#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use crate::config::FieldConfig;
use crate::geom::{Bounds, Point};
use crate::input::PointerState;

/// The last two distances from a circle to the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceHistory {
    previous: Option<f64>,
    latest: Option<f64>,
}

impl DistanceHistory {
    /// Push a new sample, discarding the oldest.
    pub fn record(&mut self, distance: Option<f64>) {
        self.previous = self.latest;
        self.latest = distance;
    }

    /// Whether the latest sample is closer than the one before it.
    /// Missing samples never count as approaching.
    #[must_use]
    pub fn is_approaching(&self) -> bool {
        matches!((self.previous, self.latest), (Some(prev), Some(latest)) if latest < prev)
    }
}

/// A bouncing circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Current fill.
    pub fill: String,
    /// Fill restored once the circle has shrunk back to `min_radius`.
    pub base_fill: String,
    pub history: DistanceHistory,
}

impl Circle {
    /// A circle at rest size `min_radius` with the given base fill.
    #[must_use]
    pub fn new(center: Point, vx: f64, vy: f64, min_radius: f64, max_radius: f64, fill: String) -> Self {
        Self {
            center,
            vx,
            vy,
            radius: min_radius,
            min_radius,
            max_radius,
            base_fill: fill.clone(),
            fill,
            history: DistanceHistory::default(),
        }
    }

    /// Run one frame of the update step.
    pub fn update(&mut self, bounds: Bounds, pointer: &PointerState, config: &FieldConfig) {
        self.reflect(bounds);
        self.integrate(bounds);
        self.history.record(pointer.distance_from(self.center));
        self.react_to_hover(bounds, pointer, config);
        if config.repel_on_press {
            self.react_to_press(pointer, config);
        }
    }

    /// Point the velocity back inside on any axis where the circle crosses an edge.
    pub fn reflect(&mut self, bounds: Bounds) {
        self.vx = reflect_axis(self.center.x, self.radius, bounds.width, self.vx);
        self.vy = reflect_axis(self.center.y, self.radius, bounds.height, self.vy);
    }

    /// Move by one frame of velocity. The centre never leaves the surface.
    pub fn integrate(&mut self, bounds: Bounds) {
        self.center.x = (self.center.x + self.vx).clamp(0.0, bounds.width.max(0.0));
        self.center.y = (self.center.y + self.vy).clamp(0.0, bounds.height.max(0.0));
    }

    /// Whether the circle may grow this frame: below max and strictly on the surface.
    #[must_use]
    pub fn can_grow(&self, bounds: Bounds) -> bool {
        self.radius < self.max_radius && bounds.contains_circle(self.center, self.radius)
    }

    #[must_use]
    pub fn can_shrink(&self) -> bool {
        self.radius > self.min_radius
    }

    /// Grow and highlight under the pointer, otherwise shrink back to rest.
    pub fn react_to_hover(&mut self, bounds: Bounds, pointer: &PointerState, config: &FieldConfig) {
        if pointer.within(self.center, config.hover_range) && self.can_grow(bounds) {
            self.radius = (self.radius + config.growth_step).min(self.max_radius);
            self.fill.clone_from(&config.highlight);
        } else if self.can_shrink() {
            self.radius = (self.radius - config.growth_step).max(self.min_radius);
            if self.radius <= self.min_radius {
                self.fill.clone_from(&self.base_fill);
            }
        }
    }

    /// Reverse direction when a button is held nearby and the circle is closing in.
    pub fn react_to_press(&mut self, pointer: &PointerState, config: &FieldConfig) {
        if pointer.down && pointer.within(self.center, config.press_range) && self.history.is_approaching() {
            self.vx = -self.vx;
            self.vy = -self.vy;
        }
    }
}

/// Velocity along one axis after an edge check. A circle wider than the
/// surface crosses both edges at once and is steered toward the middle.
fn reflect_axis(pos: f64, radius: f64, extent: f64, v: f64) -> f64 {
    let past_low = pos - radius < 0.0;
    let past_high = pos + radius > extent;
    match (past_low, past_high) {
        (true, true) => (extent / 2.0 - pos).signum() * v.abs(),
        (true, false) => v.abs(),
        (false, true) => -v.abs(),
        (false, false) => v,
    }
}
