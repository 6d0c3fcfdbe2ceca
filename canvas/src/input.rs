//! Input model: pointer state, mouse buttons, and the drag gesture state machine.
//!
//! `PointerState` is what entities read every frame: where the pointer is
//! (if it has entered the surface at all) and whether a button is held.
//! `DragState` is the gesture tracked by the drag board between pointer-down
//! and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ObjectId;
use crate::geom::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Current pointer position and button state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Last known position, `None` until the pointer first enters the surface
    /// or after it leaves.
    pub position: Option<Point>,
    /// A button is held.
    pub down: bool,
}

impl PointerState {
    /// Record a new pointer position.
    pub fn move_to(&mut self, point: Point) {
        self.position = Some(point);
    }

    /// Forget the pointer position; the button flag is kept.
    pub fn leave(&mut self) {
        self.position = None;
    }

    /// Whether the pointer lies inside the open square window of half-width
    /// `range` centred on `center`.
    #[must_use]
    pub fn within(&self, center: Point, range: f64) -> bool {
        self.position.is_some_and(|p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            dx < range && dx > -range && dy < range && dy > -range
        })
    }

    /// Distance from `center` to the pointer, if the pointer is on the surface.
    #[must_use]
    pub fn distance_from(&self, center: Point) -> Option<f64> {
        self.position.map(|p| center.distance_to(p))
    }
}

/// Internal state for the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// The primary button is held but no rectangle has been picked up yet.
    /// Every move retries the hit-test.
    Armed,
    /// A rectangle is following the pointer.
    Dragging {
        /// Id of the rectangle being dragged.
        id: ObjectId,
        /// Pointer position relative to the rectangle's top-left corner at pickup.
        grab_offset: Point,
    },
}

impl DragState {
    /// Id of the rectangle being dragged, if any.
    #[must_use]
    pub fn target(&self) -> Option<ObjectId> {
        match self {
            Self::Dragging { id, .. } => Some(*id),
            Self::Idle | Self::Armed => None,
        }
    }

    /// Whether a button is held (armed or dragging).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
