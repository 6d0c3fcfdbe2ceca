//! Document model for the drag board: rectangles and their ordered store.
//!
//! The store is a single list whose order is the draw order: the first
//! rectangle is painted first (bottom-most), the last is painted on top.
//! Dragging a rectangle moves it to the end of the list so it renders above
//! everything else, and hit-testing walks the list backwards for the same
//! reason.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for a board rectangle.
pub type ObjectId = Uuid;

/// An axis-aligned filled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Unique identifier for this rectangle.
    pub id: ObjectId,
    /// Left edge in CSS pixels.
    pub x: f64,
    /// Top edge in CSS pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill as a CSS color string.
    pub fill: String,
}

impl Rect {
    /// Whether `point` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.x + self.width && point.y >= self.y && point.y <= self.y + self.height
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered in-memory store of board rectangles.
#[derive(Debug, Default)]
pub struct DocStore {
    rects: Vec<Rect>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Add a rectangle on top of the draw order. If a rectangle with the same
    /// `id` already exists it is replaced in place and keeps its position.
    pub fn insert(&mut self, rect: Rect) {
        match self.index_of(&rect.id) {
            Some(i) => self.rects[i] = rect,
            None => self.rects.push(rect),
        }
    }

    /// Remove a rectangle by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<Rect> {
        let i = self.index_of(id)?;
        Some(self.rects.remove(i))
    }

    /// Return a reference to a rectangle by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&Rect> {
        self.rects.iter().find(|r| r.id == *id)
    }

    /// Position of a rectangle in the draw order.
    #[must_use]
    pub fn index_of(&self, id: &ObjectId) -> Option<usize> {
        self.rects.iter().position(|r| r.id == *id)
    }

    /// Move a rectangle's top-left corner. Returns false if the rectangle doesn't exist.
    pub fn move_to(&mut self, id: &ObjectId, x: f64, y: f64) -> bool {
        let Some(rect) = self.rects.iter_mut().find(|r| r.id == *id) else {
            return false;
        };
        rect.x = x;
        rect.y = y;
        true
    }

    /// Move a rectangle to the end of the draw order so it renders on top.
    /// Returns false if the rectangle doesn't exist.
    pub fn bring_to_front(&mut self, id: &ObjectId) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        let rect = self.rects.remove(i);
        self.rects.push(rect);
        true
    }

    /// Replace all rectangles, keeping the given order as draw order.
    pub fn load_snapshot(&mut self, rects: Vec<Rect>) {
        self.rects = rects;
    }

    /// All rectangles, bottom-most first.
    #[must_use]
    pub fn draw_order(&self) -> &[Rect] {
        &self.rects
    }

    /// Number of rectangles currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if the store contains no rectangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
