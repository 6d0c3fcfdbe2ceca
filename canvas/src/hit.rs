#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{DocStore, ObjectId};
use crate::geom::Point;

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub object_id: ObjectId,
    /// Pointer position relative to the rectangle's top-left corner.
    pub grab_offset: Point,
}

/// Find the topmost rectangle under `point`.
///
/// Walks the draw order backwards so a rectangle painted over another wins.
#[must_use]
pub fn hit_test(point: Point, doc: &DocStore) -> Option<Hit> {
    doc.draw_order()
        .iter()
        .rev()
        .find(|rect| rect.contains(point))
        .map(|rect| Hit { object_id: rect.id, grab_offset: point.offset_from(rect.origin()) })
}
