//! Shared default constants for the canvas crate.

// ── Circle field ────────────────────────────────────────────────

/// Number of circles in the default pool.
pub const POOL_SIZE: usize = 1600;

/// Radius every circle starts at and shrinks back to.
pub const MIN_RADIUS: f64 = 10.0;

/// Largest radius a hovered circle may grow to.
pub const MAX_RADIUS: f64 = 50.0;

/// Upper bound of each spawned velocity component, in pixels per frame.
pub const MAX_SPEED: f64 = 2.0;

/// Half-width of the square window around the pointer that makes circles grow.
pub const HOVER_RANGE_PX: f64 = 50.0;

/// Half-width of the square window around the pointer that repels circles on press.
pub const PRESS_RANGE_PX: f64 = 250.0;

/// Radius change per frame while growing or shrinking.
pub const GROWTH_STEP: f64 = 1.0;

/// Fill used while a circle is growing under the pointer.
pub const HIGHLIGHT_FILL: &str = "#badc58";

/// Field background.
pub const FIELD_BACKGROUND: &str = "#130f40";

/// Base fills a spawned circle picks from.
pub const PALETTE: [&str; 4] = ["#821E64", "#DC2B50", "#F9564F", "#F3C677"];

// ── Drag board ──────────────────────────────────────────────────

/// Side length of the default board rectangles.
pub const DEFAULT_RECT_SIZE: f64 = 100.0;

/// CSS cursor shown when nothing is under the pointer.
pub const CURSOR_DEFAULT: &str = "default";

/// CSS cursor shown over a rectangle that can be picked up.
pub const CURSOR_GRAB: &str = "grab";

/// CSS cursor shown while a rectangle is being dragged.
pub const CURSOR_GRABBING: &str = "grabbing";
