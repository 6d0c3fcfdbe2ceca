use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::circle::Circle;
use crate::config::{BoardConfig, FieldConfig};
use crate::consts::{CURSOR_DEFAULT, CURSOR_GRAB, CURSOR_GRABBING};
use crate::doc::{DocStore, ObjectId, Rect};
use crate::geom::{Bounds, Point};
use crate::hit::hit_test;
use crate::input::{Button, DragState, PointerState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from board input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A rectangle was repositioned; `x`/`y` is its new top-left corner.
    ObjectMoved { id: ObjectId, x: f64, y: f64 },
    /// The CSS cursor over the canvas should change.
    SetCursor(String),
    RenderNeeded,
}

// =============================================================
// Circle field
// =============================================================

/// Circle field state: everything that does not depend on the canvas element.
///
/// Separated from `FieldEngine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct FieldCore {
    pub config: FieldConfig,
    pub circles: Vec<Circle>,
    pub pointer: PointerState,
    pub bounds: Bounds,
    /// Frames stepped since creation.
    pub frame: u64,
}

impl FieldCore {
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Update the surface size in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
    }

    /// Replace the pool with `config.count` freshly spawned circles.
    ///
    /// `rng` must yield samples in `[0, 1)`; the browser host passes `Math.random`.
    pub fn populate(&mut self, rng: &mut impl FnMut() -> f64) {
        let count = self.config.count;
        self.circles = (0..count)
            .map(|_| spawn_circle(&self.config, self.bounds, &mut *rng))
            .collect();
    }

    /// Step every circle by one frame.
    pub fn tick(&mut self) {
        for circle in &mut self.circles {
            circle.update(self.bounds, &self.pointer, &self.config);
        }
        self.frame += 1;
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, screen_pt: Point) {
        self.pointer.move_to(screen_pt);
    }

    /// Any button counts as a press.
    pub fn on_pointer_down(&mut self, screen_pt: Point, _button: Button) {
        self.pointer.move_to(screen_pt);
        self.pointer.down = true;
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button) {
        self.pointer.move_to(screen_pt);
        self.pointer.down = false;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.leave();
    }
}

fn spawn_circle(config: &FieldConfig, bounds: Bounds, rng: &mut impl FnMut() -> f64) -> Circle {
    let radius = config.min_radius;
    let x = spawn_coordinate(bounds.width, radius, rng());
    let y = spawn_coordinate(bounds.height, radius, rng());
    let vx = (rng() * 2.0 - 1.0) * config.max_speed;
    let vy = (rng() * 2.0 - 1.0) * config.max_speed;
    let fill = config
        .palette
        .get(palette_index(config.palette.len(), rng()))
        .unwrap_or(&config.highlight)
        .clone();
    Circle::new(Point::new(x, y), vx, vy, radius, config.max_radius, fill)
}

/// A coordinate that keeps a circle of `radius` fully inside `extent`, or the
/// midpoint when the surface is too small to fit it.
fn spawn_coordinate(extent: f64, radius: f64, sample: f64) -> f64 {
    let room = extent - radius * 2.0;
    if room <= 0.0 {
        extent / 2.0
    } else {
        sample * room + radius
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn palette_index(len: usize, sample: f64) -> usize {
    ((sample * len as f64).floor().max(0.0) as usize).min(len.saturating_sub(1))
}

// =============================================================
// Drag board
// =============================================================

/// Drag board state: the rectangle store plus the drag gesture.
#[derive(Debug)]
pub struct BoardCore {
    pub doc: DocStore,
    pub input: DragState,
    pub bounds: Bounds,
    /// Background fill; the surface is only cleared when `None`.
    pub background: Option<String>,
    cursor: &'static str,
}

impl Default for BoardCore {
    fn default() -> Self {
        Self {
            doc: DocStore::new(),
            input: DragState::default(),
            bounds: Bounds::default(),
            background: None,
            cursor: CURSOR_DEFAULT,
        }
    }
}

impl BoardCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the configured rectangles in order.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut core = Self::new();
        core.load_snapshot(config.to_rects());
        core.background.clone_from(&config.background);
        core
    }

    /// Replace all rectangles and drop any gesture in progress.
    pub fn load_snapshot(&mut self, rects: Vec<Rect>) {
        self.doc.load_snapshot(rects);
        self.input = DragState::Idle;
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
    }

    /// CSS cursor the host should currently show.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    /// Id of the rectangle being dragged, if any.
    #[must_use]
    pub fn target(&self) -> Option<ObjectId> {
        self.input.target()
    }

    // --- Input events ---

    /// Arm a drag. The target is picked on the next move, not here.
    pub fn on_pointer_down(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Primary {
            self.input = DragState::Armed;
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.input {
            DragState::Idle => {
                let cursor = self.hover_cursor(screen_pt);
                self.set_cursor(cursor, &mut actions);
            }
            DragState::Armed => {
                if let Some(hit) = hit_test(screen_pt, &self.doc) {
                    self.input = DragState::Dragging { id: hit.object_id, grab_offset: hit.grab_offset };
                    self.set_cursor(CURSOR_GRABBING, &mut actions);
                }
            }
            DragState::Dragging { id, grab_offset } => {
                let origin = screen_pt.offset_from(grab_offset);
                if self.doc.move_to(&id, origin.x, origin.y) {
                    self.doc.bring_to_front(&id);
                    actions.push(Action::ObjectMoved { id, x: origin.x, y: origin.y });
                    actions.push(Action::RenderNeeded);
                } else {
                    // Target vanished under us (snapshot reload); fall back to armed.
                    self.input = DragState::Armed;
                }
            }
        }
        actions
    }

    /// Disarm and clear the target and grab offset. Only the primary button
    /// ends a gesture, matching what arms one.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        if button != Button::Primary {
            return actions;
        }
        self.input = DragState::Idle;
        let cursor = self.hover_cursor(screen_pt);
        self.set_cursor(cursor, &mut actions);
        actions
    }

    /// Leaving the surface ends any gesture.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.input = DragState::Idle;
        self.set_cursor(CURSOR_DEFAULT, &mut actions);
        actions
    }

    fn hover_cursor(&self, screen_pt: Point) -> &'static str {
        if hit_test(screen_pt, &self.doc).is_some() {
            CURSOR_GRAB
        } else {
            CURSOR_DEFAULT
        }
    }

    fn set_cursor(&mut self, cursor: &'static str, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor.to_owned()));
        }
    }
}

// =============================================================
// Canvas-owning wrappers
// =============================================================

/// Resize the canvas backing store to `css * dpr` pixels. Returns false when
/// the size was already current, since assigning width/height resets the
/// canvas even when unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn resize_backing_store(canvas: &HtmlCanvasElement, width_css: f64, height_css: f64, dpr: f64) -> bool {
    let width = (width_css * dpr).round().max(1.0) as u32;
    let height = (height_css * dpr).round().max(1.0) as u32;
    if canvas.width() == width && canvas.height() == height {
        return false;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    true
}

/// The circle field engine. Wraps `FieldCore` and owns the browser canvas element.
pub struct FieldEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: FieldCore,
}

impl FieldEngine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Self, JsValue> {
        let ctx = render::context_2d(&canvas)?;
        Ok(Self { canvas, ctx, dpr: 1.0, core: FieldCore::new(config) })
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.dpr = dpr;
        resize_backing_store(&self.canvas, width_css, height_css, dpr);
        self.core.set_viewport(width_css, height_css);
    }

    pub fn populate(&mut self, rng: &mut impl FnMut() -> f64) {
        self.core.populate(rng);
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) {
        self.core.on_pointer_move(screen_pt);
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) {
        self.core.on_pointer_down(screen_pt, button);
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) {
        self.core.on_pointer_up(screen_pt, button);
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    /// Step the simulation and draw the result.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw_field(&self.ctx, &self.core, self.dpr)
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

/// The drag board engine. Wraps `BoardCore` and owns the browser canvas element.
pub struct BoardEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: BoardCore,
}

impl BoardEngine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: &BoardConfig) -> Result<Self, JsValue> {
        let ctx = render::context_2d(&canvas)?;
        Ok(Self { canvas, ctx, dpr: 1.0, core: BoardCore::from_config(config) })
    }

    /// Update viewport dimensions and device pixel ratio. Returns true when
    /// the backing store was resized, which wipes it and needs a redraw.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> bool {
        self.dpr = dpr;
        self.core.set_viewport(width_css, height_css);
        resize_backing_store(&self.canvas, width_css, height_css, dpr)
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw_board(&self.ctx, &self.core, self.dpr)
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}
