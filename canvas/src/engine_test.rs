#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::config::RectSpec;

// =============================================================
// Helpers
// =============================================================

/// Deterministic stand-in for `Math.random`: a small LCG mapped to `[0, 1)`.
fn seeded(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_precision_loss)]
        let sample = (state >> 11) as f64 / (1_u64 << 53) as f64;
        sample
    }
}

/// A source that replays `values` cyclically.
fn replay(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn field(count: usize) -> FieldCore {
    let mut core = FieldCore::new(FieldConfig { count, ..FieldConfig::default() });
    core.set_viewport(800.0, 600.0);
    core
}

fn make_rect(x: f64, y: f64, fill: &str) -> Rect {
    Rect { id: Uuid::new_v4(), x, y, width: 100.0, height: 100.0, fill: fill.to_owned() }
}

fn board_with(rects: Vec<Rect>) -> BoardCore {
    let mut core = BoardCore::new();
    core.load_snapshot(rects);
    core.set_viewport(800.0, 800.0);
    core
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn cursor_change(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|a| match a {
        Action::SetCursor(c) => Some(c.as_str()),
        _ => None,
    })
}

fn last_id(core: &BoardCore) -> Option<ObjectId> {
    core.doc.draw_order().last().map(|r| r.id)
}

// =============================================================
// FieldCore: construction and population
// =============================================================

#[test]
fn field_new_is_empty() {
    let core = FieldCore::new(FieldConfig::default());
    assert!(core.circles.is_empty());
    assert_eq!(core.frame, 0);
    assert!(core.pointer.position.is_none());
    assert!(!core.pointer.down);
}

#[test]
fn populate_fills_configured_count() {
    let mut core = field(250);
    core.populate(&mut seeded(7));
    assert_eq!(core.circles.len(), 250);
}

#[test]
fn populate_default_pool_size() {
    let mut core = FieldCore::new(FieldConfig::default());
    core.set_viewport(1024.0, 768.0);
    core.populate(&mut seeded(1));
    assert_eq!(core.circles.len(), 1600);
}

#[test]
fn populate_replaces_previous_pool() {
    let mut core = field(10);
    core.populate(&mut seeded(1));
    core.config.count = 3;
    core.populate(&mut seeded(2));
    assert_eq!(core.circles.len(), 3);
}

#[test]
fn spawned_circles_fit_on_surface() {
    let mut core = field(500);
    core.populate(&mut seeded(42));
    for c in &core.circles {
        assert!(c.center.x - c.radius >= 0.0 && c.center.x + c.radius <= 800.0);
        assert!(c.center.y - c.radius >= 0.0 && c.center.y + c.radius <= 600.0);
    }
}

#[test]
fn spawned_circles_rest_at_min_radius_with_palette_fill() {
    let mut core = field(200);
    core.populate(&mut seeded(3));
    let palette = FieldConfig::default().palette;
    for c in &core.circles {
        assert_eq!(c.radius, 10.0);
        assert_eq!(c.max_radius, 50.0);
        assert!(palette.contains(&c.fill));
        assert_eq!(c.fill, c.base_fill);
    }
}

#[test]
fn spawned_velocity_within_max_speed() {
    let mut core = field(500);
    core.populate(&mut seeded(9));
    for c in &core.circles {
        assert!(c.vx.abs() <= 2.0 && c.vy.abs() <= 2.0);
    }
}

#[test]
fn spawn_uses_samples_in_order() {
    let mut core = field(1);
    // x, y, vx, vy, palette
    core.populate(&mut replay(vec![0.0, 1.0, 0.5, 0.75, 0.99]));
    let c = &core.circles[0];
    assert_eq!(c.center, pt(10.0, 590.0));
    assert_eq!((c.vx, c.vy), (0.0, 1.0));
    assert_eq!(c.fill, "#F3C677");
}

#[test]
fn spawn_on_tiny_surface_uses_midpoint() {
    let mut core = FieldCore::new(FieldConfig { count: 1, ..FieldConfig::default() });
    core.set_viewport(12.0, 600.0);
    core.populate(&mut replay(vec![0.3]));
    assert_eq!(core.circles[0].center.x, 6.0);
}

// =============================================================
// FieldCore: ticking
// =============================================================

#[test]
fn tick_advances_frame_and_moves_circles() {
    let mut core = field(0);
    core.circles.push(Circle::new(pt(100.0, 100.0), 1.0, 2.0, 10.0, 50.0, "#fff".into()));
    core.tick();
    assert_eq!(core.frame, 1);
    assert_eq!(core.circles[0].center, pt(101.0, 102.0));
}

#[test]
fn tick_reflects_corner_circle() {
    let mut core = field(0);
    core.circles.push(Circle::new(pt(5.0, 5.0), -1.0, -1.0, 10.0, 50.0, "#fff".into()));
    core.tick();
    let c = &core.circles[0];
    assert_eq!((c.vx, c.vy), (1.0, 1.0));
}

#[test]
fn radii_stay_bounded_across_many_frames() {
    let mut core = field(300);
    core.populate(&mut seeded(11));
    let mut rng = seeded(99);
    for frame in 0..600 {
        let p = pt(rng() * 800.0, rng() * 600.0);
        core.on_pointer_move(p);
        if frame % 50 == 0 {
            core.on_pointer_down(p, Button::Primary);
        }
        if frame % 50 == 10 {
            core.on_pointer_up(p, Button::Primary);
        }
        core.tick();
        for c in &core.circles {
            assert!(c.radius >= c.min_radius && c.radius <= c.max_radius);
        }
    }
}

#[test]
fn positions_stay_on_surface_across_many_frames() {
    let mut core = field(300);
    core.populate(&mut seeded(5));
    for _ in 0..1_000 {
        core.tick();
        for c in &core.circles {
            assert!(c.center.x >= 0.0 && c.center.x <= 800.0);
            assert!(c.center.y >= 0.0 && c.center.y <= 600.0);
        }
    }
}

#[test]
fn hovered_circle_grows_through_core() {
    let mut core = field(0);
    core.circles.push(Circle::new(pt(400.0, 300.0), 0.0, 0.0, 10.0, 50.0, "#fff".into()));
    core.on_pointer_move(pt(400.0, 300.0));
    core.tick();
    core.tick();
    assert_eq!(core.circles[0].radius, 12.0);
    assert_eq!(core.circles[0].fill, "#badc58");
}

// =============================================================
// FieldCore: pointer events
// =============================================================

#[test]
fn field_pointer_down_and_up_toggle_flag() {
    let mut core = field(0);
    core.on_pointer_down(pt(1.0, 2.0), Button::Secondary);
    assert!(core.pointer.down);
    assert_eq!(core.pointer.position, Some(pt(1.0, 2.0)));
    core.on_pointer_up(pt(3.0, 4.0), Button::Secondary);
    assert!(!core.pointer.down);
    assert_eq!(core.pointer.position, Some(pt(3.0, 4.0)));
}

#[test]
fn field_pointer_leave_clears_position() {
    let mut core = field(0);
    core.on_pointer_move(pt(10.0, 10.0));
    core.on_pointer_leave();
    assert!(core.pointer.position.is_none());
}

#[test]
fn press_scatters_incoming_circle() {
    let mut core = field(0);
    core.circles.push(Circle::new(pt(100.0, 300.0), 2.0, 0.0, 10.0, 50.0, "#fff".into()));
    core.on_pointer_down(pt(300.0, 300.0), Button::Primary);
    core.tick();
    core.tick();
    assert_eq!(core.circles[0].vx, -2.0);
}

#[test]
fn circle_on_surface_narrower_than_it_stays_on_surface() {
    let mut core = FieldCore::new(FieldConfig { count: 1, ..FieldConfig::default() });
    core.set_viewport(5.0, 600.0);
    core.populate(&mut seeded(4));
    assert_eq!(core.circles[0].center.x, 2.5);
    for _ in 0..200 {
        core.tick();
        let x = core.circles[0].center.x;
        assert!((0.0..=5.0).contains(&x), "centre left the surface: {x}");
    }
}

#[test]
fn set_viewport_updates_bounds() {
    let mut core = FieldCore::default();
    core.set_viewport(320.0, 240.0);
    assert_eq!(core.bounds, Bounds::new(320.0, 240.0));
}

// =============================================================
// BoardCore: construction
// =============================================================

#[test]
fn board_new_is_idle_and_empty() {
    let core = BoardCore::new();
    assert!(core.doc.is_empty());
    assert_eq!(core.input, DragState::Idle);
    assert_eq!(core.cursor(), "default");
    assert!(core.target().is_none());
}

#[test]
fn board_from_default_config_has_three_rects() {
    let core = BoardCore::from_config(&BoardConfig::default());
    let fills: Vec<&str> = core.doc.draw_order().iter().map(|r| r.fill.as_str()).collect();
    assert_eq!(fills, vec!["blue", "red", "yellow"]);
    assert!(core.background.is_none());
}

#[test]
fn board_from_config_carries_background() {
    let config = BoardConfig {
        rects: vec![RectSpec { x: 0.0, y: 0.0, width: 5.0, height: 5.0, fill: "red".into() }],
        background: Some("#eee".into()),
    };
    let core = BoardCore::from_config(&config);
    assert_eq!(core.doc.len(), 1);
    assert_eq!(core.background.as_deref(), Some("#eee"));
}

// =============================================================
// BoardCore: drag gesture
// =============================================================

#[test]
fn pointer_down_arms_without_picking() {
    let mut core = board_with(vec![make_rect(100.0, 100.0, "blue")]);
    let actions = core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    assert!(actions.is_empty());
    assert_eq!(core.input, DragState::Armed);
    assert!(core.target().is_none());
}

#[test]
fn secondary_button_does_not_arm() {
    let mut core = board_with(vec![make_rect(100.0, 100.0, "blue")]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Secondary);
    assert_eq!(core.input, DragState::Idle);
}

#[test]
fn first_move_acquires_target_with_offset() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(130.0, 140.0), Button::Primary);
    let actions = core.on_pointer_move(pt(130.0, 140.0));
    assert_eq!(core.input, DragState::Dragging { id, grab_offset: pt(30.0, 40.0) });
    assert_eq!(cursor_change(&actions), Some("grabbing"));
    // Acquisition does not move the rectangle.
    assert_eq!(core.doc.get(&id).map(|r| (r.x, r.y)), Some((100.0, 100.0)));
}

#[test]
fn subsequent_move_repositions_by_offset() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(130.0, 140.0), Button::Primary);
    core.on_pointer_move(pt(130.0, 140.0));
    let actions = core.on_pointer_move(pt(230.0, 90.0));
    assert_eq!(core.doc.get(&id).map(|r| (r.x, r.y)), Some((200.0, 50.0)));
    assert!(actions.contains(&Action::ObjectMoved { id, x: 200.0, y: 50.0 }));
    assert!(has_render_needed(&actions));
}

#[test]
fn dragged_rect_is_last_in_draw_order() {
    let blue = make_rect(100.0, 100.0, "blue");
    let red = make_rect(600.0, 600.0, "red");
    let yellow = make_rect(300.0, 600.0, "yellow");
    let blue_id = blue.id;
    let mut core = board_with(vec![blue, red, yellow]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));
    core.on_pointer_move(pt(160.0, 170.0));
    core.on_pointer_move(pt(400.0, 400.0));
    assert_eq!(last_id(&core), Some(blue_id));
    let fills: Vec<&str> = core.doc.draw_order().iter().map(|r| r.fill.as_str()).collect();
    assert_eq!(fills, vec!["red", "yellow", "blue"]);
}

#[test]
fn overlapping_pick_prefers_topmost() {
    let bottom = make_rect(100.0, 100.0, "bottom");
    let top = make_rect(150.0, 150.0, "top");
    let top_id = top.id;
    let mut core = board_with(vec![bottom, top]);
    core.on_pointer_down(pt(175.0, 175.0), Button::Primary);
    core.on_pointer_move(pt(175.0, 175.0));
    assert_eq!(core.target(), Some(top_id));
}

#[test]
fn armed_over_empty_space_keeps_retrying() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    let actions = core.on_pointer_move(pt(20.0, 20.0));
    assert!(actions.is_empty());
    assert_eq!(core.input, DragState::Armed);
    core.on_pointer_move(pt(110.0, 120.0));
    assert_eq!(core.input, DragState::Dragging { id, grab_offset: pt(10.0, 20.0) });
}

#[test]
fn pointer_up_disarms_and_clears_target() {
    let r = make_rect(100.0, 100.0, "blue");
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));
    core.on_pointer_move(pt(160.0, 160.0));
    let actions = core.on_pointer_up(pt(160.0, 160.0), Button::Primary);
    assert_eq!(core.input, DragState::Idle);
    assert!(core.target().is_none());
    // Still hovering the rectangle after release.
    assert_eq!(cursor_change(&actions), Some("grab"));
}

#[test]
fn secondary_release_keeps_primary_drag() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));
    let actions = core.on_pointer_up(pt(150.0, 150.0), Button::Secondary);
    assert!(actions.is_empty());
    assert_eq!(core.target(), Some(id));
    core.on_pointer_move(pt(170.0, 160.0));
    let moved = core.doc.get(&id).map(Rect::origin);
    assert_eq!(moved, Some(pt(120.0, 110.0)));
}

#[test]
fn moves_after_release_do_not_drag() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));
    core.on_pointer_move(pt(170.0, 170.0));
    core.on_pointer_up(pt(170.0, 170.0), Button::Primary);
    core.on_pointer_move(pt(500.0, 500.0));
    assert_eq!(core.doc.get(&id).map(|r| (r.x, r.y)), Some((120.0, 120.0)));
}

#[test]
fn new_drag_recomputes_offset() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(110.0, 110.0), Button::Primary);
    core.on_pointer_move(pt(110.0, 110.0));
    core.on_pointer_up(pt(110.0, 110.0), Button::Primary);
    core.on_pointer_down(pt(190.0, 190.0), Button::Primary);
    core.on_pointer_move(pt(190.0, 190.0));
    assert_eq!(core.input, DragState::Dragging { id, grab_offset: pt(90.0, 90.0) });
}

#[test]
fn pointer_leave_ends_gesture() {
    let mut core = board_with(vec![make_rect(100.0, 100.0, "blue")]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));
    let actions = core.on_pointer_leave();
    assert_eq!(core.input, DragState::Idle);
    assert_eq!(cursor_change(&actions), Some("default"));
}

#[test]
fn dragging_vanished_target_falls_back_to_armed() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));
    core.doc.remove(&id);
    let actions = core.on_pointer_move(pt(160.0, 160.0));
    assert!(actions.is_empty());
    assert_eq!(core.input, DragState::Armed);
}

#[test]
fn load_snapshot_resets_gesture() {
    let mut core = board_with(vec![make_rect(100.0, 100.0, "blue")]);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.load_snapshot(vec![make_rect(0.0, 0.0, "red")]);
    assert_eq!(core.input, DragState::Idle);
    assert_eq!(core.doc.len(), 1);
}

// =============================================================
// BoardCore: hover cursor
// =============================================================

#[test]
fn hover_over_rect_requests_grab_cursor_once() {
    let mut core = board_with(vec![make_rect(100.0, 100.0, "blue")]);
    let first = core.on_pointer_move(pt(150.0, 150.0));
    assert_eq!(cursor_change(&first), Some("grab"));
    let second = core.on_pointer_move(pt(151.0, 151.0));
    assert!(second.is_empty());
    assert_eq!(core.cursor(), "grab");
}

#[test]
fn hover_off_rect_restores_default_cursor() {
    let mut core = board_with(vec![make_rect(100.0, 100.0, "blue")]);
    core.on_pointer_move(pt(150.0, 150.0));
    let actions = core.on_pointer_move(pt(50.0, 50.0));
    assert_eq!(cursor_change(&actions), Some("default"));
}

#[test]
fn idle_moves_never_reposition() {
    let r = make_rect(100.0, 100.0, "blue");
    let id = r.id;
    let mut core = board_with(vec![r]);
    core.on_pointer_move(pt(150.0, 150.0));
    core.on_pointer_move(pt(300.0, 300.0));
    assert_eq!(core.doc.get(&id).map(|r| (r.x, r.y)), Some((100.0, 100.0)));
}

// =============================================================
// Helpers under test
// =============================================================

#[test]
fn palette_index_clamps_to_range() {
    assert_eq!(palette_index(4, 0.0), 0);
    assert_eq!(palette_index(4, 0.999), 3);
    assert_eq!(palette_index(4, 1.0), 3);
    assert_eq!(palette_index(0, 0.5), 0);
}

#[test]
fn spawn_coordinate_keeps_circle_inside() {
    assert_eq!(spawn_coordinate(100.0, 10.0, 0.0), 10.0);
    assert_eq!(spawn_coordinate(100.0, 10.0, 1.0), 90.0);
    assert_eq!(spawn_coordinate(15.0, 10.0, 0.7), 7.5);
}
