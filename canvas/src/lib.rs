//! Canvas engines for the browser demos.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! state and per-frame logic of both demos: the circle field (a pool of
//! bouncing circles that grow under the pointer and scatter on press) and the
//! drag board (rectangles picked up and moved with the pointer). The host
//! layer is responsible only for wiring DOM events and the animation frame
//! callback to the engines.
//!
//! Each demo is split into a browser-free core ([`engine::FieldCore`],
//! [`engine::BoardCore`]) and a wrapper that owns the `<canvas>` element and
//! draws ([`engine::FieldEngine`], [`engine::BoardEngine`]).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Demo cores, their canvas-owning wrappers, and [`engine::Action`] |
//! | [`circle`] | Circle entity and its per-frame update step |
//! | [`doc`] | Ordered rectangle store for the drag board |
//! | [`hit`] | Topmost-rectangle hit-testing |
//! | [`input`] | Pointer state, buttons, and the drag state machine |
//! | [`geom`] | Points and surface bounds |
//! | [`config`] | Serde-backed demo configuration and validation |
//! | [`render`] | Drawing to a 2D context |
//! | [`consts`] | Default constants for both demos |

pub mod circle;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
