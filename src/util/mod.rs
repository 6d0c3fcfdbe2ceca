//! Browser glue shared by the canvas hosts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate DOM and environment concerns from the host
//! components so the pure parts can be tested natively.

pub mod canvas_input;
pub mod frame_loop;
pub mod page_config;
pub mod viewport;
