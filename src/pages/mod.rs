//! One page per demo.

pub mod circles;
pub mod drag;
