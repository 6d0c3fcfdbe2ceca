//! Canvas host components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each host owns one `canvas` engine behind `Rc<RefCell<Option<_>>>`, shared
//! between the mount effect, the DOM pointer handlers, and (for the circle
//! field) the animation frame callback. Everything runs on the browser's
//! single thread, so borrows never overlap.

pub mod circle_field_host;
pub mod drag_board_host;
