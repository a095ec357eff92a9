pub mod pointer;
pub mod window;

pub use pointer::wire_input_handlers;
pub use window::{wire_resize, wire_teardown};
