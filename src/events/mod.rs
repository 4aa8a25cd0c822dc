pub mod controls;
pub mod orientation;
pub mod pointer;

pub use controls::{flip_if_click, wire_controls};
pub use orientation::wire_orientation;
pub use pointer::{wire_pointer, wire_resize, wire_touch};
