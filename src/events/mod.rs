pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keydown;
pub use pointer::{wire_item_clicks, wire_touch, wire_wheel};
