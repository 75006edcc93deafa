pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_carousel_keys, wire_global_keydown, KeyboardWiring};
pub use pointer::wire_carousel_input;
