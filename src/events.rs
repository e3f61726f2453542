mod keyboard;
mod pointer;
mod viewport;

pub use keyboard::wire_close_key;
pub use pointer::{wire_input_handlers, InputWiring};
pub use viewport::{apply_resize, wire_page_lifecycle, wire_resize, ResizeTargets};
