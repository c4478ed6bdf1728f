//! Event handling for the terminal host.
//!
//! The event loop coordinates keyboard input, intents coming up from the
//! widget and repainting.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
