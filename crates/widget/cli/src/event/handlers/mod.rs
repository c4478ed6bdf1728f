//! Event handler implementations for EventLoop.
//!
//! - `input`: Keyboard polling and key actions
//! - `host`: Intents answered by the restaurant
//! - `rendering`: Terminal rendering
//!
//! All handlers are `impl EventLoop` blocks in separate files.

mod host;
mod input;
mod rendering;
