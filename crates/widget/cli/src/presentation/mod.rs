//! Presentation layer: terminal lifecycle, styling and widget rendering.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
