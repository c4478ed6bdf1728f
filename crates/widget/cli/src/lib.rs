//! Terminal host for the customer table widget.
//!
//! This crate embeds a [`table_widget_core::TableWidget`] in a ratatui
//! interface and plays the part of the restaurant behind it.
//!
//! # Architecture
//!
//! The terminal layer is a pure host:
//! - Binds keys to the controls of the widget's view tree
//! - Paints the view tree and an activity log
//! - Receives intents over a channel and answers them through a demo restaurant
//!   that assigns menu, order status and bill back down to the widget

mod activity;
mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
pub mod restaurant;
mod sink;
mod state;

pub use app::{TableApp, TableAppBuilder};
pub use config::{CliConfig, UiConfig};
pub use restaurant::{DemoRestaurant, HostError, HostReply};

// Re-export for convenience (used in main.rs)
pub use table_widget_core::WidgetConfig;
