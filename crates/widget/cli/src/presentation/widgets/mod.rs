//! Widgets composing the terminal layout, one per region.
pub mod activity;
pub mod bill;
pub mod checklist;
pub mod controls;
pub mod footer;
pub mod header;
pub mod status;
