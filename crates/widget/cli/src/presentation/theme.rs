//! Ratatui styling for the table view.
//!
//! Maps the framework-agnostic tones and flags of the view tree to concrete
//! terminal styles.

use ratatui::style::{Color, Modifier, Style};
use table_widget_core::{ChecklistRow, Tone};

use crate::activity::ActivityKind;

/// Consistent color scheme for the terminal host.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status(&self, tone: Tone) -> Style {
        match tone {
            Tone::Neutral => Style::default().fg(Color::LightBlue),
            Tone::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn row(&self, row: &ChecklistRow, focused: bool) -> Style {
        let mut style = if row.checked {
            Style::default().fg(Color::LightMagenta)
        } else {
            Style::default().fg(Color::White)
        };

        if row.locked {
            style = style.add_modifier(Modifier::DIM);
        }
        if focused && !row.locked {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn total(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn activity(&self, kind: ActivityKind) -> Style {
        match kind {
            ActivityKind::Intent => Style::default().fg(Color::Cyan),
            ActivityKind::Reply => Style::default().fg(Color::White),
            ActivityKind::Warning => Style::default().fg(Color::LightRed),
        }
    }
}
