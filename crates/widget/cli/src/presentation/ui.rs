//! UI rendering of the widget's view tree.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use table_widget_core::{TableView, ViewBody};

use crate::{
    activity::ActivityLog,
    presentation::{terminal::Tui, theme::Theme, widgets},
    state::AppState,
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view: &'a TableView,
    pub activity: &'a ActivityLog,
    pub app_state: &'a AppState,
    pub log_panel_height: u16,
}

/// Render the terminal UI for the current view.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Lay out and draw every panel into `frame`.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = Theme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(3),                    // Status
            Constraint::Min(3),                       // Body
            Constraint::Length(3),                    // Controls
            Constraint::Length(ctx.log_panel_height), // Activity
            Constraint::Length(2),                    // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view, &theme);
    widgets::status::render(frame, chunks[1], &ctx.view.status, &theme);
    render_body(frame, chunks[2], ctx, &theme);
    widgets::controls::render(frame, chunks[3], &ctx.view.actions, &theme);

    let recent: Vec<_> = ctx
        .activity
        .recent(ctx.log_panel_height as usize)
        .collect();
    widgets::activity::render(frame, chunks[4], &recent, &theme);

    widgets::footer::render(frame, chunks[5], ctx.view.state, &theme);
}

fn render_body(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &Theme) {
    match &ctx.view.body {
        ViewBody::Prompt => {
            let prompt = Paragraph::new(Line::from(Span::styled(
                "Press enter to ask for the menu",
                theme.hint(),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            );
            frame.render_widget(prompt, area);
        }
        ViewBody::Checklist(rows) => {
            widgets::checklist::render(frame, area, rows, ctx.app_state.focus, theme);
        }
        ViewBody::Bill(bill) => {
            widgets::bill::render(frame, area, bill, theme);
        }
    }
}
