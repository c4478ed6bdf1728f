//! Action buttons of the current view.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use table_widget_core::ActionButton;

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, actions: &[ActionButton], theme: &Theme) {
    let mut spans = Vec::with_capacity(actions.len() * 2);
    for action in actions {
        spans.push(Span::styled(
            format!(" {} ", action.label),
            theme.button(action.enabled),
        ));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );

    frame.render_widget(paragraph, area);
}
