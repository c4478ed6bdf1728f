//! Status banner for the current lifecycle stage.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use table_widget_core::view::StatusLine;

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, status: &StatusLine, theme: &Theme) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        status.text.as_str(),
        theme.status(status.tone),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(paragraph, area);
}
