//! Header widget displaying the table title and inferred state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use table_widget_core::TableView;

use crate::presentation::theme::Theme;

/// Render the header panel with the widget title and current state.
pub fn render(frame: &mut Frame, area: Rect, view: &TableView, theme: &Theme) {
    let text = Line::from(vec![
        Span::styled(view.title.as_str(), theme.title()),
        Span::raw(" | State: "),
        Span::styled(view.state.to_string(), Style::default().fg(Color::Yellow)),
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Table "),
    );

    frame.render_widget(paragraph, area);
}
