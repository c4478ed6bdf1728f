//! Activity panel listing recent intents and restaurant replies.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::activity::{ActivityEntry, ActivityKind};
use crate::presentation::theme::Theme;

/// Render entries newest first, as many as fit inside the borders.
pub fn render(frame: &mut Frame, area: Rect, entries: &[&ActivityEntry], theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = entries
        .iter()
        .take(visible)
        .map(|entry| {
            let marker = match entry.kind {
                ActivityKind::Intent => "→ ",
                ActivityKind::Reply => "← ",
                ActivityKind::Warning => "! ",
            };
            Line::from(vec![
                Span::styled(marker, theme.activity(entry.kind)),
                Span::styled(entry.text.as_str(), theme.activity(entry.kind)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Activity "),
    );

    frame.render_widget(paragraph, area);
}
