//! Itemized bill with total.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use table_widget_core::BillView;

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, bill: &BillView, theme: &Theme) {
    let mut lines: Vec<Line> = bill
        .lines
        .iter()
        .map(|line| Line::from(line.text()))
        .collect();

    let rule_width = area.width.saturating_sub(2) as usize;
    lines.push(Line::from(Span::styled("─".repeat(rule_width), theme.border())));
    lines.push(Line::from(vec![
        Span::styled("Total  ", theme.total()),
        Span::styled(bill.total.as_str(), theme.total()),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Bill "),
    );

    frame.render_widget(paragraph, area);
}
