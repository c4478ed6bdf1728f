//! Footer with key hints for the current state.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use table_widget_core::TableState;

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: TableState, theme: &Theme) {
    let hints = match state {
        TableState::NoMenu => "enter/m: request menu",
        TableState::Selecting => "↑↓/jk: move | space/1-9: toggle | enter/o: place order",
        TableState::OrderPlaced => "enter/b: request bill",
        TableState::BillReady => "enter/p: pay bill",
    };

    let text = vec![
        Line::from(Span::styled(hints, theme.hint())),
        Line::from(Span::styled("r: reset table | q: quit", theme.hint())),
    ];

    frame.render_widget(Paragraph::new(text), area);
}
