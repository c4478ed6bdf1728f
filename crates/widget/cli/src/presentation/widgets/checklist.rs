//! Checklist widget listing menu items with their selection marks.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use table_widget_core::ChecklistRow;

use crate::presentation::theme::Theme;

/// Render checklist rows. Unlocked rows show their 1-9 shortcut and the
/// focused one is highlighted. Long menus scroll to keep the focused row in view.
pub fn render(frame: &mut Frame, area: Rect, rows: &[ChecklistRow], focus: usize, theme: &Theme) {
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled("No items", theme.hint()))]
    } else {
        rows.iter()
            .enumerate()
            .map(|(index, row)| row_line(index, row, index == focus, theme))
            .collect()
    };

    let title = if rows.iter().any(|row| row.locked) {
        " Your Order "
    } else {
        " Menu "
    };

    let visible_rows = usize::from(area.height.saturating_sub(2));
    let offset = scroll_offset(focus, rows.len(), visible_rows);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}

/// First row to draw so that `focus` sits inside a window of `visible` rows.
fn scroll_offset(focus: usize, row_count: usize, visible: usize) -> usize {
    if visible == 0 || row_count <= visible {
        return 0;
    }
    let focus = focus.min(row_count - 1);
    (focus + 1).saturating_sub(visible).min(row_count - visible)
}

fn row_line<'a>(index: usize, row: &'a ChecklistRow, focused: bool, theme: &Theme) -> Line<'a> {
    let mark = if row.checked { "[x]" } else { "[ ]" };
    let shortcut = if row.locked || index >= 9 {
        "   ".to_string()
    } else {
        format!("{}. ", index + 1)
    };

    Line::from(vec![
        Span::styled(shortcut, theme.hint()),
        Span::styled(format!("{mark} "), theme.row(row, focused)),
        Span::styled(row.label.as_str(), theme.row(row, focused)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use table_widget_core::ItemId;

    fn dishes(count: i64) -> Vec<ChecklistRow> {
        (1..=count)
            .map(|id| ChecklistRow {
                id: ItemId(id),
                label: format!("Dish{id}"),
                checked: false,
                locked: false,
            })
            .collect()
    }

    fn draw(rows: &[ChecklistRow], focus: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, rows, focus, &Theme::new());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn offset_follows_focus() {
        assert_eq!(scroll_offset(0, 30, 6), 0);
        assert_eq!(scroll_offset(5, 30, 6), 0);
        assert_eq!(scroll_offset(6, 30, 6), 1);
        assert_eq!(scroll_offset(29, 30, 6), 24);
        assert_eq!(scroll_offset(40, 30, 6), 24);
        assert_eq!(scroll_offset(10, 4, 6), 0);
        assert_eq!(scroll_offset(3, 30, 0), 0);
    }

    #[test]
    fn long_menu_keeps_focused_row_visible() {
        let rows = dishes(30);

        let top = draw(&rows, 0);
        assert!(top.contains("Dish1 "));
        assert!(!top.contains("Dish25"));

        let scrolled = draw(&rows, 24);
        assert!(scrolled.contains("Dish25"));
        assert!(!scrolled.contains("Dish1 "));
    }
}
