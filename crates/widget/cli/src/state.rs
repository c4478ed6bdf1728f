//! Terminal-only UI state that the widget does not own.

/// Keyboard focus within the rendered checklist.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Index of the focused checklist row.
    pub focus: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus by `delta` rows, wrapping around `row_count`.
    pub fn move_focus(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            self.focus = 0;
            return;
        }
        let current = self.focus.min(row_count - 1) as isize;
        self.focus = (current + delta).rem_euclid(row_count as isize) as usize;
    }

    /// Keeps focus inside the list after the view changed size.
    pub fn clamp_focus(&mut self, row_count: usize) {
        self.focus = self.focus.min(row_count.saturating_sub(1));
    }
}
