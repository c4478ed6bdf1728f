//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the widget's current view tree.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        self.app_state
            .clamp_focus(self.widget.view().rows().len());

        let ctx = ui::RenderContext {
            view: self.widget.view(),
            activity: &self.activity,
            app_state: &self.app_state,
            log_panel_height: self.cli_config.ui.log_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
