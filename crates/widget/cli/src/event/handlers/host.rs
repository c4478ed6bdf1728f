//! Intent handlers: forwards widget intents to the restaurant.

use anyhow::Result;
use table_widget_core::TableIntent;

use super::super::EventLoop;
use crate::presentation::terminal::Tui;

impl EventLoop {
    /// Answer one intent and repaint.
    pub(in crate::event) fn handle_intent(
        &mut self,
        intent: TableIntent,
        terminal: &mut Tui,
    ) -> Result<()> {
        self.process_intent(intent);
        // The activity log changed even when the widget did not.
        self.render(terminal)
    }

    /// Log the intent, let the restaurant answer it and log the outcome.
    pub(in crate::event) fn process_intent(&mut self, intent: TableIntent) {
        match intent.item_ids() {
            Some(ids) => {
                let ids = ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.activity.intent(format!("{} [{ids}]", intent.name()));
            }
            None => self.activity.intent(intent.name()),
        }

        match self.restaurant.handle(&intent, &mut self.widget) {
            Ok(reply) => {
                tracing::debug!(
                    intent = intent.name(),
                    redraw = reply.impact.requires_redraw,
                    "intent answered"
                );
                self.activity.reply(reply.message);
            }
            Err(e) => {
                tracing::warn!("Rejected {}: {}", intent.name(), e);
                self.activity
                    .warn(format!("{} rejected: {e}", intent.name()));
            }
        }

        self.app_state.clamp_focus(self.widget.view().rows().len());
    }
}
