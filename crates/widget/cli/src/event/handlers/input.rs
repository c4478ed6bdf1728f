//! Input handling (keyboard polling and key actions).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use table_widget_core::{ChecklistRow, Control, RenderImpact};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    event::r#loop::LoopStep,
    input::KeyAction,
    presentation::terminal::Tui,
};

impl EventLoop {
    /// Poll for keyboard input without blocking the loop.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press, returning `true` when the app should exit.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.apply_key_action(self.input.handle_key(key)) {
            LoopStep::Quit => {
                tracing::info!("Quit requested");
                Ok(true)
            }
            LoopStep::Continue(impact) => {
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
        }
    }

    pub(in crate::event) fn apply_key_action(&mut self, action: KeyAction) -> LoopStep {
        let impact = match action {
            KeyAction::Quit => return LoopStep::Quit,
            KeyAction::MoveFocus(delta) => {
                let rows = self.widget.view().rows().len();
                if rows == 0 {
                    RenderImpact::none()
                } else {
                    self.app_state.move_focus(delta, rows);
                    RenderImpact::redraw()
                }
            }
            KeyAction::ToggleFocused => self.toggle_row(self.app_state.focus),
            KeyAction::ToggleNth(index) => {
                let impact = self.toggle_row(index);
                if index < self.widget.view().rows().len() {
                    self.app_state.focus = index;
                    impact.combine(RenderImpact::redraw())
                } else {
                    impact
                }
            }
            KeyAction::ActivatePrimary => match self.widget.view().primary_action() {
                Some(action) => {
                    let control = action.control;
                    self.activate(control)
                }
                None => RenderImpact::none(),
            },
            KeyAction::Activate(control) => self.activate(control),
            KeyAction::Reset => {
                self.restaurant.abandon_order();
                let impact = self.widget.reset();
                self.app_state.focus = 0;
                self.activity.reply("Table reset");
                impact.combine(RenderImpact::redraw())
            }
            KeyAction::None => RenderImpact::none(),
        };

        self.app_state.clamp_focus(self.widget.view().rows().len());
        LoopStep::Continue(impact)
    }

    fn toggle_row(&mut self, index: usize) -> RenderImpact {
        if self.widget.order_status().is_some() {
            self.activity
                .warn("Items are locked: the order is already placed");
            return RenderImpact::redraw();
        }

        let control = self
            .widget
            .view()
            .rows()
            .get(index)
            .and_then(ChecklistRow::control);
        match control {
            Some(control) => self.activate(control),
            None => RenderImpact::none(),
        }
    }

    /// Activate a control through the view, warning when it is inactive.
    fn activate(&mut self, control: Control) -> RenderImpact {
        match self.widget.activate(control) {
            Some(impact) => impact,
            None => {
                self.activity
                    .warn(format!("{} is not available right now", describe(control)));
                RenderImpact::redraw()
            }
        }
    }
}

fn describe(control: Control) -> String {
    match control {
        Control::RequestMenu => "Request Menu".to_string(),
        Control::ToggleItem(id) => format!("Item {id}"),
        Control::PlaceOrder => "Place Order".to_string(),
        Control::RequestBill => "Request Bill".to_string(),
        Control::PayBill => "Pay Bill".to_string(),
    }
}
