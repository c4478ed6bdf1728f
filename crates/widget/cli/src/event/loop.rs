//! Event loop orchestrating widget intents, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Intents the widget emits, answered by the demo restaurant
//! - Keyboard input bound to the controls of the view tree
//! - Rendering the view tree and activity log

use anyhow::Result;
use table_widget_core::{RenderImpact, TableIntent, TableWidget, WidgetConfig};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{
    activity::ActivityLog, config::CliConfig, input::InputHandler, presentation::terminal::Tui,
    restaurant::DemoRestaurant, sink::ChannelSink, state::AppState,
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Whether the loop keeps going after a key action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoopStep {
    Continue(RenderImpact),
    Quit,
}

/// Event loop owning the widget and its host.
///
/// The widget's intents travel through a channel so that emitting never
/// re-enters the restaurant while the widget is mid-activation.
pub struct EventLoop {
    pub(crate) widget: TableWidget<ChannelSink>,
    pub(crate) restaurant: DemoRestaurant,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) activity: ActivityLog,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    /// Builds the loop and returns the receiving end of the widget's intents.
    pub fn new(
        widget_config: WidgetConfig,
        restaurant: DemoRestaurant,
        cli_config: CliConfig,
    ) -> (Self, mpsc::UnboundedReceiver<TableIntent>) {
        let (tx_intent, rx_intent) = mpsc::unbounded_channel();
        let widget = TableWidget::with_config(widget_config, ChannelSink::new(tx_intent));

        let event_loop = Self {
            widget,
            restaurant,
            input: InputHandler::new(),
            app_state: AppState::new(),
            activity: ActivityLog::new(cli_config.log_capacity),
            cli_config,
        };
        (event_loop, rx_intent)
    }

    pub async fn run(
        mut self,
        mut intents: mpsc::UnboundedReceiver<TableIntent>,
        terminal: &mut Tui,
    ) -> Result<()> {
        // Initial render
        self.render(terminal)?;

        loop {
            tokio::select! {
                intent = intents.recv() => {
                    let Some(intent) = intent else {
                        tracing::warn!("Intent stream closed");
                        break;
                    };
                    self.handle_intent(intent, terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}
