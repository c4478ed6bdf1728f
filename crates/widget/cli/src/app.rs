//! Glue code tying the widget, the demo restaurant and the terminal UI together.
use anyhow::Result;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use crate::restaurant::DemoRestaurant;
use table_widget_core::WidgetConfig;

pub struct TableApp {
    cli_config: CliConfig,
    widget_config: WidgetConfig,
    restaurant: DemoRestaurant,
}

pub struct TableAppBuilder {
    cli_config: CliConfig,
    widget_config: WidgetConfig,
}

impl TableAppBuilder {
    pub fn new(cli_config: CliConfig, widget_config: WidgetConfig) -> Self {
        Self {
            cli_config,
            widget_config,
        }
    }

    /// Loads the restaurant's menu and assembles the app.
    pub fn build(self) -> Result<TableApp> {
        let restaurant = DemoRestaurant::load(self.cli_config.menu_path.as_deref())?;

        Ok(TableApp {
            cli_config: self.cli_config,
            widget_config: self.widget_config,
            restaurant,
        })
    }
}

impl TableApp {
    pub fn builder(cli_config: CliConfig, widget_config: WidgetConfig) -> TableAppBuilder {
        TableAppBuilder::new(cli_config, widget_config)
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("Customer table starting...");

        let TableApp {
            cli_config,
            widget_config,
            restaurant,
        } = self;

        tracing::info!(
            "Serving {} menu items at \"{}\"",
            restaurant.menu().len(),
            widget_config.title
        );

        let (event_loop, intents) = EventLoop::new(widget_config, restaurant, cli_config);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(intents, &mut terminal).await?;

        tracing::info!("Customer table exiting");

        Ok(())
    }
}
