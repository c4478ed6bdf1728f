//! Terminal entry point for the customer table.
use anyhow::Result;
use table_widget_cli::{CliConfig, TableApp, WidgetConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli_config = CliConfig::from_env();
    let widget_config = WidgetConfig::from_env();

    // File-only logging; the TUI owns stderr
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting customer table");
    tracing::info!("Menu source: {:?}", cli_config.menu_path);

    TableApp::builder(cli_config, widget_config)
        .build()?
        .run()
        .await
}
