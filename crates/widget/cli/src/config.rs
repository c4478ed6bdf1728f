//! CLI-specific configuration for the terminal host.
use std::env;
use std::path::PathBuf;

/// Terminal host configuration.
///
/// Widget display settings live in [`table_widget_core::WidgetConfig`]; this
/// holds what only the terminal host needs.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Number of entries kept in the activity log.
    pub log_capacity: usize,
    /// JSON menu served by the demo restaurant. Built-in menu when unset.
    pub menu_path: Option<PathBuf>,
    /// Name of the log session directory. Timestamp when unset.
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            log_capacity: 64,
            menu_path: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_LOG_CAPACITY` - Activity log capacity (default: 64)
    /// - `TABLE_LOG_PANEL_HEIGHT` - Activity panel height in lines (default: 8)
    /// - `TABLE_MENU_PATH` - JSON menu file for the demo restaurant
    /// - `TABLE_SESSION_ID` - Log session name (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("TABLE_LOG_CAPACITY") {
            config.log_capacity = capacity.max(1);
        }
        if let Some(height) = read_env::<u16>("TABLE_LOG_PANEL_HEIGHT") {
            config.ui.log_panel_height = height.max(3);
        }
        if let Some(path) = env::var_os("TABLE_MENU_PATH").filter(|path| !path.is_empty()) {
            config.menu_path = Some(PathBuf::from(path));
        }
        if let Ok(session) = env::var("TABLE_SESSION_ID")
            && !session.trim().is_empty()
        {
            config.session_id = Some(session.trim().to_string());
        }

        config
    }
}

/// UI layout configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the activity panel in lines (including borders).
    pub log_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
