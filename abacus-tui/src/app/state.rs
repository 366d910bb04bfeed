//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libabacus::config::TuiConfig;
use libabacus::{CalculatorState, Config};

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Calculator session
    pub calculator: CalculatorState,

    /// Keypad focus cursor as (row, col)
    pub focus: (usize, usize),

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            mouse_enabled: false,
            help_visible: false,
            calculator: CalculatorState::new(),
            focus: (0, 0),
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}

impl UiConfig {
    /// Build from the `[tui]` config section, applying environment overrides
    pub fn from_config(tui: &TuiConfig) -> Self {
        let colors_enabled = tui.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("ABACUS_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("ABACUS_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(tui.tick_rate_ms);

        Self {
            colors_enabled,
            unicode_enabled: tui.unicode,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state from a loaded config file
    pub fn from_config(config: &Config) -> Self {
        Self {
            calculator: CalculatorState::with_error_entry(config.engine.error_entry),
            config: UiConfig::from_config(&config.tui),
            ..Self::default()
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        libabacus::current_display(&self.calculator)
    }
}
