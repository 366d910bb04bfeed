//! Test application initialization
//!
//! Verifies that the app initializes with correct defaults
//! based on config and environment variables.

use abacus_tui::app::AppState;
use libabacus::config::{Config, TuiConfig};
use libabacus::ErrorEntry;
use serial_test::serial;

#[test]
fn test_app_starts_with_zero_display() {
    let state = AppState::new();

    assert_eq!(state.display(), "0");
    assert_eq!(state.calculator.pending_operator(), None);
    assert!(!state.should_quit);
}

#[test]
fn test_overlays_and_mouse_off_on_boot() {
    let state = AppState::new();

    assert!(!state.mouse_enabled);
    assert!(!state.help_visible);
    assert!(state.status.message.is_none());
    assert_eq!(state.focus, (0, 0));
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_abacus_tui_no_color_env() {
    std::env::set_var("ABACUS_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("ABACUS_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("ABACUS_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("ABACUS_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_tick_rate_default_100ms() {
    std::env::remove_var("ABACUS_TUI_TICK_MS");
    let state = AppState::new();

    assert_eq!(state.config.tick_rate_ms, 100);
}

#[test]
#[serial]
fn test_from_config() {
    std::env::remove_var("NO_COLOR");
    std::env::remove_var("ABACUS_TUI_NO_COLOR");
    std::env::remove_var("ABACUS_TUI_TICK_MS");

    let mut config = Config::default();
    config.engine.error_entry = ErrorEntry::Literal;
    config.tui = TuiConfig {
        colors: false,
        unicode: false,
        tick_rate_ms: 40,
    };

    let state = AppState::from_config(&config);
    assert_eq!(state.calculator.error_entry(), ErrorEntry::Literal);
    assert!(!state.config.colors_enabled);
    assert!(!state.config.unicode_enabled);
    assert_eq!(state.config.tick_rate_ms, 40);
}
