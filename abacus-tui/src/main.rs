//! abacus-tui - Terminal keypad calculator
//!
//! Renders the display and a clickable keypad, and feeds every key press
//! to the calculator engine through the reducer.

use abacus_tui::{
    app::{event::EventHandler, event::TuiEvent, reduce, Action, AppState},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui,
};
use crossterm::event::{MouseButton, MouseEventKind};
use libabacus::{logging::LoggingConfig, Config};
use ratatui::layout::Rect;

fn main() -> Result<()> {
    // Load config before touching the terminal so errors print normally
    let config = Config::load()?;

    // The terminal belongs to the UI; logs only go to a file when asked
    if let Ok(path) = std::env::var("ABACUS_LOG_FILE") {
        LoggingConfig::from_settings(&config.logging, false)
            .with_env_overrides()
            .init_to_file(std::path::Path::new(&path))?;
    }

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, AppState::from_config(&config));
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);
    tracing::info!("abacus-tui started");

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            // Hit-testing needs the frame geometry, which the reducer never sees
            TuiEvent::Mouse(mouse) if state.mouse_enabled => {
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        let size = terminal.size()?;
                        let area = Rect::new(0, 0, size.width, size.height);
                        match ui::keypad_cell_at(area, mouse.column, mouse.row) {
                            Some((row, col)) => Action::PressCell { row, col },
                            None => Action::Mouse(mouse),
                        }
                    }
                    _ => Action::Mouse(mouse),
                }
            }
            other => other.into(),
        };

        let mouse_was_enabled = state.mouse_enabled;
        state = reduce(state, action);

        if state.mouse_enabled != mouse_was_enabled {
            set_mouse_capture(terminal, state.mouse_enabled)?;
        }

        tracing::trace!("display: {}", state.display());

        if state.should_quit {
            break;
        }
    }

    tracing::info!("abacus-tui exiting");
    Ok(())
}
