//! Main TUI runner - entry point and event loop

use agentdesk_app::{Engine, Settings};
use agentdesk_core::prelude::*;
use agentdesk_core::FixtureSet;
use ratatui::layout::Rect;

use super::{event, render, terminal};

/// Run the workstation until the agent quits.
///
/// Must be called inside a multi-threaded tokio runtime: timers run as
/// tasks while this loop blocks on terminal input.
pub async fn run(settings: Settings, fixtures: FixtureSet) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mouse = settings.ui.mouse;
    if mouse {
        if let Err(e) = terminal::enable_mouse() {
            warn!("{}", e);
        }
    }

    let mut engine = Engine::new(settings, fixtures);
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    if mouse {
        terminal::disable_mouse();
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let tick_rate = engine.state.settings.ui.tick_rate();

    while !engine.should_quit() {
        // Timer completions and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        let regions = header_regions(terminal, engine)?;
        if let Some(message) = event::poll(tick_rate, &regions)? {
            engine.process_message(message);
        }
    }

    info!("Leaving the event loop");
    Ok(())
}

/// Where the header and its popover were just drawn, for pointer hit-testing.
fn header_regions(terminal: &ratatui::DefaultTerminal, engine: &Engine) -> Result<Vec<Rect>> {
    let size = terminal.size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    Ok(render::header_regions(&engine.state, screen))
}
