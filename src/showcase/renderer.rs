//! Terminal setup and the showcase event loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use super::app::ShowcaseApp;
use super::fixtures::Fixtures;
use crate::config::Config;
use crate::ui::core::{EventHandler, EventType};

/// Run the showcase until the user quits
pub async fn run_app(config: &Config) -> Result<()> {
    // Fixture problems are reported before the terminal is taken over
    let fixtures = Fixtures::bundled()?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ShowcaseApp::new(config, &fixtures);
    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ShowcaseApp,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        // Spinners animate on ticks, so every event redraws
        terminal.draw(|f| app.render(f, f.area()))?;

        match event_handler.next_event().await? {
            EventType::Tick | EventType::Resize(_, _) | EventType::Other => {}
            event => app.handle_event(event),
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
