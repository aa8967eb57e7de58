use std::io;

use anyhow::{Context, Result};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use doppler::{
    app::App,
    event::{Event, EventHandler},
    handler::handle_key_events,
    logging,
    tui::{restore_after, Tui},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init()?;

    // Initialize the terminal user interface.
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).context("failed to initialize the terminal")?;
    let events = EventHandler::new();
    let mut tui = Tui::new(terminal, events);
    tui.init()?;
    log::info!("started");

    // Create an application.
    let mut app = App::new();

    // Start the main loop and exit the user interface whatever its outcome.
    let result = run(&mut tui, &mut app).await;
    restore_after(result, || tui.exit())?;
    log::info!("stopped");
    Ok(())
}

async fn run<B: Backend>(tui: &mut Tui<B>, app: &mut App) -> Result<()> {
    while app.running {
        // Handle events.
        match tui.events.next().await? {
            Event::Tick => {
                if app.tick() {
                    tui.render(&*app)?;
                }
            }
            Event::Key(event) => handle_key_events(event, app),
        }
    }
    Ok(())
}
